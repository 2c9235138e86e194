//! Error types for the reclone workflow

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a completed run, a declined confirmation, or a flag short-circuit.
pub const EXIT_OK: i32 = 0;
/// Exit status for every terminal failure.
pub const EXIT_FAILURE: i32 = 1;

/// Terminal failures of a reclone run.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Error)]
pub enum RecloneError {
    #[error("Not currently in a git repository.")]
    NotARepository,

    #[error("No remotes found in this repository.")]
    NoRemotesConfigured,

    #[error("No remotes found that match {filter}. All remotes:\n{}", remotes.join("\n"))]
    NoMatchingRemote { filter: String, remotes: Vec<String> },

    #[error("Remote {remote} is not reachable; nothing was deleted.")]
    RemoteUnreachable { remote: String },

    #[error("Clone from {remote} failed; {} has been emptied.", root.display())]
    CloneFailed { remote: String, root: PathBuf },

    #[error("Failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Git(#[from] git2::Error),
}

impl RecloneError {
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, RecloneError>;
