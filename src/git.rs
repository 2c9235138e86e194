//! `git` executable adapter.
//!
//! Network-facing steps shell out to `git` so transports, credential helpers
//! and `insteadOf` rewrites behave exactly as they do for the user.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

/// Remote operations the reclone needs from git.
pub trait RemoteTool {
    /// Whether `remote` answers a ref listing.
    fn probe(&self, remote: &str) -> io::Result<bool>;

    /// Clone `remote` into `dest`, which must be empty. Returns whether git
    /// reported success.
    fn clone_into(&self, remote: &str, dest: &Path) -> io::Result<bool>;
}

/// [`RemoteTool`] backed by the `git` found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl RemoteTool for GitCli {
    #[instrument(skip(self))]
    fn probe(&self, remote: &str) -> io::Result<bool> {
        let status = Command::new("git")
            .args(["ls-remote", "--quiet", "--", remote, "HEAD"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()?;
        debug!(code = ?status.code(), "ls-remote finished");
        Ok(status.success())
    }

    #[instrument(skip(self, dest), fields(dest = %dest.display()))]
    fn clone_into(&self, remote: &str, dest: &Path) -> io::Result<bool> {
        // The working directory may have been inside the tree that was just
        // emptied, so run from the destination itself.
        let status = Command::new("git")
            .args(["clone", "--", remote])
            .arg(dest)
            .current_dir(dest)
            .status()?;
        debug!(code = ?status.code(), "clone finished");
        Ok(status.success())
    }
}
