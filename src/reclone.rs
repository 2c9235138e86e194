//! Replacing the working copy: stage, delete, clone

use crate::error::{RecloneError, Result};
use crate::git::RemoteTool;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Entries directly inside a repository root that a reclone will remove.
///
/// Staging only reads the directory; nothing is touched until [`execute`](Self::execute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPlan {
    root: PathBuf,
    entries: Vec<PathBuf>,
}

impl DeletionPlan {
    /// List every entry in `root`, hidden ones included.
    pub fn stage(root: &Path) -> Result<Self> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let name = entry.file_name();
            if name == "." || name == ".." {
                continue;
            }
            entries.push(entry.path());
        }
        entries.sort();
        debug!(root = %root.display(), count = entries.len(), "deletion staged");
        Ok(Self { root: root.to_path_buf(), entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Remove every staged entry. Stops at the first failure, leaving the
    /// entries already removed gone.
    pub fn execute(&self) -> Result<()> {
        info!(root = %self.root.display(), count = self.entries.len(), "removing working copy");
        for path in &self.entries {
            remove_entry(path).map_err(|source| RecloneError::Remove { path: path.clone(), source })?;
        }
        Ok(())
    }
}

/// Remove one entry; symlinks are unlinked, never followed.
fn remove_entry(path: &Path) -> std::io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Replace the contents of `plan.root()` with a fresh clone of `remote`.
///
/// With `verify_remote` set, `remote` must answer a probe before anything is
/// deleted.
pub fn reclone(
    remote: &str,
    plan: &DeletionPlan,
    tool: &dyn RemoteTool,
    verify_remote: bool,
) -> Result<()> {
    if verify_remote && !tool.probe(remote)? {
        warn!(remote, "remote did not answer ls-remote");
        return Err(RecloneError::RemoteUnreachable { remote: remote.to_string() });
    }

    plan.execute()?;

    info!(remote, root = %plan.root().display(), "cloning");
    if tool.clone_into(remote, plan.root())? {
        Ok(())
    } else {
        Err(RecloneError::CloneFailed { remote: remote.to_string(), root: plan.root().to_path_buf() })
    }
}
