//! Repository context management

use crate::repo::RemoteSet;
use std::path::{Path, PathBuf};

/// Snapshot of the repository a reclone operates on.
///
/// Captured once per invocation and handed to every later stage, so no stage
/// re-derives anything from the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryContext {
    pub root_path: PathBuf,
    pub remotes: RemoteSet,
}

impl RepositoryContext {
    pub fn new(root_path: PathBuf, remotes: RemoteSet) -> Self {
        Self { root_path, remotes }
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }
}
