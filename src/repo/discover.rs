//! Locate the enclosing repository and read its remotes

use crate::error::{RecloneError, Result};
use crate::repo::{RemoteSet, RepositoryContext};
use git2::{ErrorCode, Repository, RepositoryOpenFlags};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Walk up from `start` to the enclosing non-bare repository and snapshot its
/// working tree root and remote URLs.
///
/// The search never enters a directory listed in `ceilings`. A bare repository
/// has no working copy to replace and is reported as [`RecloneError::NotARepository`].
pub fn discover_repository(start: &Path, ceilings: &[PathBuf]) -> Result<RepositoryContext> {
    let repo = match Repository::open_ext(start, RepositoryOpenFlags::empty(), ceilings) {
        Ok(repo) => repo,
        Err(e) if e.code() == ErrorCode::NotFound => {
            debug!(start = %start.display(), "no repository found");
            return Err(RecloneError::NotARepository);
        }
        Err(e) => return Err(e.into()),
    };

    let Some(workdir) = repo.workdir() else {
        debug!(git_dir = %repo.path().display(), "bare repository has no working tree");
        return Err(RecloneError::NotARepository);
    };
    let root_path = workdir.canonicalize()?;

    let remotes = remote_urls(&repo)?;
    debug!(root = %root_path.display(), remotes = remotes.len(), "repository discovered");

    Ok(RepositoryContext::new(root_path, remotes))
}

/// Collect remote URLs the way `git remote -v` lists them: remotes by name,
/// each contributing its fetch URL and then its push URL.
pub fn remote_urls(repo: &Repository) -> Result<RemoteSet> {
    let names = repo.remotes()?;
    let mut set = RemoteSet::new();
    for name in names.iter().flatten() {
        let remote = repo.find_remote(name)?;
        if let Some(url) = remote.url() {
            set.push(url);
        }
        if let Some(push_url) = remote.pushurl().or_else(|| remote.url()) {
            set.push(push_url);
        }
    }
    Ok(set)
}

/// Directories listed in `GIT_CEILING_DIRECTORIES`, which bound the upward search.
pub fn ceiling_dirs_from_env() -> Vec<PathBuf> {
    env::var_os("GIT_CEILING_DIRECTORIES")
        .map(|value| env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()).collect())
        .unwrap_or_default()
}
