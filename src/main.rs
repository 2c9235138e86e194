//! git-reclone: replace a local working copy with a fresh clone of one of its remotes.

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    git_reclone::cli::run()
}
