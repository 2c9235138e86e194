//! The reclone pipeline: resolve, confirm, replace

use crate::config::Config;
use crate::confirm::{confirm, play_banner};
use crate::error::Result;
use crate::git::RemoteTool;
use crate::reclone::{reclone, DeletionPlan};
use crate::repo::RepositoryContext;
use crate::resolve::{resolve_remote, RemoteMatcher};
use console::style;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// What a single invocation was asked to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationConfig {
    /// Skip the confirmation prompt.
    pub force_mode: bool,
    /// Never touch the filesystem or the network.
    pub test_mode: bool,
    /// Picks the remote; `None` means the first one.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Recloned { remote: String, root: PathBuf },
    Declined,
    /// Confirmed in test mode; nothing was deleted.
    Skipped { remote: String },
}

/// Run everything after argument handling against an already discovered
/// repository.
pub fn run<R, W>(
    invocation: &InvocationConfig,
    settings: &Config,
    context: &RepositoryContext,
    tool: &dyn RemoteTool,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let filter = invocation.filter.as_deref().or(settings.default_filter.as_deref());
    let matcher = RemoteMatcher::new(filter);
    let remote = resolve_remote(context, &matcher)?;

    if settings.animate {
        play_banner(Duration::from_millis(settings.frame_delay_ms));
    }

    if !confirm(&remote, context.root(), invocation.force_mode, input, out)? {
        info!("reclone declined");
        return Ok(Outcome::Declined);
    }

    if invocation.test_mode {
        return Ok(Outcome::Skipped { remote });
    }

    let plan = DeletionPlan::stage(context.root())?;
    reclone(&remote, &plan, tool, settings.verify_remote)?;

    writeln!(out, "{}", style("Recloned successfully.").green())?;
    Ok(Outcome::Recloned { remote, root: context.root_path.clone() })
}
