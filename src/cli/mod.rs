//! Command-line entry point for git-reclone

use anyhow::Result;
use console::style;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, loader::default_config_dir, CONFIG_ENV};
use crate::error::{RecloneError, EXIT_OK};
use crate::git::GitCli;
use crate::repo::discover::ceiling_dirs_from_env;
use crate::repo::discover_repository;
use crate::workflow::{self, Outcome};

pub mod args;

/// Environment variable that turns on test mode.
pub const TEST_MODE_ENV: &str = "GIT_RECLONE_TEST";

pub fn run() -> Result<ExitCode> {
    // RUST_LOG in the environment always takes precedence; otherwise only warnings.
    let filter = EnvFilter::builder().with_default_directive(Level::WARN.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let interpretation = args::interpret(env::args().skip(1), test_mode_from_env());
    for notice in &interpretation.notices {
        match notice {
            args::Notice::Help => println!("{}", args::help_text()),
            args::Notice::Version => print!("{}", args::version_text()),
        }
    }
    if interpretation.short_circuits() {
        return Ok(exit_code(EXIT_OK));
    }

    let config_path = env::var_os(CONFIG_ENV).map(PathBuf::from);
    let settings = load_config(config_path.as_deref(), default_config_dir().as_deref())?;

    let cwd = env::current_dir()?;
    let result = discover_repository(&cwd, &ceiling_dirs_from_env()).and_then(|context| {
        workflow::run(
            &interpretation.invocation,
            &settings,
            &context,
            &GitCli,
            &mut io::stdin().lock(),
            &mut io::stdout().lock(),
        )
    });

    match result {
        Ok(Outcome::Recloned { remote, root }) => {
            tracing::info!(%remote, root = %root.display(), "reclone complete");
            Ok(exit_code(EXIT_OK))
        }
        Ok(Outcome::Declined | Outcome::Skipped { .. }) => Ok(exit_code(EXIT_OK)),
        Err(err) => Ok(report(&err)),
    }
}

fn report(err: &RecloneError) -> ExitCode {
    tracing::debug!(error = ?err, "reclone failed");
    println!("{}", style(err).yellow());
    exit_code(err.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn test_mode_from_env() -> bool {
    env::var(TEST_MODE_ENV)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
