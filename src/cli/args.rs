//! Command-line token interpretation
//!
//! Any token starting with `-` is a flag. Flags take effect, but their mere
//! presence also ends the run before a repository is touched: `git reclone
//! --force` exits 0 without recloning.

use crate::workflow::InvocationConfig;
use clap::{crate_version, Arg, ArgAction, Command};

const ABOUT: &str = "a git repo restoring tool";

const LONG_ABOUT: &str = "a git repo restoring tool

reclones from the remote listed first, overwriting your local copy.
to restore from a particular remote repository, specify the host.";

const EXAMPLES: &str = "Examples:
    git reclone bitbucket # reclone using bitbucket
    git reclone github    # reclone using github";

/// Output requested by an informational flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub invocation: InvocationConfig,
    /// Informational output, in the order the flags appeared.
    pub notices: Vec<Notice>,
    /// At least one flag token was seen, recognized or not.
    pub saw_flag: bool,
}

impl Interpretation {
    /// The run ends here, with exit code 0.
    pub fn short_circuits(&self) -> bool {
        self.invocation.test_mode || self.saw_flag
    }
}

/// Split `tokens` (program name excluded) into flags and the optional filter.
pub fn interpret<I, S>(tokens: I, test_mode: bool) -> Interpretation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut invocation = InvocationConfig { test_mode, ..Default::default() };
    let mut notices = Vec::new();
    let mut saw_flag = false;

    for token in tokens.into_iter().map(Into::into) {
        if token.starts_with('-') {
            saw_flag = true;
            match token.as_str() {
                "--force" | "-f" => invocation.force_mode = true,
                "--help" | "-h" => notices.push(Notice::Help),
                "--version" | "-v" => notices.push(Notice::Version),
                other => tracing::debug!(flag = other, "ignoring unrecognized flag"),
            }
        } else if invocation.filter.is_none() {
            invocation.filter = Some(token);
        }
    }

    Interpretation { invocation, notices, saw_flag }
}

/// Command description used to render help and version text.
pub fn command() -> Command {
    Command::new("git-reclone")
        .bin_name("git reclone")
        .version(crate_version!())
        .about(ABOUT)
        .long_about(LONG_ABOUT)
        .after_help(EXAMPLES)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("filter")
                .value_name("REMOTE")
                .help("Pick the first remote URL matching this pattern (default: the first remote)"),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Skip the confirmation prompt"),
        )
        .arg(Arg::new("help").short('h').long("help").action(ArgAction::Help).help("Print help"))
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
}

pub fn help_text() -> String {
    command().render_long_help().to_string()
}

pub fn version_text() -> String {
    command().render_version()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_becomes_filter() {
        let parsed = interpret(["host-b"], false);
        assert_eq!(parsed.invocation.filter.as_deref(), Some("host-b"));
        assert!(!parsed.short_circuits());
    }

    #[test]
    fn only_first_positional_is_used() {
        let parsed = interpret(["github", "bitbucket"], false);
        assert_eq!(parsed.invocation.filter.as_deref(), Some("github"));
    }

    #[test]
    fn no_tokens_means_no_filter() {
        let parsed = interpret(Vec::<String>::new(), false);
        assert_eq!(parsed.invocation, InvocationConfig::default());
        assert!(!parsed.short_circuits());
    }

    #[test]
    fn force_alone_still_short_circuits() {
        let parsed = interpret(["--force"], false);
        assert!(parsed.invocation.force_mode);
        assert!(parsed.notices.is_empty());
        assert!(parsed.short_circuits());
    }

    #[test]
    fn force_with_filter_still_short_circuits() {
        let parsed = interpret(["-f", "github"], false);
        assert!(parsed.invocation.force_mode);
        assert_eq!(parsed.invocation.filter.as_deref(), Some("github"));
        assert!(parsed.short_circuits());
    }

    #[test]
    fn unrecognized_flags_are_ignored_but_short_circuit() {
        let parsed = interpret(["--bogus"], false);
        assert!(!parsed.invocation.force_mode);
        assert!(parsed.notices.is_empty());
        assert!(parsed.short_circuits());
    }

    #[test]
    fn informational_flags_keep_their_order() {
        let parsed = interpret(["-v", "--help", "--version"], false);
        assert_eq!(parsed.notices, vec![Notice::Version, Notice::Help, Notice::Version]);
    }

    #[test]
    fn test_mode_short_circuits_without_flags() {
        let parsed = interpret(["github"], true);
        assert!(parsed.invocation.test_mode);
        assert!(parsed.short_circuits());
    }

    #[test]
    fn help_text_lists_flags_and_examples() {
        let help = help_text();
        assert!(help.contains("a git repo restoring tool"));
        assert!(help.contains("--force"));
        assert!(help.contains("--version"));
        assert!(help.contains("git reclone github"));
    }

    #[test]
    fn version_text_names_the_binary() {
        assert!(version_text().contains(env!("CARGO_PKG_VERSION")));
    }
}
