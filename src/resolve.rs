//! Remote selection

use crate::error::{RecloneError, Result};
use crate::repo::RepositoryContext;
use regex::Regex;
use tracing::debug;

/// Predicate deciding which remote URL a filter selects.
#[derive(Debug, Clone)]
pub enum RemoteMatcher {
    /// No filter given: every remote matches.
    Any,
    /// Unanchored regex search; plain text behaves as a substring.
    Pattern(Regex),
    /// Filter that is not a valid regex, matched as a substring.
    Literal(String),
}

impl RemoteMatcher {
    /// Build a matcher from an optional user filter.
    pub fn new(filter: Option<&str>) -> Self {
        let Some(filter) = filter else {
            return RemoteMatcher::Any;
        };
        match Regex::new(filter) {
            Ok(regex) => RemoteMatcher::Pattern(regex),
            Err(err) => {
                debug!(filter, %err, "filter is not a valid regex; matching literally");
                RemoteMatcher::Literal(filter.to_string())
            }
        }
    }

    pub fn matches(&self, remote: &str) -> bool {
        match self {
            RemoteMatcher::Any => true,
            RemoteMatcher::Pattern(regex) => regex.is_match(remote),
            RemoteMatcher::Literal(text) => remote.contains(text.as_str()),
        }
    }

    /// The filter as typed, for error messages.
    pub fn describe(&self) -> &str {
        match self {
            RemoteMatcher::Any => ".*",
            RemoteMatcher::Pattern(regex) => regex.as_str(),
            RemoteMatcher::Literal(text) => text,
        }
    }
}

/// Pick the first remote of `context` that `matcher` accepts.
pub fn resolve_remote(context: &RepositoryContext, matcher: &RemoteMatcher) -> Result<String> {
    if context.remotes.is_empty() {
        return Err(RecloneError::NoRemotesConfigured);
    }

    match context.remotes.iter().find(|remote| matcher.matches(remote)) {
        Some(remote) => {
            debug!(remote, filter = matcher.describe(), "remote selected");
            Ok(remote.to_string())
        }
        None => Err(RecloneError::NoMatchingRemote {
            filter: matcher.describe().to_string(),
            remotes: context.remotes.to_vec(),
        }),
    }
}
