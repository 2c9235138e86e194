//! git-reclone: replace a local git working copy with a fresh clone
//!
//! The run is a strict pipeline: interpret arguments, discover the repository
//! and pick a remote, confirm with the user, then empty the working tree and
//! clone the remote back into it.

pub mod cli;
pub mod config;
pub mod confirm;
pub mod error;
pub mod git;
pub mod reclone;
pub mod repo;
pub mod resolve;
pub mod workflow;

pub use error::{RecloneError, Result};
pub use repo::{RemoteSet, RepositoryContext};
pub use workflow::{InvocationConfig, Outcome};
