//! Configuration loading
//!
//! Settings come from an optional TOML or YAML file. An explicit path given
//! through `GIT_RECLONE_CONFIG` must parse; an auto-discovered file that fails
//! to parse is ignored with a warning.

pub mod loader;

pub use loader::{load_config, Config, CONFIG_ENV};
