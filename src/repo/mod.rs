//! Repository discovery (root path and remote URLs)

pub mod context;
pub mod discover;
pub mod remotes;

pub use context::RepositoryContext;
pub use discover::discover_repository;
pub use remotes::RemoteSet;
