//! Git repository plumbing
//!
//! Everything git-prep does to a repository goes through this module:
//!
//! - [repository::GitRepository]: discovery, initialisation, and the hooks
//!   directory guard, backed by the `git2` crate
//! - [config]: dotted config key parsing and repository-local config writes
//!
//! Discovery reports absence as `Ok(None)` rather than an error so callers can
//! decide whether to initialise or fail the build step.

pub mod config;
pub mod repository;

pub use config::ConfigKey;
pub use repository::GitRepository;
