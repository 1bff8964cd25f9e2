//! Git hook installation
//!
//! Installs user-supplied scripts as Git hooks:
//! - [types]: the closed registry of legal hook file names
//! - [assets]: default scripts bundled into the binary
//! - [install]: resolves each hook's source (filesystem first, then the
//!   bundled table) and copies it into the hooks directory
//!
//! Hook names are validated for the whole batch before anything is written;
//! a missing source only skips that one hook.

pub mod assets;
pub mod install;
pub mod types;

pub use install::install_hooks;
pub use types::{is_valid_hook_name, HookType};
