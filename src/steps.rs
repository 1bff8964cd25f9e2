//! Build-step orchestration
//!
//! Each function mirrors one independently invokable build step: `check`,
//! `init`, `configure`, and `install`, plus the `run` pipeline that composes
//! them. Steps share the repository guard in [crate::git::GitRepository] and
//! honour the per-step skip switches from the configuration file.

use std::path::Path;

use crate::config::Config;
use crate::error::{GitPrepError, Result};
use crate::git::{config as git_config, GitRepository};
use crate::hooks;
use crate::ui;

/// Verify a repository exists, optionally initialising one.
///
/// Fails the step when no repository can be found and initialisation was not
/// requested.
pub fn check(base: &Path, initialise: bool) -> Result<()> {
    match GitRepository::discover(base)? {
        Some(repo) => report_found(&repo),
        None if initialise => GitRepository::initialise(base).map(|_| ()),
        None => Err(GitPrepError::RepositoryNotFound),
    }
}

fn report_found(repo: &GitRepository) -> Result<()> {
    ui::display_success("Found the local git repository.");
    ui::display_status(&format!("Current branch '{}'.", repo.current_branch()?));
    Ok(())
}

/// Initialise a repository if one does not already exist.
pub fn init(base: &Path, config: &Config) -> Result<()> {
    if config.skip.init {
        ui::display_status("Skipping repository initialisation.");
        return Ok(());
    }
    GitRepository::initialise(base).map(|_| ())
}

/// Apply the configured git config entries and the hooks-path override.
///
/// `hooks_path` (from the command line) takes precedence over the value in
/// the configuration file.
pub fn configure(base: &Path, config: &Config, hooks_path: Option<&str>) -> Result<()> {
    if config.skip.configure {
        ui::display_status("Skipping git config.");
        return Ok(());
    }

    let repo = GitRepository::require(base)?;
    repo.ensure_hooks_dir()?;
    git_config::apply_entries(&repo, &config.git_config)?;

    if let Some(path) = hooks_path.or(config.hooks_path.as_deref()) {
        git_config::set_hooks_path(&repo, path)?;
    }
    Ok(())
}

/// Install the configured hooks into the repository's hooks directory.
pub fn install(base: &Path, config: &Config) -> Result<()> {
    if config.skip.install {
        ui::display_status("Skipping hook installation.");
        return Ok(());
    }

    let repo = GitRepository::require(base)?;
    let hooks_dir = repo.ensure_hooks_dir()?;
    hooks::install_hooks(&config.install_hooks, &hooks_dir)
}

/// The full preparation pipeline.
///
/// Locate the repository (initialising when configured), guarantee the hooks
/// directory, apply config, and install hooks. Any fatal error along the way
/// aborts the run.
pub fn run(base: &Path, config: &Config) -> Result<()> {
    let repo = match GitRepository::discover(base)? {
        Some(repo) => {
            ui::display_success("Found the local git repository.");
            repo
        }
        None if config.initialise => GitRepository::initialise(base)?,
        None => return Err(GitPrepError::RepositoryNotFound),
    };

    let hooks_dir = repo.ensure_hooks_dir()?;

    if config.skip.configure {
        ui::display_status("Skipping git config.");
    } else {
        git_config::apply_entries(&repo, &config.git_config)?;
        if let Some(path) = config.hooks_path.as_deref() {
            git_config::set_hooks_path(&repo, path)?;
        }
    }

    if config.skip.install {
        ui::display_status("Skipping hook installation.");
    } else {
        hooks::install_hooks(&config.install_hooks, &hooks_dir)?;
    }

    Ok(())
}
