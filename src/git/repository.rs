use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;

use crate::boundary::PrepWarning;
use crate::error::{GitPrepError, Result};
use crate::ui;

/// Wrapper around git2::Repository for build-time repository preparation.
///
/// Provides the small set of operations git-prep needs: locating a repository,
/// initialising one when absent, and guaranteeing the hooks directory exists.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Attempt to discover a git repository at or above the given directory.
    ///
    /// Walks upward from `base` looking for a `.git` directory, the same way
    /// the git CLI does. Absence is a distinguishable outcome, not an error.
    ///
    /// # Returns
    /// * `Ok(Some(repo))` - A repository was found
    /// * `Ok(None)` - No repository exists at or above `base`
    /// * `Err` - The probe itself failed
    pub fn discover<P: AsRef<Path>>(base: P) -> Result<Option<Self>> {
        match Repository::discover(base) {
            Ok(repo) => Ok(Some(GitRepository { repo })),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Discover a repository or fail the build step.
    ///
    /// The repository guard used by every step that cannot proceed without a
    /// repository.
    pub fn require<P: AsRef<Path>>(base: P) -> Result<Self> {
        Self::discover(base)?.ok_or(GitPrepError::RepositoryNotFound)
    }

    /// Initialise a git repository in `base` if one does not already exist.
    ///
    /// Idempotent: when a repository is already discoverable it is returned
    /// as-is. Safe under concurrent invocation: if the init attempt fails, the
    /// directory is re-probed, and a repository created by a racing process is
    /// treated as success (downgraded to a warning).
    pub fn initialise<P: AsRef<Path>>(base: P) -> Result<Self> {
        let base = base.as_ref();

        if let Some(existing) = Self::discover(base)? {
            ui::display_status("A Git repository is already initialized.");
            return Ok(existing);
        }

        match Repository::init(base) {
            Ok(repo) => {
                ui::display_success("Initialized a local git repository.");
                Ok(GitRepository { repo })
            }
            Err(init_err) => match Self::discover(base)? {
                // Lost the race to another initialiser; theirs counts.
                Some(existing) => {
                    ui::display_warning(&PrepWarning::InitRaceLost);
                    Ok(existing)
                }
                None => Err(GitPrepError::initialization(init_err.to_string())),
            },
        }
    }

    /// The repository's git directory (usually `<root>/.git`).
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// The canonical hooks directory under the git directory.
    pub fn hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }

    /// Create the hooks directory (and parents) if it does not exist.
    ///
    /// Failure to create it is fatal for the invoking step.
    pub fn ensure_hooks_dir(&self) -> Result<PathBuf> {
        let hooks_dir = self.hooks_dir();
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir)
                .map_err(|e| GitPrepError::hooks_directory(e.to_string()))?;
        }
        Ok(hooks_dir)
    }

    /// Name of the currently checked out branch.
    ///
    /// Resolves the symbolic HEAD directly so the name is available even on an
    /// unborn branch (a freshly initialised repository with no commits).
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.find_reference("HEAD")?;
        match head.symbolic_target() {
            Some(target) => Ok(target
                .strip_prefix("refs/heads/")
                .unwrap_or(target)
                .to_string()),
            // Detached HEAD; report the commit id instead.
            None => Ok(head
                .target()
                .map(|oid| oid.to_string())
                .unwrap_or_else(|| "HEAD".to_string())),
        }
    }

    /// Open the repository configuration. Writes land in `.git/config`.
    pub fn local_config(&self) -> Result<git2::Config> {
        Ok(self.repo.config()?)
    }
}
