use thiserror::Error;

/// Unified error type for git-prep operations
#[derive(Error, Debug)]
pub enum GitPrepError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Could not find or initialise a local git repository. A repository is required.")]
    RepositoryNotFound,

    #[error("Could not initialise a local git repository. {0}")]
    Initialization(String),

    #[error("Git config '{0}' must include 1-2 sections separated by stops.")]
    InvalidConfigKey(String),

    #[error("'{0}' is not a valid hook file name.")]
    InvalidHookName(String),

    #[error("Could not create the git hooks directory. {0}")]
    HooksDirectory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-prep
pub type Result<T> = std::result::Result<T, GitPrepError>;

impl GitPrepError {
    /// Create an initialization error with context
    pub fn initialization(msg: impl Into<String>) -> Self {
        GitPrepError::Initialization(msg.into())
    }

    /// Create an invalid config key error naming the offending key
    pub fn invalid_config_key(key: impl Into<String>) -> Self {
        GitPrepError::InvalidConfigKey(key.into())
    }

    /// Create an invalid hook name error naming the offending hook
    pub fn invalid_hook_name(name: impl Into<String>) -> Self {
        GitPrepError::InvalidHookName(name.into())
    }

    /// Create a hooks directory error with context
    pub fn hooks_directory(msg: impl Into<String>) -> Self {
        GitPrepError::HooksDirectory(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitPrepError::Config(msg.into())
    }
}
