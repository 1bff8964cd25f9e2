use std::fmt;

/// Warnings that occur while preparing the repository.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum PrepWarning {
    /// A hook source matched neither a file on disk nor a bundled script
    HookSourceUnresolvable { hook: String, source: String },
    /// A hook could not be copied into the hooks directory
    HookCopyFailed { hook: String, reason: String },
    /// Another process initialised the repository first
    InitRaceLost,
}

impl fmt::Display for PrepWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepWarning::HookSourceUnresolvable { hook, source } => {
                write!(
                    f,
                    "Could not find '{}' on the filesystem or among the bundled scripts, skipping hook '{}'",
                    source, hook
                )
            }
            PrepWarning::HookCopyFailed { hook, reason } => {
                write!(
                    f,
                    "Could not move '{}' into the git hooks directory: {}",
                    hook, reason
                )
            }
            PrepWarning::InitRaceLost => {
                write!(
                    f,
                    "Tried to initialize a Git repository, but a repository already exists."
                )
            }
        }
    }
}
