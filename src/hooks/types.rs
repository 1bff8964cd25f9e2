use std::fmt;
use std::str::FromStr;

use crate::error::GitPrepError;

/// Enumerated well-known Git hook file names.
///
/// The set is fixed at compile time and matches the hooks the git client and
/// server recognise, including the vendor-specific p4-* hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookType {
    ApplypatchMsg,
    PreApplypatch,
    PostApplypatch,
    PreCommit,
    PreMergeCommit,
    PrepareCommitMsg,
    CommitMsg,
    PostCommit,
    PreRebase,
    PostCheckout,
    PostMerge,
    PrePush,
    PreReceive,
    Update,
    ProcReceive,
    PostReceive,
    PostUpdate,
    ReferenceTransaction,
    PushToCheckout,
    PreAutoGc,
    PostRewrite,
    SendemailValidate,
    FsmonitorWatchman,
    P4Changelist,
    P4PrepareChangelist,
    P4PostChangelist,
    P4PreSubmit,
}

impl HookType {
    /// Every hook type, in the order git documents them.
    pub const ALL: [HookType; 27] = [
        HookType::ApplypatchMsg,
        HookType::PreApplypatch,
        HookType::PostApplypatch,
        HookType::PreCommit,
        HookType::PreMergeCommit,
        HookType::PrepareCommitMsg,
        HookType::CommitMsg,
        HookType::PostCommit,
        HookType::PreRebase,
        HookType::PostCheckout,
        HookType::PostMerge,
        HookType::PrePush,
        HookType::PreReceive,
        HookType::Update,
        HookType::ProcReceive,
        HookType::PostReceive,
        HookType::PostUpdate,
        HookType::ReferenceTransaction,
        HookType::PushToCheckout,
        HookType::PreAutoGc,
        HookType::PostRewrite,
        HookType::SendemailValidate,
        HookType::FsmonitorWatchman,
        HookType::P4Changelist,
        HookType::P4PrepareChangelist,
        HookType::P4PostChangelist,
        HookType::P4PreSubmit,
    ];

    /// The canonical file name for hooks of this type.
    pub fn file_name(&self) -> &'static str {
        match self {
            HookType::ApplypatchMsg => "applypatch-msg",
            HookType::PreApplypatch => "pre-applypatch",
            HookType::PostApplypatch => "post-applypatch",
            HookType::PreCommit => "pre-commit",
            HookType::PreMergeCommit => "pre-merge-commit",
            HookType::PrepareCommitMsg => "prepare-commit-msg",
            HookType::CommitMsg => "commit-msg",
            HookType::PostCommit => "post-commit",
            HookType::PreRebase => "pre-rebase",
            HookType::PostCheckout => "post-checkout",
            HookType::PostMerge => "post-merge",
            HookType::PrePush => "pre-push",
            HookType::PreReceive => "pre-receive",
            HookType::Update => "update",
            HookType::ProcReceive => "proc-receive",
            HookType::PostReceive => "post-receive",
            HookType::PostUpdate => "post-update",
            HookType::ReferenceTransaction => "reference-transaction",
            HookType::PushToCheckout => "push-to-checkout",
            HookType::PreAutoGc => "pre-auto-gc",
            HookType::PostRewrite => "post-rewrite",
            HookType::SendemailValidate => "sendemail-validate",
            HookType::FsmonitorWatchman => "fsmonitor-watchman",
            HookType::P4Changelist => "p4-changelist",
            HookType::P4PrepareChangelist => "p4-prepare-changelist",
            HookType::P4PostChangelist => "p4-post-changelist",
            HookType::P4PreSubmit => "p4-pre-submit",
        }
    }

    /// Look a hook type up by its exact file name.
    pub fn from_file_name(name: &str) -> Option<HookType> {
        Self::ALL.iter().copied().find(|hook| hook.file_name() == name)
    }
}

/// Returns true iff `name` exactly matches a recognised hook file name.
pub fn is_valid_hook_name(name: &str) -> bool {
    HookType::from_file_name(name).is_some()
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

impl FromStr for HookType {
    type Err = GitPrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookType::from_file_name(s).ok_or_else(|| GitPrepError::invalid_hook_name(s))
    }
}
