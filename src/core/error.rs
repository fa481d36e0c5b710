//! Command-level errors and exit codes
//!
//! Every failure of `new` or `here` is reported as one of a closed set of kinds.
//! Lower layers ([`GitError`], [`PlatformError`], [`PromptError`]) are folded in
//! here so the binary can pick an exit code without inspecting messages.

use thiserror::Error;

use crate::cli::prompt::PromptError;
use crate::git::GitError;
use crate::platform::PlatformError;

#[derive(Error, Debug)]
pub enum CommandError {
    /// Credentials were rejected by the hosting service
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A repository with the requested name already exists
    #[error("Repository '{0}' already exists")]
    NameConflict(String),

    /// The hosting service refused or failed the request
    #[error("Remote service error: {0}")]
    Remote(String),

    /// A local file-system or version-control step failed
    #[error("{0}")]
    LocalVcs(GitError),

    /// The service or the git remote could not be reached, or the push failed
    #[error("Network error: {0}")]
    Network(String),

    /// Interactive input could not be collected
    #[error("{0}")]
    Prompt(#[from] PromptError),

    /// The operator declined to continue
    #[error("Aborted!")]
    UserAborted,
}

impl CommandError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::UserAborted => 1,
            CommandError::Auth(_) => 2,
            CommandError::NameConflict(_) => 3,
            CommandError::Remote(_) => 4,
            CommandError::Network(_) => 5,
            CommandError::LocalVcs(_) => 6,
            CommandError::Prompt(_) => 7,
        }
    }
}

impl From<PlatformError> for CommandError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::AuthError(msg) => CommandError::Auth(msg),
            PlatformError::NameConflict(name) => CommandError::NameConflict(name),
            PlatformError::NetworkError(msg) => CommandError::Network(msg),
            other => CommandError::Remote(other.to_string()),
        }
    }
}

impl From<GitError> for CommandError {
    fn from(err: GitError) -> Self {
        match err {
            GitError::PushFailed(msg) => CommandError::Network(msg),
            other => CommandError::LocalVcs(other),
        }
    }
}
