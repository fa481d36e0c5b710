//! Hosting platform trait definition

use async_trait::async_trait;
use thiserror::Error;

use crate::core::repository::{RemoteRepository, RepositorySpec};

/// Errors that can occur during platform operations
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Repository '{0}' already exists on this account")]
    NameConflict(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Interface for hosting platform adapters
#[async_trait]
pub trait HostingPlatform: Send + Sync {
    /// Short platform identifier used in logs
    fn platform_name(&self) -> &'static str;

    /// Create a repository owned by the authenticated user
    ///
    /// With `auto_init` the platform seeds an initial commit, so the result can
    /// be cloned right away. Without it the repository is empty and expects a push.
    async fn create_repository(
        &self,
        spec: &RepositorySpec,
        auto_init: bool,
    ) -> Result<RemoteRepository, PlatformError>;

    /// Look up an existing repository
    async fn get_repository(&self, owner: &str, name: &str)
        -> Result<RemoteRepository, PlatformError>;

    /// Delete a repository from the platform
    ///
    /// Destructive; only used to undo a repository created by the same invocation.
    async fn delete_repository(&self, owner: &str, name: &str) -> Result<(), PlatformError> {
        let _ = (owner, name);
        Err(PlatformError::ApiError(
            "Repository deletion not supported on this platform".to_string(),
        ))
    }
}
