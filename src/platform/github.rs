//! GitHub platform adapter

use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::session::Session;
use super::traits::{HostingPlatform, PlatformError};
use crate::core::repository::{RemoteRepository, RepositorySpec};

/// GitHub API adapter
pub struct GitHubAdapter {
    session: Session,
    http: reqwest::Client,
}

impl GitHubAdapter {
    /// Create a new GitHub adapter bound to an authenticated session
    pub fn new(session: Session) -> Self {
        Self {
            session,
            http: reqwest::Client::new(),
        }
    }

    /// Get configured Octocrab instance
    async fn get_client(&self) -> Result<Octocrab, PlatformError> {
        let creds = self.session.credentials();
        Octocrab::builder()
            .basic_auth(creds.username().to_string(), creds.password().to_string())
            .base_uri(self.session.api_url())
            .map_err(|e| PlatformError::ApiError(format!("Invalid base URL: {}", e)))?
            .build()
            .map_err(|e| PlatformError::ApiError(format!("Failed to create client: {}", e)))
    }

    /// Raw REST request with basic auth and the standard GitHub headers
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let creds = self.session.credentials();
        self.http
            .request(method, format!("{}{}", self.session.api_url(), path))
            .basic_auth(creds.username(), Some(creds.password()))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "quickrepo")
    }
}

#[derive(Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    private: bool,
    auto_init: bool,
}

#[derive(Deserialize)]
struct RepoResponse {
    name: String,
    owner: OwnerResponse,
    #[serde(default)]
    private: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    clone_url: String,
    #[serde(default)]
    ssh_url: String,
    #[serde(default)]
    html_url: String,
}

#[derive(Deserialize)]
struct OwnerResponse {
    login: String,
}

impl From<RepoResponse> for RemoteRepository {
    fn from(r: RepoResponse) -> Self {
        RemoteRepository {
            owner: r.owner.login,
            name: r.name,
            private: r.private,
            description: r.description.filter(|d| !d.is_empty()),
            clone_url: r.clone_url,
            ssh_url: r.ssh_url,
            html_url: r.html_url,
        }
    }
}

/// GitHub error payload: `{"message": ..., "errors": [{"field": ..., "message": ...}]}`
#[derive(Deserialize, Default)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

impl ApiErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Per-field messages, which may be objects or bare strings
    fn details(&self) -> Vec<String> {
        self.errors
            .iter()
            .filter_map(|e| {
                e.get("message")
                    .and_then(|m| m.as_str())
                    .or_else(|| e.as_str())
                    .map(|s| s.to_string())
            })
            .collect()
    }

    fn summary(&self, fallback: &str) -> String {
        let details = self.details();
        match (self.message.is_empty(), details.is_empty()) {
            (true, true) => fallback.trim().to_string(),
            (false, true) => self.message.clone(),
            (true, false) => details.join("; "),
            (false, false) => format!("{} ({})", self.message, details.join("; ")),
        }
    }
}

/// Map a failed repository creation response onto a platform error
fn classify_create_failure(status: StatusCode, body: &str, name: &str) -> PlatformError {
    let parsed = ApiErrorBody::parse(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PlatformError::AuthError(parsed.summary(status.as_str()))
        }
        StatusCode::UNPROCESSABLE_ENTITY => {
            if parsed
                .details()
                .iter()
                .any(|d| d.to_lowercase().contains("already exists"))
            {
                PlatformError::NameConflict(name.to_string())
            } else {
                PlatformError::ValidationError(parsed.summary(body))
            }
        }
        _ => PlatformError::ApiError(format!(
            "Failed to create repository ({}): {}",
            status,
            parsed.summary(body)
        )),
    }
}

/// Map an octocrab failure onto a platform error
fn classify_octocrab_error(err: octocrab::Error, owner: &str, name: &str) -> PlatformError {
    if let octocrab::Error::GitHub { source, .. } = &err {
        let message = source.message.to_lowercase();
        if message.contains("not found") {
            return PlatformError::NotFound(format!("Repository {}/{} not found", owner, name));
        }
        if message.contains("bad credentials") || message.contains("requires authentication") {
            return PlatformError::AuthError(source.message.clone());
        }
        return PlatformError::ApiError(format!("Failed to get repository: {}", source.message));
    }

    let text = err.to_string();
    let lower = text.to_lowercase();
    if lower.contains("connect") || lower.contains("dns") || lower.contains("timed out") {
        PlatformError::NetworkError(text)
    } else {
        PlatformError::ApiError(format!("Failed to get repository: {}", text))
    }
}

#[async_trait]
impl HostingPlatform for GitHubAdapter {
    fn platform_name(&self) -> &'static str {
        "github"
    }

    async fn create_repository(
        &self,
        spec: &RepositorySpec,
        auto_init: bool,
    ) -> Result<RemoteRepository, PlatformError> {
        let start = Instant::now();

        let response = self
            .request(Method::POST, "/user/repos")
            .json(&CreateRepoRequest {
                name: &spec.name,
                description: spec.description(),
                private: spec.visibility.is_private(),
                auto_init,
            })
            .send()
            .await
            .map_err(|e| PlatformError::NetworkError(e.to_string()))?;

        let status = response.status();
        debug!(
            name = %spec.name,
            private = spec.visibility.is_private(),
            auto_init,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "GitHub create repository complete"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_create_failure(status, &body, &spec.name));
        }

        let repo: RepoResponse = response
            .json()
            .await
            .map_err(|e| PlatformError::ParseError(e.to_string()))?;

        Ok(repo.into())
    }

    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RemoteRepository, PlatformError> {
        let start = Instant::now();
        let client = self.get_client().await?;

        let result = client.repos(owner, name).get().await;
        debug!(
            owner,
            name,
            success = result.is_ok(),
            duration_ms = start.elapsed().as_millis() as u64,
            "GitHub get repository complete"
        );

        let repo = result.map_err(|e| classify_octocrab_error(e, owner, name))?;

        Ok(RemoteRepository {
            owner: repo
                .owner
                .as_ref()
                .map(|o| o.login.clone())
                .unwrap_or_else(|| owner.to_string()),
            name: repo.name.clone(),
            private: repo.private.unwrap_or(false),
            description: repo.description.clone().filter(|d| !d.is_empty()),
            clone_url: repo
                .clone_url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default(),
            ssh_url: repo
                .ssh_url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default(),
            html_url: repo
                .html_url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default(),
        })
    }

    async fn delete_repository(&self, owner: &str, name: &str) -> Result<(), PlatformError> {
        let path = format!(
            "/repos/{}/{}",
            urlencoding::encode(owner),
            urlencoding::encode(name)
        );

        let response = self
            .request(Method::DELETE, &path)
            .send()
            .await
            .map_err(|e| PlatformError::NetworkError(e.to_string()))?;

        let status = response.status();
        debug!(owner, name, status = status.as_u16(), "GitHub delete repository complete");

        if status == StatusCode::NOT_FOUND {
            return Err(PlatformError::NotFound(format!(
                "Repository {}/{} not found",
                owner, name
            )));
        }

        if !status.is_success() {
            let body = ApiErrorBody::parse(&response.text().await.unwrap_or_default());
            let message = body.summary(status.as_str());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    PlatformError::AuthError(message)
                }
                _ => PlatformError::ApiError(format!(
                    "Failed to delete repository ({}): {}",
                    status, message
                )),
            });
        }

        Ok(())
    }
}
