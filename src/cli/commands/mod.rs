//! CLI command implementations
//!
//! Each workflow lives in its own module; the steps they share
//! (session bootstrap, attribute prompts, provisioning, rollback) live here.

pub mod here;
pub mod new;

use tracing::warn;

use crate::cli::output::Output;
use crate::cli::prompt::{PromptError, Prompter};
use crate::core::error::CommandError;
use crate::core::repository::{CloneProtocol, RemoteRepository, RepositorySpec, Visibility};
use crate::platform::{Credentials, HostingPlatform, Session};

/// Build an authenticated session, prompting for whatever was not supplied
///
/// No request is made here; the first API call validates the credentials.
pub fn authenticate(
    prompter: &dyn Prompter,
    username: Option<String>,
    password: Option<String>,
    api_url: Option<&str>,
) -> Result<Session, CommandError> {
    let username = match username.filter(|u| !u.is_empty()) {
        Some(u) => u,
        None => prompter.input("Username", None)?,
    };
    let password = match password.filter(|p| !p.is_empty()) {
        Some(p) => p,
        None => prompter.password("Password")?,
    };
    Ok(Session::new(Credentials::new(username, password), api_url))
}

/// Visibility from `--private/--public`, else ask (default public)
fn resolve_visibility(
    prompter: &dyn Prompter,
    private: Option<bool>,
) -> Result<Visibility, PromptError> {
    let private = match private {
        Some(p) => p,
        None => prompter.confirm("Should the repository be private?", false)?,
    };
    Ok(Visibility::from_private(private))
}

/// Description from `--description`, else ask (default empty)
fn resolve_description(
    prompter: &dyn Prompter,
    description: Option<String>,
) -> Result<String, PromptError> {
    match description {
        Some(d) => Ok(d),
        None => prompter.input("Description", Some("")),
    }
}

/// Create the remote repository and resolve the address to wire locally
///
/// A failure to resolve the address rolls the fresh repository back.
async fn provision(
    platform: &dyn HostingPlatform,
    spec: &RepositorySpec,
    auto_init: bool,
    protocol: CloneProtocol,
) -> Result<(RemoteRepository, String), CommandError> {
    let spinner = Output::spinner(&format!(
        "Creating {} repository {}...",
        spec.visibility.as_str(),
        spec.name
    ));
    let created = platform.create_repository(spec, auto_init).await;
    spinner.finish_and_clear();
    let created = created?;

    let resolved = match platform
        .get_repository(&created.owner, &created.name)
        .await
    {
        Ok(repo) => repo,
        Err(e) => return Err(rollback(platform, &created, e.into()).await),
    };

    let url = resolved.clone_address(protocol).to_string();
    if url.is_empty() {
        let cause = CommandError::Remote(format!(
            "{} reported no clone address for {}",
            platform.platform_name(),
            resolved.full_name()
        ));
        return Err(rollback(platform, &created, cause).await);
    }

    Ok((resolved, url))
}

/// Delete a repository created by this invocation, then hand back the cause
///
/// Best effort: a failed delete is reported and the original error still wins.
async fn rollback(
    platform: &dyn HostingPlatform,
    repository: &RemoteRepository,
    cause: CommandError,
) -> CommandError {
    warn!(repository = %repository.full_name(), error = %cause, "rolling back remote repository");
    match platform
        .delete_repository(&repository.owner, &repository.name)
        .await
    {
        Ok(()) => Output::warning(&format!(
            "Removed remote repository {} after the failure below",
            repository.full_name()
        )),
        Err(e) => Output::warning(&format!(
            "Could not remove remote repository {}: {}",
            repository.full_name(),
            e
        )),
    }
    cause
}
