//! New command implementation
//!
//! Creates an auto-initialized remote repository and clones it into the
//! current directory.

use std::path::{Path, PathBuf};

use super::{provision, resolve_description, resolve_visibility, rollback};
use crate::cli::output::Output;
use crate::cli::prompt::Prompter;
use crate::core::error::CommandError;
use crate::core::repository::{CloneProtocol, RemoteRepository, RepositorySpec};
use crate::git;
use crate::platform::HostingPlatform;

/// Values supplied on the command line; anything missing is prompted for
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    pub name: Option<String>,
    pub private: Option<bool>,
    pub description: Option<String>,
    pub protocol: CloneProtocol,
}

/// Result of a successful `new`
#[derive(Debug)]
pub struct NewOutcome {
    pub repository: RemoteRepository,
    /// Where the clone landed
    pub path: PathBuf,
}

/// Run the new command
pub async fn run_new(
    platform: &dyn HostingPlatform,
    prompter: &dyn Prompter,
    options: NewOptions,
    cwd: &Path,
) -> Result<NewOutcome, CommandError> {
    let name = match options.name {
        Some(n) => n,
        None => prompter.input("Repository name", None)?,
    };
    let visibility = resolve_visibility(prompter, options.private)?;
    let description = resolve_description(prompter, options.description)?;

    git::ensure_git_available()?;

    let spec = RepositorySpec::new(name, description, visibility);
    let (repository, url) = provision(platform, &spec, true, options.protocol).await?;

    let destination = cwd.join(&repository.name);
    let spinner = Output::spinner(&format!("Cloning {}...", repository.full_name()));
    let cloned = git::clone_repo(&url, &destination);
    spinner.finish_and_clear();

    if let Err(e) = cloned {
        return Err(rollback(platform, &repository, e.into()).await);
    }

    Output::success(&format!(
        "Repository {} successfully created!",
        Output::repo_name(&repository.full_name())
    ));
    Output::kv("remote", &repository.html_url);
    Output::kv("local", &destination.display().to_string());

    Ok(NewOutcome {
        repository,
        path: destination,
    })
}
