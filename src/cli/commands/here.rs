//! Here command implementation
//!
//! Turns the current directory into a repository and publishes it as a new
//! remote repository: init, add origin, stage top-level files, commit, push.

use git2::Repository;
use std::path::Path;

use super::{provision, resolve_description, resolve_visibility, rollback};
use crate::cli::output::Output;
use crate::cli::prompt::Prompter;
use crate::core::error::CommandError;
use crate::core::repository::{CloneProtocol, RemoteRepository, RepositorySpec};
use crate::git::{self, GitError, DEFAULT_BRANCH, IGNORE_FILE, ORIGIN};
use crate::platform::HostingPlatform;

/// Commit message used when none is given
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit";

/// Values supplied on the command line; anything missing is prompted for
#[derive(Debug, Clone, Default)]
pub struct HereOptions {
    /// Repository name; defaults to the directory name
    pub name: Option<String>,
    pub private: Option<bool>,
    pub description: Option<String>,
    pub message: Option<String>,
    /// Continue without asking when the ignore file is missing
    pub assume_yes: bool,
    pub protocol: CloneProtocol,
}

/// Result of a successful `here`
#[derive(Debug)]
pub struct HereOutcome {
    pub repository: RemoteRepository,
    /// Id of the commit that was pushed
    pub commit: String,
    /// Local branch that was pushed to the remote default branch
    pub branch: String,
    /// Top-level files included in the commit
    pub staged: Vec<String>,
}

/// Run the here command
pub async fn run_here(
    platform: &dyn HostingPlatform,
    prompter: &dyn Prompter,
    options: HereOptions,
    cwd: &Path,
) -> Result<HereOutcome, CommandError> {
    let name = match options.name {
        Some(n) => n,
        None => directory_name(cwd)?,
    };

    // Pre-flight: nothing below may touch the remote service
    git::ensure_git_available()?;
    if git::is_git_repo(cwd) {
        let existing = git::open_repo(cwd)?;
        if git::has_remote(&existing, ORIGIN) {
            return Err(GitError::RemoteExists(ORIGIN.to_string()).into());
        }
        if git::is_head_detached(&existing) {
            return Err(GitError::DetachedHead.into());
        }
    }
    if !git::has_ignore_file(cwd) && !options.assume_yes {
        Output::warning(&format!("No {} found in this directory", IGNORE_FILE));
        if !prompter.confirm("Continue anyway?", false)? {
            return Err(CommandError::UserAborted);
        }
    }

    let visibility = resolve_visibility(prompter, options.private)?;
    let description = resolve_description(prompter, options.description)?;
    let message = match options.message {
        Some(m) => m,
        None => prompter.input("Commit message", Some(DEFAULT_COMMIT_MESSAGE))?,
    };

    let spec = RepositorySpec::new(name, description, visibility);
    let (repository, url) = provision(platform, &spec, false, options.protocol).await?;

    let LocalCommit {
        repo,
        staged,
        commit,
        branch,
    } = match commit_local(cwd, &url, &message) {
        Ok(done) => done,
        Err(e) => return Err(rollback(platform, &repository, e.into()).await),
    };

    let spinner = Output::spinner(&format!(
        "Pushing {} to {}...",
        branch,
        repository.full_name()
    ));
    let pushed = git::push_branch(&repo, &branch, ORIGIN, DEFAULT_BRANCH, true);
    spinner.finish_and_clear();

    if let Err(e) = pushed {
        Output::warning(&format!(
            "Local commit {} was kept. Retry with: git push -u {} {}:{}",
            &commit[..7.min(commit.len())],
            ORIGIN,
            branch,
            DEFAULT_BRANCH
        ));
        return Err(e.into());
    }

    Output::success(&format!(
        "Repository {} successfully created and pushed!",
        Output::repo_name(&repository.full_name())
    ));
    Output::kv("remote", &repository.html_url);
    Output::kv("files", &staged.len().to_string());

    Ok(HereOutcome {
        repository,
        commit,
        branch,
        staged,
    })
}

struct LocalCommit {
    repo: Repository,
    staged: Vec<String>,
    commit: String,
    branch: String,
}

/// Init, register origin, stage and commit
fn commit_local(cwd: &Path, url: &str, message: &str) -> Result<LocalCommit, GitError> {
    let repo = git::init_repo(cwd)?;
    git::add_remote(&repo, ORIGIN, url)?;
    let staged = git::stage_top_level_files(&repo)?;
    let commit = git::create_commit(&repo, message)?;
    let branch = git::get_current_branch(&repo)?;
    Ok(LocalCommit {
        repo,
        staged,
        commit,
        branch,
    })
}

/// Last path component of the working directory
fn directory_name(cwd: &Path) -> Result<String, GitError> {
    cwd.file_name()
        .and_then(|n| n.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            GitError::OperationFailed(format!(
                "Cannot derive a repository name from {}",
                cwd.display()
            ))
        })
}
