//! Git operations wrapper
//!
//! Local repository work (init, remotes, index, commit) goes through git2
//! (libgit2 bindings). Clone and push shell out to the `git` binary so the
//! user's credential helpers and SSH configuration apply.

pub mod commit;
pub mod remote;

pub use commit::*;
pub use remote::*;

use crate::util::log_cmd;
use git2::{Repository, RepositoryInitOptions};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Name of the ignore file checked before bootstrapping a directory
pub const IGNORE_FILE: &str = ".gitignore";

/// Branch created by a fresh init and pushed to on the remote
pub const DEFAULT_BRANCH: &str = "master";

/// Errors that can occur during git operations
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository: {0}")]
    NotARepo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git executable not found on PATH: {0}")]
    GitNotFound(String),

    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("Remote '{0}' already exists")]
    RemoteExists(String),

    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,

    #[error("Push failed: {0}")]
    PushFailed(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Open a git repository at the given path
pub fn open_repo<P: AsRef<Path>>(path: P) -> Result<Repository, GitError> {
    Repository::open(path.as_ref())
        .map_err(|e| GitError::NotARepo(format!("{}: {}", path.as_ref().display(), e)))
}

/// Check if a path is a git repository
pub fn is_git_repo<P: AsRef<Path>>(path: P) -> bool {
    Repository::open(path.as_ref()).is_ok()
}

/// Locate the `git` executable
pub fn ensure_git_available() -> Result<PathBuf, GitError> {
    which::which("git").map_err(|e| GitError::GitNotFound(e.to_string()))
}

/// Check whether a directory carries an ignore file at its top level
pub fn has_ignore_file<P: AsRef<Path>>(dir: P) -> bool {
    dir.as_ref().join(IGNORE_FILE).is_file()
}

/// Initialize version control in a directory
///
/// A fresh repository starts on [`DEFAULT_BRANCH`] regardless of the user's
/// `init.defaultBranch`. An existing repository is opened as-is.
pub fn init_repo<P: AsRef<Path>>(path: P) -> Result<Repository, GitError> {
    let path = path.as_ref();
    if is_git_repo(path) {
        return open_repo(path);
    }

    let mut opts = RepositoryInitOptions::new();
    opts.initial_head(DEFAULT_BRANCH);
    let repo = Repository::init_opts(path, &opts)?;
    tracing::debug!(path = %path.display(), "initialized repository");
    Ok(repo)
}

/// Clone a repository into `path`
///
/// The destination must not exist yet.
pub fn clone_repo<P: AsRef<Path>>(url: &str, path: P) -> Result<Repository, GitError> {
    let path = path.as_ref();
    if path.exists() {
        return Err(GitError::DestinationExists(path.to_path_buf()));
    }

    let mut cmd = Command::new("git");
    cmd.arg("clone").arg(url).arg(path);
    log_cmd(&cmd);
    let output = cmd
        .output()
        .map_err(|e| GitError::OperationFailed(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::OperationFailed(format!(
            "git clone failed: {}",
            stderr.trim()
        )));
    }

    open_repo(path)
}

/// Get the working directory of a repository
pub fn get_workdir(repo: &Repository) -> &Path {
    repo.workdir().unwrap_or_else(|| repo.path())
}

/// Get the current branch name
///
/// Works on an unborn branch (fresh init, no commits yet). A detached HEAD
/// has no branch to push and is reported as [`GitError::DetachedHead`].
pub fn get_current_branch(repo: &Repository) -> Result<String, GitError> {
    match repo.head() {
        Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
        Ok(_) => Err(GitError::DetachedHead),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
            let head_ref = repo.find_reference("HEAD")?;
            let target = head_ref
                .symbolic_target()
                .ok_or_else(|| GitError::OperationFailed("HEAD is not symbolic".to_string()))?;
            Ok(target.trim_start_matches("refs/heads/").to_string())
        }
        Err(e) => Err(e.into()),
    }
}

/// Check whether HEAD points at a commit instead of a branch
pub fn is_head_detached(repo: &Repository) -> bool {
    repo.head_detached().unwrap_or(false)
}
