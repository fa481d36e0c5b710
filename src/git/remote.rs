//! Git remote operations

use git2::Repository;
use std::process::Command;

use super::GitError;
use crate::util::log_cmd;
use tracing::debug;

/// Conventional name of the primary remote
pub const ORIGIN: &str = "origin";

/// Check whether a remote with the given name is configured
pub fn has_remote(repo: &Repository, remote: &str) -> bool {
    repo.find_remote(remote).is_ok()
}

/// Register a new remote
///
/// Fails with [`GitError::RemoteExists`] rather than overwriting an existing one.
pub fn add_remote(repo: &Repository, remote: &str, url: &str) -> Result<(), GitError> {
    if has_remote(repo, remote) {
        return Err(GitError::RemoteExists(remote.to_string()));
    }
    repo.remote(remote, url)?;
    debug!(remote, url, "added remote");
    Ok(())
}

/// Push a local branch to a (possibly differently named) remote branch
pub fn push_branch(
    repo: &Repository,
    local_branch: &str,
    remote: &str,
    remote_branch: &str,
    set_upstream: bool,
) -> Result<(), GitError> {
    let repo_path = super::get_workdir(repo);
    let refspec = format!("{}:{}", local_branch, remote_branch);

    let mut args = vec!["push", remote, refspec.as_str()];
    if set_upstream {
        args.insert(1, "-u");
    }

    let mut cmd = Command::new("git");
    cmd.args(&args).current_dir(repo_path);
    log_cmd(&cmd);
    let output = cmd
        .output()
        .map_err(|e| GitError::OperationFailed(e.to_string()))?;

    let success = output.status.success();
    debug!(local_branch, remote, remote_branch, success, "git push complete");

    if !success {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::PushFailed(interpret_push_error(&stderr)));
    }

    Ok(())
}

/// Interpret common git push errors into user-friendly messages
fn interpret_push_error(stderr: &str) -> String {
    let lower = stderr.to_lowercase();
    if lower.contains("[rejected]") || lower.contains("protected branch") {
        return format!(
            "Push rejected by the remote.\n(Original: {})",
            stderr.trim()
        );
    }
    if lower.contains("could not read from remote") || lower.contains("repository not found") {
        return format!(
            "Cannot reach remote. Check your network connection and repository URL.\n\
             (Original: {})",
            stderr.trim()
        );
    }
    if lower.contains("permission denied") || lower.contains("authentication failed") {
        return format!(
            "Authentication failed. Check the credentials git uses for this remote.\n\
             (Original: {})",
            stderr.trim()
        );
    }
    stderr.trim().to_string()
}
