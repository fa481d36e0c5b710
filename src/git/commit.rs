//! Staging and committing

use git2::{Repository, Signature};
use std::path::Path;
use tracing::debug;

use super::{get_workdir, GitError};

/// Stage every regular file directly inside the working directory
///
/// Subdirectories are not traversed. Files matched by the ignore rules are
/// skipped. Returns the staged paths in sorted order.
pub fn stage_top_level_files(repo: &Repository) -> Result<Vec<String>, GitError> {
    let workdir = get_workdir(repo).to_path_buf();

    let mut names: Vec<String> = std::fs::read_dir(&workdir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(|s| s.to_string()))
        .collect();
    names.sort();

    let mut index = repo.index()?;
    let mut staged = Vec::with_capacity(names.len());
    for name in names {
        let rel = Path::new(&name);
        if repo.is_path_ignored(rel)? {
            debug!(file = %name, "skipping ignored file");
            continue;
        }
        index.add_path(rel)?;
        staged.push(name);
    }
    index.write()?;

    debug!(count = staged.len(), "staged top-level files");
    Ok(staged)
}

/// Commit the current index on top of HEAD (or as the root commit)
///
/// Returns the new commit id.
pub fn create_commit(repo: &Repository, message: &str) -> Result<String, GitError> {
    let signature = get_signature(repo)?;
    let mut index = repo.index()?;
    let tree_id = index.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(_) => None, // Initial commit
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let commit_id = repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )?;

    Ok(commit_id.to_string())
}

/// Get the signature for commits
fn get_signature(repo: &Repository) -> Result<Signature<'static>, GitError> {
    match repo.signature() {
        Ok(sig) => Ok(Signature::now(
            sig.name().unwrap_or("Unknown"),
            sig.email().unwrap_or("unknown@example.com"),
        )?),
        Err(_) => {
            // Fall back to environment variables
            let name = std::env::var("GIT_AUTHOR_NAME")
                .or_else(|_| std::env::var("USER"))
                .unwrap_or_else(|_| "Unknown".to_string());
            let email = std::env::var("GIT_AUTHOR_EMAIL")
                .unwrap_or_else(|_| "unknown@example.com".to_string());
            Ok(Signature::now(&name, &email)?)
        }
    }
}
