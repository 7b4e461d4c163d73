//! Low-level git operations
//!
//! Every operation shells out to `git` in the given working directory.
//! Failures carry the subprocess stderr.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Initialize a repository. Re-running in an already-initialized
/// directory is not an error (git's own semantics).
pub fn init(root: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["init"])
        .current_dir(root)
        .output()
        .context("Failed to initialize git repository")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to initialize git repository: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Stage all changes
pub fn add_all(root: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["add", "."])
        .current_dir(root)
        .output()
        .context("Failed to stage changes")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to stage changes: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Create a commit
pub fn commit(root: &Path, message: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(root)
        .output()
        .context("Failed to create commit")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Check if a remote with the given name exists
pub fn remote_exists(root: &Path, name: &str) -> Result<bool> {
    let output = Command::new("git")
        .args(["remote"])
        .current_dir(root)
        .output()
        .context("Failed to list remotes")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to list remotes: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(remote_in_list(
        &String::from_utf8_lossy(&output.stdout),
        name,
    ))
}

fn remote_in_list(list: &str, name: &str) -> bool {
    list.lines().any(|line| line.trim() == name)
}

/// Add a git remote
pub fn add_remote(root: &Path, name: &str, url: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["remote", "add", name, url])
        .current_dir(root)
        .output()
        .context("Failed to add remote")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to add remote: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

/// Add a remote only if no remote with that name exists yet.
pub fn ensure_remote(root: &Path, name: &str, url: &str) -> Result<()> {
    if !remote_exists(root, name)? {
        add_remote(root, name, url)?;
    }
    Ok(())
}

/// Push a branch to a remote, setting the upstream
pub fn push(root: &Path, remote: &str, branch: &str) -> Result<()> {
    let output = Command::new("git")
        .args(["push", "-u", remote, branch])
        .current_dir(root)
        .output()
        .context("Failed to push to remote")?;

    if !output.status.success() {
        anyhow::bail!(
            "Failed to push {} to {}: {}",
            branch,
            remote,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_in_list_match() {
        assert!(remote_in_list("origin\n", "origin"));
        assert!(remote_in_list("upstream\norigin\n", "origin"));
    }

    #[test]
    fn test_remote_in_list_no_match() {
        assert!(!remote_in_list("", "origin"));
        assert!(!remote_in_list("upstream\n", "origin"));
        // Substring of another remote name is not a match
        assert!(!remote_in_list("origin-backup\n", "origin"));
    }
}
