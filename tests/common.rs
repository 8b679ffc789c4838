//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary git repositories and performing
//! the git operations the integration tests need.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Creates temporary git repository with test configuration.
///
/// # Errors
///
/// Returns error if git commands fail or directory creation fails
pub fn create_test_repo() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    git(path, &["init"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;

    Ok(dir)
}

/// Runs a git command in `repo_path` and returns trimmed stdout.
///
/// # Errors
///
/// Returns error if git cannot be spawned or exits unsuccessfully
pub fn git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// Stages everything and commits with `message`, returning the full hash.
///
/// The message may span several lines; git keeps it verbatim.
///
/// # Errors
///
/// Returns error if staging, committing or reading the hash fails
pub fn git_commit(repo_path: &Path, message: &str) -> Result<String> {
    git(repo_path, &["add", "."])?;
    git(repo_path, &["commit", "--allow-empty", "-m", message])?;
    git(repo_path, &["rev-parse", "HEAD"])
}

/// Writes file to repository, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(repo_path: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = repo_path.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
