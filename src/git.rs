//! Git repository operations.

use anyhow::{Context, Result};
use gix::bstr::ByteSlice;
use std::path::Path;

/// Commit metadata.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    oid: String,
    short_oid: String,
    author: String,
    summary: String,
    body: String,
}

impl CommitInfo {
    /// Creates commit metadata from a raw message.
    ///
    /// The first line becomes the summary. The body is everything after it,
    /// with the separating blank lines removed.
    pub fn new(oid: impl Into<String>, author: impl Into<String>, message: &str) -> Self {
        let oid = oid.into();
        let short_oid = oid.chars().take(7).collect();
        let (summary, body) = split_message(message);

        Self {
            oid,
            short_oid,
            author: author.into(),
            summary,
            body,
        }
    }

    /// Full commit hash.
    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// Short commit hash (7 characters).
    pub fn short_oid(&self) -> &str {
        &self.short_oid
    }

    /// Author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// First line of commit message.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Commit message without the summary line. Empty for one line messages.
    pub fn body(&self) -> &str {
        &self.body
    }
}

fn split_message(message: &str) -> (String, String) {
    match message.split_once('\n') {
        Some((summary, rest)) => (
            summary.trim_end().to_string(),
            rest.trim_start_matches(['\r', '\n']).to_string(),
        ),
        None => (message.trim_end().to_string(), String::new()),
    }
}

/// Opens the git repository at `path`.
///
/// # Errors
///
/// Returns error if the path is not a readable git repository.
pub fn open_repository(path: impl AsRef<Path>) -> Result<gix::Repository> {
    gix::open(path.as_ref())
        .with_context(|| format!("Failed to open repository at {}", path.as_ref().display()))
}

/// Resolves reference to commit object.
fn resolve_commit<'a>(
    repo: &'a gix::Repository,
    ref_name: Option<&str>,
) -> Result<gix::Commit<'a>> {
    match ref_name {
        Some(ref_str) => repo
            .find_reference(ref_str)
            .with_context(|| format!("Failed to find reference: {}", ref_str))?
            .into_fully_peeled_id()
            .with_context(|| format!("Failed to peel reference '{}'", ref_str))?
            .object()
            .context("Failed to resolve object")?
            .try_into_commit()
            .map_err(|_| anyhow::anyhow!("Reference '{}' does not point to a commit", ref_str)),
        None => repo.head_commit().context("Failed to read HEAD commit"),
    }
}

/// Lists commits for a given reference in reverse chronological order.
///
/// # Arguments
///
/// * `repo_path`: Path to git repository
/// * `ref_name`: Reference name (branch/tag), defaults to HEAD if None
/// * `limit`: Optional limit on number of commits to retrieve
///
/// # Errors
///
/// Returns error if:
/// - Repository cannot be opened
/// - Reference cannot be resolved
/// - Commit traversal fails
///
/// # Examples
///
/// ```no_run
/// use commitbody::list_commits;
/// use std::path::Path;
///
/// let commits = list_commits(Path::new("."), None, Some(10))?;
/// for commit in commits {
///     println!("{}: {}", commit.short_oid(), commit.summary());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn list_commits(
    repo_path: impl AsRef<Path>,
    ref_name: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<CommitInfo>> {
    let repo = open_repository(repo_path)?;
    let commit = resolve_commit(&repo, ref_name)?;

    let mut commits = Vec::new();
    let walker = commit
        .ancestors()
        .all()
        .context("Failed to create commit ancestor iterator")?;

    for (idx, result) in walker.enumerate() {
        if let Some(max) = limit
            && idx >= max
        {
            break;
        }

        let info = result.context("Failed to traverse commit ancestor")?;
        let commit_obj = info.object().context("Failed to read commit object")?;

        let author = commit_obj.author().context("Failed to read author")?;
        let message = commit_obj
            .message_raw()
            .context("Failed to read commit message")?
            .to_str_lossy();

        commits.push(CommitInfo::new(
            commit_obj.id.to_hex().to_string(),
            author.name.to_str_lossy(),
            &message,
        ));
    }

    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commit_info_splits_summary_and_body() {
        // Arrange
        let message = "Fix pager\n\nThe pager skipped the last line.\nSee abc1234.\n";

        // Act
        let commit = CommitInfo::new("0123456789abcdef", "Alice", message);

        // Assert
        assert_eq!(commit.summary(), "Fix pager");
        assert_eq!(
            commit.body(),
            "The pager skipped the last line.\nSee abc1234.\n"
        );
        assert_eq!(commit.short_oid(), "0123456");
        assert_eq!(commit.author(), "Alice");
    }

    #[test]
    fn test_commit_info_single_line_message() {
        // Act
        let commit = CommitInfo::new("abc", "Bob", "Initial commit\n");

        // Assert
        assert_eq!(commit.summary(), "Initial commit");
        assert_eq!(commit.body(), "");
        assert_eq!(commit.short_oid(), "abc", "Short id of a short oid is itself");
    }

    #[test]
    fn test_commit_info_message_without_newline() {
        let commit = CommitInfo::new("abc", "Bob", "Subject only");
        assert_eq!(commit.summary(), "Subject only");
        assert!(commit.body().is_empty());
    }

    #[test]
    fn test_commit_info_crlf_message() {
        // Act
        let commit = CommitInfo::new("abc", "Bob", "Subject\r\n\r\nBody line\r\n");

        // Assert
        assert_eq!(commit.summary(), "Subject");
        assert_eq!(commit.body(), "Body line\r\n");
    }

    #[test]
    fn test_open_repository_invalid_path() {
        // Arrange
        let invalid_path = PathBuf::from("/tmp/definitely-not-a-git-repo-12345");

        // Act
        let result = open_repository(&invalid_path);

        // Assert
        assert!(result.is_err(), "Should fail for invalid repository path");
        let err_msg = format!("{:?}", result.unwrap_err());
        assert!(
            err_msg.contains("Failed to open repository at"),
            "Error should mention failed repository opening"
        );
    }

    #[test]
    fn test_list_commits_invalid_repository_path() {
        // Act
        let result = list_commits("/definitely/not/a/real/path/anywhere", None, None);

        // Assert
        assert!(result.is_err(), "Should return error for invalid path");
    }
}
