//! Commits page generation with rendered message bodies

use maud::{Markup, html};

use crate::components::commit::{commit_body, commit_hash};
use crate::components::layout::page_wrapper;
use crate::git::CommitInfo;

/// Commit paired with its rendered, HTML safe body.
#[derive(Debug, Clone)]
pub struct RenderedCommit {
    pub commit: CommitInfo,
    pub body_html: String,
}

/// Generates HTML page displaying commit log for a reference
///
/// Summaries and author names are escaped by maud. Bodies are inserted as
/// produced by the body renderer.
///
/// # Arguments
///
/// * `entries`: Commits with rendered bodies, newest first
/// * `ref_name`: Reference name (branch/tag) for page heading
/// * `repo_name`: Repository name for page title
///
/// # Returns
///
/// Rendered HTML markup
///
/// # Examples
///
/// ```no_run
/// use commitbody::pages::commits::{RenderedCommit, generate};
/// use commitbody::{BodyRenderer, CommitLinkFormatter, RepositoryResolver, list_commits};
/// use std::path::Path;
///
/// let renderer = BodyRenderer::new(
///     RepositoryResolver::open(".")?,
///     CommitLinkFormatter::default(),
/// );
/// let mut entries = Vec::new();
/// for commit in list_commits(Path::new("."), None, Some(20))? {
///     let body_html = renderer.render_commit(&commit, true)?;
///     entries.push(RenderedCommit { commit, body_html });
/// }
/// let html = generate(&entries, "HEAD", "my-repo");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(entries: &[RenderedCommit], ref_name: &str, repo_name: &str) -> Markup {
    let title = format!("Commits - {}", repo_name);

    page_wrapper(
        &title,
        html! {
            header {
                h1 { (repo_name) }
                span class="commit-ref" { (ref_name) }
            }
            main {
                div class="commit-count" {
                    "Showing " (entries.len()) " commits"
                }
                @if entries.is_empty() {
                    p class="empty-state" { "No commits found" }
                } @else {
                    ol class="commit-list" {
                        @for entry in entries {
                            li class="commit-entry" id=(entry.commit.oid()) {
                                div class="commit-header" {
                                    (commit_hash(&entry.commit))
                                    span class="commit-message" { (entry.commit.summary()) }
                                }
                                div class="commit-meta" {
                                    span class="commit-author" { (entry.commit.author()) }
                                }
                                (commit_body(&entry.body_html))
                            }
                        }
                    }
                }
            }
        },
    )
}
