//! Commit display components

use maud::{Markup, PreEscaped, html};

use crate::git::CommitInfo;

/// Renders commit hash with CSS tooltip showing full hash.
pub fn commit_hash(commit: &CommitInfo) -> Markup {
    html! {
        code class="commit-hash" data-full=(commit.oid()) { (commit.short_oid()) }
    }
}

/// Renders a commit body that has already been escaped and linked.
///
/// The body is emitted without further escaping. Empty bodies produce no
/// element so one line commits stay compact.
pub fn commit_body(body_html: &str) -> Markup {
    html! {
        @if !body_html.is_empty() {
            pre class="commit-body" { (PreEscaped(body_html)) }
        }
    }
}
