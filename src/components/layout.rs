//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Styles for the commit log, inlined so the page is a single file.
const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #eff1f5; color: #4c4f69; }
.container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.commit-list { list-style: none; padding: 0; }
.commit-entry { background: #fff; border: 1px solid #ccd0da; border-radius: 6px; margin-bottom: 0.75rem; padding: 0.75rem 1rem; }
.commit-header { display: flex; gap: 0.75rem; align-items: baseline; }
.commit-meta { color: #6c6f85; font-size: 0.875rem; }
.commit-body { white-space: pre-wrap; font-family: ui-monospace, monospace; font-size: 0.875rem; margin: 0.5rem 0 0; }
.commit-hash, .commit-link { position: relative; font-family: ui-monospace, monospace; }
.commit-link { color: #1e66f5; text-decoration: none; }
.commit-link:hover { text-decoration: underline; }
[data-full]:hover::after { content: attr(data-full); position: absolute; left: 0; top: 1.5em; background: #4c4f69; color: #fff; padding: 0.2em 0.4em; border-radius: 4px; font-size: 0.75rem; white-space: nowrap; z-index: 1; }
.empty-state { color: #6c6f85; }
"#;

/// Wraps page content with standard HTML structure
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - commitbody" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="container" {
                    (body)
                }
            }
        }
    }
}
