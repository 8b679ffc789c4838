//! Commit link markup.

use anyhow::{Result, bail};
use gix::ObjectId;
use maud::{PreEscaped, html};

/// Placeholder replaced by the full hex id in link templates.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Default link target, the entry for the commit on the log page.
pub const DEFAULT_LINK_TEMPLATE: &str = "#{id}";

/// Produces the markup for a link to a resolved commit.
///
/// `display_text` is already HTML escaped and must be emitted as is, so the
/// visible text of a link equals the unlinked rendering of the same hash.
pub trait LinkFormatter {
    fn create_link(
        &self,
        id: &ObjectId,
        display_text: &str,
        is_short_form: bool,
    ) -> Result<String>;
}

impl<L: LinkFormatter + ?Sized> LinkFormatter for &L {
    fn create_link(
        &self,
        id: &ObjectId,
        display_text: &str,
        is_short_form: bool,
    ) -> Result<String> {
        (**self).create_link(id, display_text, is_short_form)
    }
}

/// Renders `<a class="commit-link">` elements from a URL template.
///
/// Short form links also carry the full hash in `data-full` for the same CSS
/// tooltip the commit hash component uses.
#[derive(Debug, Clone)]
pub struct CommitLinkFormatter {
    template: String,
}

impl CommitLinkFormatter {
    /// Creates a formatter for a template such as `https://host/repo/commit/{id}`.
    ///
    /// # Errors
    ///
    /// Returns error if the template lacks the `{id}` placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(ID_PLACEHOLDER) {
            bail!(
                "Link template must contain {}: {}",
                ID_PLACEHOLDER,
                template
            );
        }

        Ok(Self { template })
    }

    /// Link target for a commit id.
    pub fn href(&self, id: &ObjectId) -> String {
        self.template.replace(ID_PLACEHOLDER, &id.to_hex().to_string())
    }
}

impl Default for CommitLinkFormatter {
    fn default() -> Self {
        Self {
            template: DEFAULT_LINK_TEMPLATE.to_string(),
        }
    }
}

impl LinkFormatter for CommitLinkFormatter {
    fn create_link(
        &self,
        id: &ObjectId,
        display_text: &str,
        is_short_form: bool,
    ) -> Result<String> {
        let href = self.href(id);
        let markup = if is_short_form {
            html! {
                a class="commit-link" href=(href) data-full=(id.to_hex().to_string()) {
                    (PreEscaped(display_text))
                }
            }
        } else {
            html! {
                a class="commit-link" href=(href) { (PreEscaped(display_text)) }
            }
        };

        Ok(markup.into_string())
    }
}
