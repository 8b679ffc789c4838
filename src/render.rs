//! Commit message body rendering.

use tracing::debug;

use crate::encode::trim_and_encode;
use crate::error::RenderError;
use crate::git::CommitInfo;
use crate::link::LinkFormatter;
use crate::resolve::HashResolver;
use crate::scan::HashScanner;

/// Body text to render and whether hashes in it become links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    pub body: Option<&'a str>,
    pub show_revisions_as_links: bool,
}

impl<'a> RenderRequest<'a> {
    pub fn new(body: Option<&'a str>, show_revisions_as_links: bool) -> Self {
        Self {
            body,
            show_revisions_as_links,
        }
    }
}

/// Renders commit message bodies as HTML safe text.
///
/// The body is trimmed and escaped first. When links are requested, the
/// escaped text is scanned for abbreviated hashes; each candidate the
/// resolver recognises is replaced by a link whose visible text is the
/// candidate itself, and every other byte is copied through unchanged.
///
/// Nothing is cached between calls. A candidate appearing twice is resolved
/// twice.
pub struct BodyRenderer<R, L> {
    resolver: R,
    formatter: L,
    scanner: HashScanner,
}

impl<R: HashResolver, L: LinkFormatter> BodyRenderer<R, L> {
    /// Creates a renderer using the default hash length bounds.
    pub fn new(resolver: R, formatter: L) -> Self {
        Self {
            resolver,
            formatter,
            scanner: HashScanner::default(),
        }
    }

    /// Replaces the scanner, e.g. to use custom hash length bounds.
    pub fn with_scanner(mut self, scanner: HashScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Renders a request.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] when `request` is `None`, and
    /// [`RenderError::Collaborator`] when the resolver or link formatter
    /// fails. No partial output is returned on error.
    pub fn render(&self, request: Option<&RenderRequest<'_>>) -> Result<String, RenderError> {
        let request = request
            .ok_or_else(|| RenderError::invalid_argument("render request is required"))?;

        let encoded = trim_and_encode(request.body);
        if !request.show_revisions_as_links {
            return Ok(encoded);
        }

        self.link_candidates(&encoded)
    }

    /// Renders the body of a commit.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Collaborator`] when resolution or link
    /// formatting fails.
    pub fn render_commit(
        &self,
        commit: &CommitInfo,
        show_revisions_as_links: bool,
    ) -> Result<String, RenderError> {
        self.render(Some(&RenderRequest::new(
            Some(commit.body()),
            show_revisions_as_links,
        )))
    }

    fn link_candidates(&self, encoded: &str) -> Result<String, RenderError> {
        let candidates = self.scanner.find_candidates(encoded);
        if candidates.is_empty() {
            return Ok(encoded.to_string());
        }

        let mut result = String::with_capacity(encoded.len());
        let mut pos = 0;
        let mut linked = 0;

        for candidate in &candidates {
            result.push_str(&encoded[pos..candidate.start()]);

            match self.resolver.try_resolve(candidate.text())? {
                Some(id) => {
                    let link = self.formatter.create_link(&id, candidate.text(), true)?;
                    result.push_str(&link);
                    linked += 1;
                }
                None => result.push_str(candidate.text()),
            }

            pos = candidate.end();
        }
        result.push_str(&encoded[pos..]);

        debug!(
            candidates = candidates.len(),
            linked, "linked commit hashes in body"
        );

        Ok(result)
    }
}
