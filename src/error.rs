//! Error type for commit body rendering.

use thiserror::Error;

/// Errors surfaced by the renderer and its configuration types.
///
/// A hash candidate that does not resolve is not an error; it is left as
/// plain text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The caller supplied no request, or a malformed parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A resolver or link formatter failed unexpectedly.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl RenderError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
