//! Safe HTML rendering of git commit message bodies.
//!
//! Bodies are trimmed and escaped, then abbreviated commit hashes found in
//! the escaped text are turned into links when they resolve to a commit.

pub mod components;
mod config;
mod encode;
mod error;
mod git;
mod link;
pub mod logging;
pub mod pages;
mod render;
mod resolve;
mod scan;

pub use config::{Config, LogFormat};
pub use encode::{encode, trim_and_encode};
pub use error::RenderError;
pub use git::{CommitInfo, list_commits, open_repository};
pub use link::{CommitLinkFormatter, DEFAULT_LINK_TEMPLATE, ID_PLACEHOLDER, LinkFormatter};
pub use render::{BodyRenderer, RenderRequest};
pub use resolve::{HashResolver, RepositoryResolver};
pub use scan::{HashBounds, HashCandidate, HashScanner};
