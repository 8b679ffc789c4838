//! Resolution of abbreviated hashes to commit ids.

use anyhow::{Context, Result};
use gix::ObjectId;
use std::path::Path;
use tracing::debug;

use crate::git::open_repository;

/// Expands a hash candidate to the full id of the object it names.
///
/// `Ok(None)` means the candidate does not name a unique commit, whatever
/// the cause. `Err` is reserved for unexpected failures, which the renderer
/// passes on to its caller.
pub trait HashResolver {
    fn try_resolve(&self, candidate: &str) -> Result<Option<ObjectId>>;
}

impl<R: HashResolver + ?Sized> HashResolver for &R {
    fn try_resolve(&self, candidate: &str) -> Result<Option<ObjectId>> {
        (**self).try_resolve(candidate)
    }
}

/// `None` stands for "no repository available": nothing resolves.
impl<R: HashResolver> HashResolver for Option<R> {
    fn try_resolve(&self, candidate: &str) -> Result<Option<ObjectId>> {
        match self {
            Some(resolver) => resolver.try_resolve(candidate),
            None => Ok(None),
        }
    }
}

/// Resolves candidates against the object database of a git repository.
///
/// Only unique prefixes of commit objects resolve. Blobs, trees, tags and
/// ambiguous prefixes are reported as not found.
pub struct RepositoryResolver {
    repo: gix::Repository,
}

impl RepositoryResolver {
    /// Opens the repository at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_repository(open_repository(path)?))
    }

    pub fn from_repository(repo: gix::Repository) -> Self {
        Self { repo }
    }
}

impl HashResolver for RepositoryResolver {
    fn try_resolve(&self, candidate: &str) -> Result<Option<ObjectId>> {
        let prefix = match gix::hash::Prefix::from_hex(&candidate.to_ascii_lowercase()) {
            Ok(prefix) => prefix,
            Err(_) => return Ok(None),
        };

        let id = match self
            .repo
            .objects
            .lookup_prefix(prefix, None)
            .with_context(|| format!("Failed to look up object prefix {}", candidate))?
        {
            Some(Ok(id)) => id,
            Some(Err(())) => {
                debug!(candidate, "ambiguous object prefix");
                return Ok(None);
            }
            None => return Ok(None),
        };

        let kind = self
            .repo
            .find_header(id)
            .with_context(|| format!("Failed to read object header {}", id))?
            .kind();

        if kind != gix::object::Kind::Commit {
            debug!(candidate, %kind, "prefix names a non-commit object");
            return Ok(None);
        }

        Ok(Some(id))
    }
}
