//! Detection of abbreviated commit hashes in encoded text.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::RenderError;

/// Shortest prefix git accepts for object lookup.
const MIN_PREFIX_LEN: usize = 4;

/// Hex length of a full SHA-1 object id.
const SHA1_HEX_LEN: usize = 40;

/// Inclusive length bounds for hash candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashBounds {
    min: usize,
    max: usize,
}

impl HashBounds {
    /// Matches the 7 character short hash git displays by default, up to a full id.
    pub const DEFAULT: Self = Self { min: 7, max: 40 };

    /// Creates bounds after checking they describe a usable prefix range.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] if `min` is below 4, `max`
    /// exceeds 40, or `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, RenderError> {
        if min < MIN_PREFIX_LEN {
            return Err(RenderError::invalid_argument(format!(
                "minimum hash length {min} is below {MIN_PREFIX_LEN}"
            )));
        }
        if max > SHA1_HEX_LEN {
            return Err(RenderError::invalid_argument(format!(
                "maximum hash length {max} exceeds {SHA1_HEX_LEN}"
            )));
        }
        if min > max {
            return Err(RenderError::invalid_argument(format!(
                "minimum hash length {min} exceeds maximum {max}"
            )));
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for HashBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Hex run that may name a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashCandidate {
    text: String,
    start: usize,
}

impl HashCandidate {
    /// Candidate text exactly as it appears in the scanned string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the first character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Finds hash candidates in already encoded text.
///
/// A candidate is a run of hex digits, in either case, whose length lies
/// within [`HashBounds`] and which is bounded by non-word characters or the
/// ends of the text. Longer runs are skipped whole rather than matched by a
/// prefix, and hex digits inside a longer token such as `abc1234xyz` never
/// match.
#[derive(Debug, Clone)]
pub struct HashScanner {
    pattern: Regex,
    bounds: HashBounds,
}

impl HashScanner {
    /// Compiles the candidate pattern for the given bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] if the pattern cannot be built.
    pub fn new(bounds: HashBounds) -> Result<Self, RenderError> {
        let source = format!(r"(?i)\b[0-9a-f]{{{},{}}}\b", bounds.min, bounds.max);
        let pattern = Regex::new(&source).map_err(|err| {
            RenderError::invalid_argument(format!("hash pattern `{source}`: {err}"))
        })?;

        Ok(Self { pattern, bounds })
    }

    pub fn bounds(&self) -> HashBounds {
        self.bounds
    }

    /// Returns non-overlapping candidates in left to right order.
    pub fn find_candidates(&self, encoded: &str) -> Vec<HashCandidate> {
        self.pattern
            .find_iter(encoded)
            .map(|m| HashCandidate {
                text: m.as_str().to_string(),
                start: m.start(),
            })
            .collect()
    }
}

impl Default for HashScanner {
    fn default() -> Self {
        Self {
            pattern: default_pattern().clone(),
            bounds: HashBounds::DEFAULT,
        }
    }
}

static DEFAULT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn default_pattern() -> &'static Regex {
    DEFAULT_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b[0-9a-f]{7,40}\b").expect("Default hash pattern should compile")
    })
}
