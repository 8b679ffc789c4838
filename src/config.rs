//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::link::{DEFAULT_LINK_TEMPLATE, ID_PLACEHOLDER};
use crate::scan::HashBounds;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Single line human readable events
    Compact,
    /// One JSON object per event
    Json,
}

/// Command line configuration for commitbody.
#[derive(Debug, Clone, Parser)]
#[command(name = "commitbody", version, about, long_about = None)]
pub struct Config {
    /// Repository path
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    /// Reference to list commits from (defaults to HEAD)
    #[arg(long)]
    pub rev: Option<String>,

    /// Maximum number of commits to render
    #[arg(short = 'n', long, default_value_t = 35)]
    pub limit: usize,

    /// Output file (writes to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Render bodies as escaped text without commit links
    #[arg(long)]
    pub plain: bool,

    /// Link target for resolved hashes; `{id}` is replaced by the full hash
    #[arg(long, default_value = DEFAULT_LINK_TEMPLATE)]
    pub link_template: String,

    /// Shortest hex run treated as an abbreviated hash
    #[arg(long, default_value_t = HashBounds::DEFAULT.min())]
    pub min_hash_len: usize,

    /// Longest hex run treated as an abbreviated hash
    #[arg(long, default_value_t = HashBounds::DEFAULT.max())]
    pub max_hash_len: usize,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the repository path does not exist, the hash length
    /// bounds are unusable, or the link template lacks `{id}`.
    pub fn validate(&self) -> Result<()> {
        if !self.repo.exists() {
            bail!("Repository path does not exist: {}", self.repo.display());
        }

        self.hash_bounds()?;

        if !self.link_template.contains(ID_PLACEHOLDER) {
            bail!(
                "Link template must contain {}: {}",
                ID_PLACEHOLDER,
                self.link_template
            );
        }

        Ok(())
    }

    /// Hash length bounds from `--min-hash-len` and `--max-hash-len`.
    ///
    /// # Errors
    ///
    /// Returns error if the bounds are outside 4..=40 or inverted.
    pub fn hash_bounds(&self) -> Result<HashBounds> {
        HashBounds::new(self.min_hash_len, self.max_hash_len).context("Invalid hash length bounds")
    }

    /// Returns project name from configuration or repository directory.
    ///
    /// # Errors
    ///
    /// Returns error if repository path has no name component or contains invalid UTF8.
    pub fn project_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .repo
            .canonicalize()
            .unwrap_or_else(|_| self.repo.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract project name from path: {}", path.display()))
            .map(String::from)
    }
}
