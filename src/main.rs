use anyhow::{Context, Result};
use commitbody::pages::commits::{RenderedCommit, generate};
use commitbody::{BodyRenderer, CommitLinkFormatter, Config, HashScanner, RepositoryResolver};
use std::fs;
use std::io::Write;
use tracing::{debug, info};

fn main() -> Result<()> {
    let config = Config::parse();
    commitbody::logging::init(config.log_format)?;
    config.validate().context("Invalid configuration")?;

    let scanner = HashScanner::new(config.hash_bounds()?).context("Failed to build hash scanner")?;
    let formatter = CommitLinkFormatter::new(config.link_template.as_str())?;

    // Plain output never consults the repository for hash lookups
    let resolver = if config.plain {
        None
    } else {
        Some(RepositoryResolver::open(&config.repo)?)
    };
    let renderer = BodyRenderer::new(resolver, formatter).with_scanner(scanner);

    let commits = commitbody::list_commits(&config.repo, config.rev.as_deref(), Some(config.limit))
        .context("Failed to list commits")?;

    let mut entries = Vec::with_capacity(commits.len());
    for commit in commits {
        let body_html = renderer
            .render_commit(&commit, !config.plain)
            .with_context(|| format!("Failed to render body of commit {}", commit.oid()))?;
        if commit.body().is_empty() {
            debug!(commit = commit.short_oid(), "commit has no body");
        }
        entries.push(RenderedCommit { commit, body_html });
    }

    let ref_name = config.rev.as_deref().unwrap_or("HEAD");
    let html = generate(&entries, ref_name, &config.project_name()?).into_string();

    match &config.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            info!(path = %path.display(), commits = entries.len(), "wrote commit page");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write page to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
