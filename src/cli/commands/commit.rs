//! Commit staged changes

use std::path::Path;

use anyhow::Context;

use gitop::config::{EnvOverrides, GlobalConfig};
use gitop::git;
use gitop::models::Author;
use gitop::output::{CommitResult, OutputMode};

/// Commit what is staged in `repo`
pub fn commit(
    repo: &Path,
    message: &str,
    author_name: Option<String>,
    author_email: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let author = match config.resolve_author(author_name, author_email, &EnvOverrides::from_env()) {
        Some(author) => author,
        None => Author::from_repository_config(repo).context(
            "no author configured: pass --author-name and --author-email, set \
             GITOP_AUTHOR_NAME and GITOP_AUTHOR_EMAIL, or configure git user.name and user.email",
        )?,
    };

    let oid = git::commit(repo, message, &author)
        .with_context(|| format!("failed to commit in {}", repo.display()))?;

    CommitResult {
        committed: oid.is_some(),
        commit: oid.map(|id| id.to_string()),
        author: author.to_string(),
    }
    .render(mode);
    Ok(())
}
