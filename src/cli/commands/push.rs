//! Push the current branch

use std::path::Path;

use anyhow::Context;

use gitop::config::{EnvOverrides, GlobalConfig};
use gitop::git;
use gitop::output::{OperationResult, OutputMode};

/// Push HEAD to its upstream, or to `remote` when given
pub fn push(repo: &Path, remote: Option<String>, username: Option<String>, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let credentials = config.resolve_credentials(username, &EnvOverrides::from_env());

    let message = if let Some(remote) = remote {
        git::push_to_remote(repo, &remote, credentials.as_ref())
            .with_context(|| format!("failed to push {} to {remote}", repo.display()))?;
        format!("Pushed to {remote}")
    } else {
        git::push(repo, credentials.as_ref()).with_context(|| format!("failed to push {}", repo.display()))?;
        "Pushed to upstream".to_string()
    };

    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
