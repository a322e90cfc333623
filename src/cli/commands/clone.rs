//! Clone a remote repository

use std::path::Path;

use anyhow::Context;

use gitop::config::{EnvOverrides, GlobalConfig};
use gitop::git;
use gitop::output::{OperationResult, OutputMode};

/// Clone `url` into `directory`
pub fn clone(url: &str, directory: &Path, username: Option<String>, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let credentials = config.resolve_credentials(username, &EnvOverrides::from_env());
    if credentials.is_none() {
        log::debug!("no credentials configured; cloning anonymously");
    }

    let cloned = git::clone_non_idempotent(url, directory, credentials.as_ref())
        .with_context(|| format!("failed to clone {url} into {}", directory.display()))?;

    OperationResult {
        success: true,
        message: format!("Cloned {url} into {}", cloned.display()),
    }
    .render(mode);
    Ok(())
}
