//! Remote URL lookup

use std::path::Path;

use gitop::config::GlobalConfig;
use gitop::git;
use gitop::output::OutputMode;

/// Print the URL of `remote` (or the configured default) for the repository containing `path`
pub fn remote_url(path: &Path, remote: Option<String>, mode: OutputMode) -> anyhow::Result<()> {
    let remote = GlobalConfig::load().resolve_remote(remote);

    let url = git::get_repository_named_remote_url(path, &remote)?;

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "remote": remote,
                "url": url,
            }))?
        );
    } else {
        println!("{url}");
    }
    Ok(())
}
