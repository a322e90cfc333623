//! Show or update the global configuration

use anyhow::Context;

use gitop::config::GlobalConfig;
use gitop::output::OutputMode;

/// Apply any given settings to `~/.gitop/config.toml`, then print it
pub fn config(
    author_name: Option<String>,
    author_email: Option<String>,
    remote: Option<String>,
    username: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let path = GlobalConfig::config_path();
    let mut config = GlobalConfig::load();

    let changed = author_name.is_some() || author_email.is_some() || remote.is_some() || username.is_some();
    if let Some(name) = author_name {
        config.author.name = Some(name);
    }
    if let Some(email) = author_email {
        config.author.email = Some(email);
    }
    if let Some(remote) = remote {
        config.remote.name = remote;
    }
    if let Some(username) = username {
        config.credentials.username = Some(username);
    }

    if changed {
        config
            .save()
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("updated {}", path.display());
    }

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "path": path.display().to_string(),
                "config": config,
            }))?
        );
    } else {
        println!("# {}", path.display());
        print!("{}", toml::to_string_pretty(&config)?);
    }
    Ok(())
}
