//! Global configuration management
//!
//! Provides persistent defaults for commands that need an identity or a
//! remote. Config is stored at `~/.gitop/config.toml`; environment variables
//! override it, and command-line flags override both.
//!
//! ```toml
//! [author]
//! name = "Jane Doe"
//! email = "jane@example.com"
//!
//! [remote]
//! name = "origin"
//!
//! [credentials]
//! username = "jane"
//! ```
//!
//! The password is never read from the file, only from `GITOP_PASSWORD`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::{Author, Credentials};
use crate::paths;

/// Environment variable overriding the author name
pub const ENV_AUTHOR_NAME: &str = "GITOP_AUTHOR_NAME";

/// Environment variable overriding the author email
pub const ENV_AUTHOR_EMAIL: &str = "GITOP_AUTHOR_EMAIL";

/// Environment variable overriding the username
pub const ENV_USERNAME: &str = "GITOP_USERNAME";

/// Environment variable holding the password or access token
pub const ENV_PASSWORD: &str = "GITOP_PASSWORD";

/// Global gitop configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default commit author
    #[serde(default)]
    pub author: AuthorConfig,
    /// Remote preferences
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Credential defaults (username only)
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

/// Default commit author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorConfig {
    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Author email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Remote preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Remote used when a command needs one and none is given
    #[serde(default = "default_remote")]
    pub name: String,
}

fn default_remote() -> String {
    paths::ORIGIN.to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: default_remote(),
        }
    }
}

/// Credential defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Username for remote operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Values taken from the process environment
///
/// Kept separate from [`GlobalConfig`] so resolution can be tested without
/// touching real environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `GITOP_AUTHOR_NAME`
    pub author_name: Option<String>,
    /// `GITOP_AUTHOR_EMAIL`
    pub author_email: Option<String>,
    /// `GITOP_USERNAME`
    pub username: Option<String>,
    /// `GITOP_PASSWORD`
    pub password: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|value| !value.is_empty());
        Self {
            author_name: var(ENV_AUTHOR_NAME),
            author_email: var(ENV_AUTHOR_EMAIL),
            username: var(ENV_USERNAME),
            password: var(ENV_PASSWORD),
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if it does not exist
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or use defaults if unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|error| {
                log::warn!("ignoring malformed config {}: {error}", path.display());
                Self::default()
            }),
            Err(error) => {
                log::warn!("cannot read config {}: {error}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the commit author.
    ///
    /// Each of name and email is taken from the first source that has it:
    /// the explicit argument, then the environment, then this config. Returns
    /// `None` unless both end up known.
    #[must_use]
    pub fn resolve_author(
        &self,
        name: Option<String>,
        email: Option<String>,
        env: &EnvOverrides,
    ) -> Option<Author> {
        let name = name.or_else(|| env.author_name.clone()).or_else(|| self.author.name.clone())?;
        let email =
            email.or_else(|| env.author_email.clone()).or_else(|| self.author.email.clone())?;
        Some(Author::new(name, email))
    }

    /// Resolve credentials for a remote operation.
    ///
    /// The username comes from the argument, the environment, or this config;
    /// the password only from the environment. Returns `None` unless both are
    /// known, in which case remotes are contacted anonymously.
    #[must_use]
    pub fn resolve_credentials(&self, username: Option<String>, env: &EnvOverrides) -> Option<Credentials> {
        let username = username
            .or_else(|| env.username.clone())
            .or_else(|| self.credentials.username.clone())?;
        let password = env.password.clone()?;
        Some(Credentials::new(username, password))
    }

    /// Resolve the remote name: the argument if given, else the configured default
    #[must_use]
    pub fn resolve_remote(&self, remote: Option<String>) -> String {
        remote.unwrap_or_else(|| self.remote.name.clone())
    }
}
