//! Centralized path definitions for gitop
//!
//! Single source of truth for the well-known names gitop relies on and the
//! small path manipulations built on them.
//!
//! ## Repository Layout
//!
//! ```text
//! repo/                 # Working-directory root
//! ├── .git/             # Metadata directory (history, refs, config)
//! └── src/...           # Tracked files
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.gitop/
//! └── config.toml       # Default author, remote, username
//! ```

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

// =============================================================================
// Repository names
// =============================================================================

/// Name of the hidden metadata directory inside a working directory
pub const GIT_HIDDEN_DIRECTORY: &str = ".git";

/// Conventional name of the primary remote
pub const ORIGIN: &str = "origin";

/// Get the final component of a directory path.
///
/// Trailing separators are ignored, so `repo/.git/` yields `.git`.
#[must_use]
pub fn directory_name(path: &Path) -> Option<&OsStr> {
    path.file_name()
}

/// Get the parent directory of a path, ignoring trailing separators.
#[must_use]
pub fn parent_directory(path: &Path) -> Option<PathBuf> {
    normalize(path).parent().map(Path::to_path_buf)
}

/// Strip trailing separators and `.` components from a path.
///
/// libgit2 reports metadata directories with a trailing `/`; this yields the
/// same path without it.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".gitop";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global gitop directory.
///
/// Returns `~/.gitop/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.gitop/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
