//! Cloning remote repositories

use std::path::{Path, PathBuf};

use git2::FetchOptions;
use git2::build::RepoBuilder;

use super::callbacks;
use crate::error::Result;
use crate::models::Credentials;
use crate::paths;

/// Clone `source_url` into `local_repository_directory`.
///
/// Not idempotent: libgit2 refuses a target directory that exists and is not
/// empty, and that refusal is returned as-is. Credentials, when given, answer
/// the remote's username/password challenge.
///
/// Returns the working directory of the new clone.
///
/// # Errors
///
/// Returns an error if the target is a non-empty directory, the remote cannot
/// be reached, or authentication fails.
pub fn clone_non_idempotent(
    source_url: &str,
    local_repository_directory: &Path,
    credentials: Option<&Credentials>,
) -> Result<PathBuf> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks::with_credentials(credentials));

    log::debug!("cloning {source_url} into {}", local_repository_directory.display());
    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);
    let repo = builder.clone(source_url, local_repository_directory)?;

    let directory = repo.workdir().map_or_else(|| paths::normalize(repo.path()), paths::normalize);
    log::info!("cloned {source_url} into {}", directory.display());
    Ok(directory)
}
