//! Remote lookup

use std::path::Path;

use git2::{ErrorCode, Remote, Repository};

use super::discovery::get_repository;
use crate::error::{GitError, Result};
use crate::paths::ORIGIN;

/// Look up a remote by name.
///
/// # Errors
///
/// Returns [`GitError::RemoteNotFound`] when no remote has that name.
pub fn get_remote<'r>(repository: &'r Repository, remote_name: &str) -> Result<Remote<'r>> {
    repository.find_remote(remote_name).map_err(|error| {
        if error.code() == ErrorCode::NotFound {
            GitError::RemoteNotFound {
                name: remote_name.to_string(),
            }
        } else {
            error.into()
        }
    })
}

/// Look up the `origin` remote.
pub fn get_remote_origin(repository: &Repository) -> Result<Remote<'_>> {
    get_remote(repository, ORIGIN)
}

/// Get a remote's URL.
///
/// # Errors
///
/// Returns [`GitError::RemoteUrlInvalid`] when the URL is not valid UTF-8.
pub fn get_url(remote: &Remote<'_>) -> Result<String> {
    remote.url().map(String::from).ok_or_else(|| GitError::RemoteUrlInvalid {
        name: remote.name().unwrap_or_default().to_string(),
    })
}

/// Get the URL of the named remote.
pub fn get_remote_url(repository: &Repository, remote_name: &str) -> Result<String> {
    let remote = get_remote(repository, remote_name)?;
    get_url(&remote)
}

/// Get the URL of the `origin` remote.
pub fn get_origin_url(repository: &Repository) -> Result<String> {
    let remote = get_remote_origin(repository)?;
    get_url(&remote)
}

/// Names of all configured remotes.
pub fn list_remotes(repository: &Repository) -> Result<Vec<String>> {
    let remotes = repository.remotes()?;
    Ok(remotes.iter().flatten().map(String::from).collect())
}

/// Get the `origin` URL of the repository containing `path`.
///
/// `path` may be anywhere inside the working directory.
///
/// # Errors
///
/// Returns [`GitError::RepositoryNotFound`] when no repository encloses
/// `path`, or [`GitError::RemoteNotFound`] when it has no `origin`.
pub fn get_repository_remote_url(path: &Path) -> Result<String> {
    get_repository_named_remote_url(path, ORIGIN)
}

/// Get the URL of `remote_name` in the repository containing `path`.
///
/// # Errors
///
/// Same as [`get_repository_remote_url`].
pub fn get_repository_named_remote_url(path: &Path, remote_name: &str) -> Result<String> {
    let repository_directory = get_repository(path)?;

    let repository = Repository::open(&repository_directory)?;

    get_remote_url(&repository, remote_name)
}
