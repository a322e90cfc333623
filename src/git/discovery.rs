//! Repository detection and discovery
//!
//! Discovery walks upward from any path to the nearest `.git` directory; the
//! walk itself is libgit2's. Results use `Option<PathBuf>` for found/not-found.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};

use crate::error::{GitError, Result};
use crate::paths;

/// Check whether `path` itself is a repository.
///
/// True for a working-directory root and for its `.git` directory. Ancestors
/// are not searched, so a subdirectory of a working directory is not a
/// repository.
#[must_use]
pub fn is_repository(path: &Path) -> bool {
    let valid = Repository::open(path).is_ok();
    log::debug!("is_repository({}) = {valid}", path.display());
    valid
}

/// Find the `.git` directory of the repository containing `path`.
///
/// `path` may be a file or directory anywhere inside the working directory, or
/// inside the metadata directory itself. Returns `Ok(None)` when no repository
/// encloses the path.
///
/// # Errors
///
/// Returns an error if libgit2 fails for any reason other than not finding a
/// repository (for example an unreadable or corrupt `.git`).
pub fn discover_git_directory(path: &Path) -> Result<Option<PathBuf>> {
    match Repository::discover(path) {
        Ok(repo) => {
            let git_dir = paths::normalize(repo.path());
            log::debug!("discovered {} from {}", git_dir.display(), path.display());
            Ok(Some(git_dir))
        },
        Err(error) if error.code() == ErrorCode::NotFound => {
            log::debug!("no repository encloses {}", path.display());
            Ok(None)
        },
        Err(error) => Err(error.into()),
    }
}

/// Find the `.git` directory of the repository containing `path`.
///
/// Same as [`discover_git_directory`].
pub fn has_repository_git_directory(path: &Path) -> Result<Option<PathBuf>> {
    discover_git_directory(path)
}

/// Find the working-directory root of the repository containing `path`.
///
/// The root is the parent of the discovered `.git` directory.
pub fn has_repository(path: &Path) -> Result<Option<PathBuf>> {
    Ok(has_repository_git_directory(path)?.and_then(|git_dir| paths::parent_directory(&git_dir)))
}

/// Check whether `path` lies inside a repository, returning its root if so.
pub fn is_in_repository(path: &Path) -> Result<Option<PathBuf>> {
    has_repository(path)
}

/// Like [`has_repository_git_directory`], failing when nothing is found.
///
/// # Errors
///
/// Returns [`GitError::RepositoryNotFound`] when no repository encloses `path`.
pub fn get_repository_git_directory(path: &Path) -> Result<PathBuf> {
    has_repository_git_directory(path)?.ok_or_else(|| GitError::repository_not_found(path))
}

/// Like [`has_repository`], failing when nothing is found.
///
/// # Errors
///
/// Returns [`GitError::RepositoryNotFound`] when no repository encloses `path`.
pub fn get_repository(path: &Path) -> Result<PathBuf> {
    has_repository(path)?.ok_or_else(|| GitError::repository_not_found(path))
}

/// Alias of [`get_repository`].
pub fn get_repository_directory_path(path: &Path) -> Result<PathBuf> {
    get_repository(path)
}
