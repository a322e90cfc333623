//! Working directory vs. metadata directory classification

use std::path::Path;

use super::discovery::is_repository;
use crate::models::PathKind;
use crate::paths::{self, GIT_HIDDEN_DIRECTORY};

/// Check whether a directory name is the git metadata directory name.
#[must_use]
pub fn is_git_hidden_directory(directory_name: &str) -> bool {
    directory_name == GIT_HIDDEN_DIRECTORY
}

/// Classify a directory path as exactly one [`PathKind`].
///
/// A path that opens as a repository is the metadata directory when its last
/// component is `.git`, and the working-directory root otherwise.
#[must_use]
pub fn classify(directory_path: &Path) -> PathKind {
    if !is_repository(directory_path) {
        return PathKind::NotARepository;
    }

    let is_git_directory = paths::directory_name(directory_path)
        .and_then(|name| name.to_str())
        .is_some_and(is_git_hidden_directory);

    if is_git_directory {
        PathKind::MetadataDirectory
    } else {
        PathKind::WorkingDirectory
    }
}

/// Whether `directory_path` is a repository's hidden `.git` directory.
#[must_use]
pub fn is_repository_git_directory(directory_path: &Path) -> bool {
    classify(directory_path) == PathKind::MetadataDirectory
}

/// Whether `directory_path` is a working-directory root containing `.git`.
#[must_use]
pub fn is_repository_directory(directory_path: &Path) -> bool {
    classify(directory_path) == PathKind::WorkingDirectory
}
