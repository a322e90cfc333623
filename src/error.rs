//! Error types for repository operations
//!
//! libgit2 failures pass through unchanged as [`GitError::Git`]. The other
//! variants cover the few conditions this crate detects itself.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by repository operations
#[derive(Debug, Error)]
pub enum GitError {
    /// No repository contains the given path
    #[error("no git repository was found for path:\n{}", path.display())]
    RepositoryNotFound {
        /// The path that was searched from
        path: PathBuf,
    },

    /// The named remote is not configured
    #[error("remote '{name}' not found")]
    RemoteNotFound {
        /// Name of the missing remote
        name: String,
    },

    /// The remote's URL is missing or not valid UTF-8
    #[error("remote '{name}' has no valid URL")]
    RemoteUrlInvalid {
        /// Name of the remote
        name: String,
    },

    /// HEAD does not point at a branch
    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,

    /// The HEAD branch has no upstream configured
    #[error("branch '{branch}' is not tracking a remote branch")]
    NoUpstream {
        /// Short name of the local branch
        branch: String,
    },

    /// The remote refused to update a reference
    #[error("remote rejected '{reference}': {message}")]
    PushRejected {
        /// Full name of the rejected reference
        reference: String,
        /// Reason reported by the remote
        message: String,
    },

    /// Failure raised by libgit2
    #[error(transparent)]
    Git(#[from] git2::Error),
}

impl GitError {
    /// Build a [`GitError::RepositoryNotFound`] for `path`
    #[must_use]
    pub fn repository_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RepositoryNotFound { path: path.into() }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, GitError>;
