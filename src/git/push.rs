//! Pushing the HEAD branch

use std::cell::RefCell;
use std::path::Path;

use git2::{ErrorCode, PushOptions, Repository};

use super::callbacks;
use super::remote::get_remote;
use crate::error::{GitError, Result};
use crate::models::Credentials;

/// Push the HEAD branch to the remote branch it tracks.
///
/// The destination comes from the branch's `branch.<name>.remote` and
/// `branch.<name>.merge` configuration, as set up by a clone.
///
/// # Errors
///
/// Returns [`GitError::DetachedHead`] or [`GitError::NoUpstream`] when there
/// is no tracked destination, [`GitError::PushRejected`] when the update is
/// not a fast-forward or the remote refuses it, and libgit2 errors
/// (authentication, transport) as-is.
pub fn push(repository_directory: &Path, credentials: Option<&Credentials>) -> Result<()> {
    let repo = Repository::open(repository_directory)?;
    let (reference, branch) = head_branch(&repo)?;

    let config = repo.config()?;
    let upstream = config.get_string(&format!("branch.{branch}.remote")).and_then(|remote| {
        config
            .get_string(&format!("branch.{branch}.merge"))
            .map(|merge| (remote, merge))
    });
    let (remote_name, merge) = match upstream {
        Ok(upstream) => upstream,
        Err(error) if error.code() == ErrorCode::NotFound => return Err(GitError::NoUpstream { branch }),
        Err(error) => return Err(error.into()),
    };

    push_refspec(&repo, &remote_name, &format!("{reference}:{merge}"), credentials)
}

/// Push the HEAD branch to the same-named branch on `remote_name`.
///
/// Works whether or not the branch tracks anything, which makes it the way to
/// publish a branch for the first time.
///
/// # Errors
///
/// Returns [`GitError::DetachedHead`], [`GitError::RemoteNotFound`],
/// [`GitError::PushRejected`], or libgit2 errors as-is.
pub fn push_to_remote(
    repository_directory: &Path,
    remote_name: &str,
    credentials: Option<&Credentials>,
) -> Result<()> {
    let repo = Repository::open(repository_directory)?;
    let (reference, _branch) = head_branch(&repo)?;

    push_refspec(&repo, remote_name, &format!("{reference}:{reference}"), credentials)
}

/// Full reference name and short branch name of HEAD.
fn head_branch(repo: &Repository) -> Result<(String, String)> {
    let head = repo.head()?;
    if !head.is_branch() {
        return Err(GitError::DetachedHead);
    }

    let reference = head.name().ok_or(GitError::DetachedHead)?.to_string();
    let branch = head.shorthand().ok_or(GitError::DetachedHead)?.to_string();
    Ok((reference, branch))
}

fn push_refspec(
    repo: &Repository,
    remote_name: &str,
    refspec: &str,
    credentials: Option<&Credentials>,
) -> Result<()> {
    let mut remote = get_remote(repo, remote_name)?;
    let rejected: RefCell<Vec<(String, String)>> = RefCell::new(Vec::new());

    let mut callbacks = callbacks::with_credentials(credentials);
    callbacks.push_update_reference(|reference, status| {
        if let Some(message) = status {
            rejected.borrow_mut().push((reference.to_string(), message.to_string()));
        }
        Ok(())
    });

    let mut options = PushOptions::new();
    options.remote_callbacks(callbacks);

    log::debug!("pushing {refspec} to {remote_name}");
    match remote.push(&[refspec], Some(&mut options)) {
        Ok(()) => {},
        Err(error) if error.code() == ErrorCode::NotFastForward => {
            return Err(GitError::PushRejected {
                reference: destination(refspec).to_string(),
                message: error.message().to_string(),
            });
        },
        Err(error) => return Err(error.into()),
    }

    if let Some((reference, message)) = rejected.take().into_iter().next() {
        return Err(GitError::PushRejected { reference, message });
    }

    log::info!("pushed {refspec} to {remote_name}");
    Ok(())
}

/// Destination half of a `src:dst` refspec.
fn destination(refspec: &str) -> &str {
    refspec.rsplit_once(':').map_or(refspec, |(_, dst)| dst)
}
