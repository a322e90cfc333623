//! Committing the index

use std::path::Path;

use git2::{ErrorCode, Oid, Repository};

use crate::error::Result;
use crate::models::Author;

/// Commit whatever is staged, signed by `author` at the current local time.
///
/// The same signature is used for author and committer. Nothing is written
/// when the index matches HEAD (or when HEAD is unborn and the index is
/// empty); in that case `Ok(None)` is returned.
///
/// An empty commit is not an error here. Callers that need one to fail
/// should treat `None` as "nothing staged" themselves.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened, the author is
/// rejected by libgit2, or writing the commit fails.
pub fn commit(repository_directory: &Path, commit_message: &str, author: &Author) -> Result<Option<Oid>> {
    let signature = author.signature_now()?;

    let repo = Repository::open(repository_directory)?;
    let mut index = repo.index()?;
    let tree_id = index.write_tree()?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(error) if error.code() == ErrorCode::UnbornBranch || error.code() == ErrorCode::NotFound => None,
        Err(error) => return Err(error.into()),
    };

    let any_to_commit = match &parent {
        Some(parent) => parent.tree_id() != tree_id,
        None => !index.is_empty(),
    };
    if !any_to_commit {
        log::debug!("{}: nothing staged, skipping commit", repository_directory.display());
        return Ok(None);
    }

    let tree = repo.find_tree(tree_id)?;
    let parents: Vec<_> = parent.iter().collect();
    let oid = repo.commit(Some("HEAD"), &signature, &signature, commit_message, &tree, &parents)?;

    log::info!("{}: committed {oid} as {author}", repository_directory.display());
    Ok(Some(oid))
}
