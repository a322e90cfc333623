//! Unpushed and unstaged change detection

use std::path::{Path, PathBuf};

use git2::{Branch, Diff, DiffOptions, ErrorCode, Repository, Tree};

use crate::error::Result;

/// Check whether the repository holds work that is not on its remote yet.
///
/// Three checks run in order, stopping at the first that finds something:
///
/// 1. Any difference between HEAD and the index or working directory,
///    untracked (non-ignored) files included.
/// 2. The current branch does not track a remote branch. A detached HEAD
///    counts as untracked.
/// 3. The current branch is ahead of its upstream.
///
/// A repository with no commits and a clean working directory has nothing to
/// push.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or libgit2 fails while
/// diffing or resolving the upstream.
pub fn has_unpushed_local_changes(repository_directory: &Path) -> Result<bool> {
    let repo = Repository::open(repository_directory)?;

    let head_tree = head_tree(&repo)?;
    let mut options = untracked_diff_options();
    let diff = repo.diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut options))?;
    if has_deltas(&diff) {
        log::debug!("{}: uncommitted changes", repository_directory.display());
        return Ok(true);
    }

    let head = match repo.head() {
        Ok(head) => head,
        Err(error) if error.code() == ErrorCode::UnbornBranch => return Ok(false),
        Err(error) => return Err(error.into()),
    };

    if !head.is_branch() {
        log::debug!("{}: detached HEAD", repository_directory.display());
        return Ok(true);
    }

    let local_oid = head.target();
    let branch = Branch::wrap(head);
    let upstream = match branch.upstream() {
        Ok(upstream) => upstream,
        Err(error) if error.code() == ErrorCode::NotFound => {
            log::debug!("{}: branch is not tracking a remote", repository_directory.display());
            return Ok(true);
        },
        Err(error) => return Err(error.into()),
    };

    let (Some(local_oid), Some(upstream_oid)) = (local_oid, upstream.get().target()) else {
        return Ok(true);
    };

    let (ahead, _behind) = repo.graph_ahead_behind(local_oid, upstream_oid)?;
    log::debug!("{}: {ahead} commit(s) ahead of upstream", repository_directory.display());
    Ok(ahead > 0)
}

/// List paths whose working-directory content differs from HEAD.
///
/// The index is ignored, so staged-but-uncommitted edits are listed too.
/// Untracked files are included; ignored files are not. Paths are relative to
/// the working directory, and deleted files report their old path.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or diffed.
pub fn list_all_unstaged_paths(repository_directory: &Path) -> Result<Vec<PathBuf>> {
    let repo = Repository::open(repository_directory)?;

    let head_tree = head_tree(&repo)?;
    let mut options = untracked_diff_options();
    let diff = repo.diff_tree_to_workdir(head_tree.as_ref(), Some(&mut options))?;

    let paths: Vec<PathBuf> = diff
        .deltas()
        .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
        .map(Path::to_path_buf)
        .collect();

    log::debug!("{}: {} unstaged path(s)", repository_directory.display(), paths.len());
    Ok(paths)
}

/// Tree of the HEAD commit, or `None` on an unborn branch.
fn head_tree(repo: &Repository) -> Result<Option<Tree<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_tree()?)),
        Err(error) if error.code() == ErrorCode::UnbornBranch || error.code() == ErrorCode::NotFound => {
            Ok(None)
        },
        Err(error) => Err(error.into()),
    }
}

fn untracked_diff_options() -> DiffOptions {
    let mut options = DiffOptions::new();
    options.include_untracked(true).recurse_untracked_dirs(true);
    options
}

fn has_deltas(diff: &Diff<'_>) -> bool {
    diff.deltas().next().is_some()
}
