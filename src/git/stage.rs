//! Staging paths into the index

use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Repository};

use super::changes::list_all_unstaged_paths;
use crate::error::Result;

/// Stage paths in the repository at `repository_directory`.
///
/// Paths are relative to the working directory; absolute paths inside the
/// working directory are accepted too. Each path is a pathspec, so a
/// directory stages everything beneath it. Files present on disk are added
/// and tracked files that are gone are removed, so deletions stage the same
/// way edits do. Ignored files are skipped. An empty list leaves the index
/// untouched.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened, is bare, or libgit2
/// fails to update or write the index.
pub fn stage<P: AsRef<Path>>(repository_directory: &Path, file_paths: &[P]) -> Result<()> {
    let repo = Repository::open(repository_directory)?;

    // An empty pathspec matches everything.
    if file_paths.is_empty() {
        return Ok(());
    }

    let workdir = repo
        .workdir()
        .map(Path::to_path_buf)
        .ok_or_else(|| git2::Error::from_str("cannot stage paths in a bare repository"))?;

    let pathspecs: Vec<PathBuf> = file_paths
        .iter()
        .map(|file_path| relative_to_workdir(&workdir, file_path.as_ref()))
        .collect();

    let mut index = repo.index()?;
    index.add_all(pathspecs.iter().map(PathBuf::as_path), IndexAddOption::DEFAULT, None)?;
    index.update_all(pathspecs.iter().map(PathBuf::as_path), None)?;
    index.write()?;

    log::debug!("{}: staged {} path(s)", repository_directory.display(), pathspecs.len());
    Ok(())
}

/// Stage every path that differs from HEAD and return how many there were.
///
/// # Errors
///
/// Returns an error if listing or staging fails.
pub fn stage_all_unstaged_paths(repository_directory: &Path) -> Result<usize> {
    let unstaged_paths = list_all_unstaged_paths(repository_directory)?;

    stage(repository_directory, &unstaged_paths)?;

    Ok(unstaged_paths.len())
}

fn relative_to_workdir(workdir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        if let Ok(relative) = path.strip_prefix(workdir) {
            return relative.to_path_buf();
        }
        if let Ok(canonical_workdir) = workdir.canonicalize()
            && let Ok(relative) = path.strip_prefix(&canonical_workdir)
        {
            return relative.to_path_buf();
        }
    }
    path.to_path_buf()
}
