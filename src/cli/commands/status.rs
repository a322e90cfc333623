//! Unpushed and unstaged change reports

use std::path::Path;

use gitop::git;
use gitop::output::{OutputMode, PathListResult, QueryResult};

/// Report whether `repo` has work not on its remote
pub fn unpushed(repo: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let result = QueryResult {
        path: repo.display().to_string(),
        query: "has_unpushed_local_changes".to_string(),
        value: git::has_unpushed_local_changes(repo)?,
    };
    result.render(mode);
    Ok(())
}

/// List paths in `repo` that differ from HEAD
pub fn unstaged(repo: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let paths = git::list_all_unstaged_paths(repo)?;

    let result = PathListResult {
        repository: repo.display().to_string(),
        paths: paths.iter().map(|p| p.display().to_string()).collect(),
    };
    result.render(mode);
    Ok(())
}
