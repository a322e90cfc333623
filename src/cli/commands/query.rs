//! Repository detection, discovery and classification

use std::path::Path;

use gitop::git;
use gitop::output::{ClassifyResult, DiscoveryResult, OutputMode, QueryResult};

/// Report whether `path` is itself a repository
pub fn is_repo(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let result = QueryResult {
        path: path.display().to_string(),
        query: "is_repository".to_string(),
        value: git::is_repository(path),
    };
    result.render(mode);
    Ok(())
}

/// Report the repository (or its .git directory) containing `path`
pub fn discover(path: &Path, git_dir: bool, mode: OutputMode) -> anyhow::Result<()> {
    let found = if git_dir {
        git::has_repository_git_directory(path)?
    } else {
        git::has_repository(path)?
    };

    let result = DiscoveryResult {
        path: path.display().to_string(),
        found: found.is_some(),
        result: found.map(|p| p.display().to_string()),
    };
    result.render(mode);
    Ok(())
}

/// Report what kind of directory `path` is
pub fn classify(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let result = ClassifyResult {
        path: path.display().to_string(),
        kind: git::classify(path),
    };
    result.render(mode);
    Ok(())
}
