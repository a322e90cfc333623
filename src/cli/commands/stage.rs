//! Stage changes

use std::path::{Path, PathBuf};

use anyhow::Context;

use gitop::git;
use gitop::output::{OperationResult, OutputMode};

/// Stage the given files, or every unstaged path with `all`
pub fn stage(repo: &Path, all: bool, files: &[PathBuf], mode: OutputMode) -> anyhow::Result<()> {
    let count = if all {
        git::stage_all_unstaged_paths(repo)
            .with_context(|| format!("failed to stage changes in {}", repo.display()))?
    } else {
        git::stage(repo, files).with_context(|| format!("failed to stage files in {}", repo.display()))?;
        files.len()
    };

    let message = if count == 0 {
        "Nothing to stage.".to_string()
    } else {
        format!("Staged {count} path(s)")
    };

    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
