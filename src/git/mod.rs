//! Git integration
//!
//! Provides git operations through libgit2:
//! - Repository detection and discovery
//! - Working directory vs. metadata directory classification
//! - Unpushed and unstaged change detection
//! - Stage, commit, clone and push
//! - Remote URL lookup
//!
//! Every function opens its own `git2::Repository` handle and drops it before
//! returning. Nothing is cached between calls.

mod callbacks;
pub mod changes;
pub mod classify;
pub mod clone;
pub mod commit;
pub mod discovery;
pub mod push;
pub mod remote;
pub mod stage;

pub use changes::{has_unpushed_local_changes, list_all_unstaged_paths};
pub use classify::{
    classify, is_git_hidden_directory, is_repository_directory, is_repository_git_directory,
};
pub use clone::clone_non_idempotent;
pub use commit::commit;
pub use discovery::{
    discover_git_directory, get_repository, get_repository_directory_path,
    get_repository_git_directory, has_repository, has_repository_git_directory, is_in_repository,
    is_repository,
};
pub use push::{push, push_to_remote};
pub use remote::{
    get_origin_url, get_remote, get_remote_origin, get_remote_url, get_repository_named_remote_url,
    get_repository_remote_url, get_url, list_remotes,
};
pub use stage::{stage, stage_all_unstaged_paths};
