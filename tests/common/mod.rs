//! Common test utilities shared across test types
//!
//! - `git_repo.rs` - Temporary working-directory and bare repositories
//! - `http_remote.rs` - Local HTTP remote that rejects credentials


pub use git_repo::{TempBareRepo, TempGitRepo, non_repo_dir};
pub use http_remote::UnauthorizedRemote;
