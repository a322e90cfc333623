//! gitop - Convenience operations over git repositories
//!
//! This library answers "is this path inside a repository?", tells a
//! repository's working directory apart from its `.git` metadata directory,
//! and wraps clone, stage, commit and push. Every operation opens a transient
//! `git2::Repository` handle and delegates to libgit2.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use gitop::git;
//! use gitop::models::PathKind;
//!
//! let kind = git::classify(Path::new("."));
//! if kind == PathKind::WorkingDirectory {
//!     let dirty = git::has_unpushed_local_changes(Path::new(".")).unwrap();
//!     println!("unpushed work: {dirty}");
//! }
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod git;
pub mod models;
pub mod output;
pub mod paths;

pub use error::{GitError, Result};
