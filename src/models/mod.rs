//! Value types passed to and from repository operations
//!
//! - `Credentials`: username/password pair for remote operations
//! - `Author`: display name and email used to sign commits
//! - `PathKind`: what a path is with respect to a repository

mod author;
mod credentials;
mod path_kind;

pub use author::Author;
pub use credentials::Credentials;
pub use path_kind::PathKind;
