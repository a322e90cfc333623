//! Classification of a path relative to a repository

use serde::Serialize;

/// What a path is, with respect to git
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Not the root of a repository (neither working directory nor `.git`)
    NotARepository,
    /// The hidden `.git` metadata directory
    MetadataDirectory,
    /// The visible working-directory root that contains `.git`
    WorkingDirectory,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotARepository => write!(f, "not a repository"),
            Self::MetadataDirectory => write!(f, "metadata directory"),
            Self::WorkingDirectory => write!(f, "working directory"),
        }
    }
}
