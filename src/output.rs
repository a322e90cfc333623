//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::models::PathKind;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Answer to a yes/no question about a path
#[derive(Debug, Serialize)]
pub struct QueryResult {
    /// The path that was asked about
    pub path: String,
    /// Which question was asked (e.g., "is_repository", "has_unpushed_changes")
    pub query: String,
    /// The answer
    pub value: bool,
}

/// Outcome of a discovery
#[derive(Debug, Serialize)]
pub struct DiscoveryResult {
    /// The path discovery started from
    pub path: String,
    /// Whether a repository was found
    pub found: bool,
    /// The discovered directory, when found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// Classification of a path
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    /// The classified path
    pub path: String,
    /// What the path is
    pub kind: PathKind,
}

/// A list of repository-relative paths
#[derive(Debug, Serialize)]
pub struct PathListResult {
    /// Repository the paths belong to
    pub repository: String,
    /// The paths
    pub paths: Vec<String>,
}

/// Outcome of a commit
#[derive(Debug, Serialize)]
pub struct CommitResult {
    /// Whether a commit was written
    pub committed: bool,
    /// The new commit id, when one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// Author as `Name <email>`
    pub author: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl QueryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.value),
            OutputMode::Json => render_json(self),
        }
    }
}

impl DiscoveryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.result {
                Some(found) => println!("{found}"),
                None => println!("No repository found for {}", self.path),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ClassifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}: {}", self.path, self.kind),
            OutputMode::Json => render_json(self),
        }
    }
}

impl PathListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.paths.is_empty() {
                    println!("No unstaged changes.");
                    return;
                }
                for path in &self.paths {
                    println!("{path}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl CommitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.commit {
                Some(id) => println!("Committed {id} as {}", self.author),
                None => println!("Nothing staged; no commit created."),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
