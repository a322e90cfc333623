//! Commit author identity

use std::path::Path;

use chrono::{Local, Offset};
use git2::{Repository, Signature, Time};
use serde::{Deserialize, Serialize};

/// Display name and email address that sign a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name (e.g., "Jane Doe")
    pub name: String,
    /// Email address (e.g., "jane@example.com")
    pub email: String,
}

impl Author {
    /// Create a new author
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Read the identity configured for a repository (`user.name` and
    /// `user.email`, falling back to global git configuration)
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or no identity is
    /// configured.
    pub fn from_repository_config(repository_directory: &Path) -> Result<Self, git2::Error> {
        let repo = Repository::open(repository_directory)?;
        let signature = repo.signature()?;
        Ok(Self::new(
            signature.name().unwrap_or_default(),
            signature.email().unwrap_or_default(),
        ))
    }

    /// Build a signature stamped with the current local time and UTC offset
    ///
    /// # Errors
    ///
    /// Returns an error if libgit2 rejects the name or email (for example an
    /// empty name, or one containing angle brackets).
    pub fn signature_now(&self) -> Result<Signature<'static>, git2::Error> {
        let now = Local::now();
        let offset_minutes = now.offset().fix().local_minus_utc() / 60;
        let time = Time::new(now.timestamp(), offset_minutes);
        Signature::new(&self.name, &self.email, &time)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
