//! Tests for working directory vs. metadata directory classification

use gitop::git::{classify, is_repository_directory, is_repository_git_directory};
use gitop::models::PathKind;

use crate::common::{TempGitRepo, non_repo_dir};

#[test]
fn test_working_directory_root() {
    let repo = TempGitRepo::new();
    assert_eq!(classify(repo.path()), PathKind::WorkingDirectory);
    assert!(is_repository_directory(repo.path()));
    assert!(!is_repository_git_directory(repo.path()));
}

#[test]
fn test_metadata_directory_is_not_working_directory_root() {
    let repo = TempGitRepo::new();
    assert_eq!(classify(&repo.git_dir()), PathKind::MetadataDirectory);
    assert!(!is_repository_directory(&repo.git_dir()));
    assert!(is_repository_git_directory(&repo.git_dir()));
}

#[test]
fn test_metadata_directory_with_trailing_separator() {
    let repo = TempGitRepo::new();
    let with_separator = format!("{}/", repo.git_dir().display());
    assert!(is_repository_git_directory(std::path::Path::new(&with_separator)));
}

#[test]
fn test_plain_directory() {
    let dir = non_repo_dir();
    assert_eq!(classify(dir.path()), PathKind::NotARepository);
    assert!(!is_repository_directory(dir.path()));
    assert!(!is_repository_git_directory(dir.path()));
}

#[test]
fn test_subdirectory_of_working_directory() {
    let repo = TempGitRepo::new();
    repo.write_file("src/main.rs", "fn main() {}");
    assert_eq!(classify(&repo.path().join("src")), PathKind::NotARepository);
}

#[test]
fn test_kind_serializes_snake_case() {
    let json = serde_json::to_string(&PathKind::MetadataDirectory).unwrap();
    assert_eq!(json, "\"metadata_directory\"");
}
