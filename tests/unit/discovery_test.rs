//! Tests for repository detection and discovery

use gitop::GitError;
use gitop::git::{
    discover_git_directory, get_repository, get_repository_directory_path,
    get_repository_git_directory, has_repository, is_in_repository, is_repository,
};

use crate::common::{TempGitRepo, non_repo_dir};

// =============================================================================
// IS REPOSITORY
// =============================================================================

#[test]
fn test_working_directory_is_repository() {
    let repo = TempGitRepo::new();
    assert!(is_repository(repo.path()));
}

#[test]
fn test_plain_directory_is_not_repository() {
    let dir = non_repo_dir();
    assert!(!is_repository(dir.path()));
}

#[test]
fn test_git_directory_is_repository() {
    let repo = TempGitRepo::new();
    assert!(is_repository(&repo.git_dir()));
}

#[test]
fn test_subdirectory_is_not_repository() {
    let repo = TempGitRepo::new();
    repo.write_file("src/lib.rs", "");
    assert!(!is_repository(&repo.path().join("src")));
}

#[test]
fn test_missing_directory_is_not_repository() {
    let dir = non_repo_dir();
    assert!(!is_repository(&dir.path().join("does-not-exist")));
}

// =============================================================================
// IN REPOSITORY
// =============================================================================

#[test]
fn test_file_inside_repository_is_in_repository() {
    let repo = TempGitRepo::with_initial_commit();
    let found = is_in_repository(&repo.path().join("README.md")).unwrap();
    assert_eq!(found.as_deref(), Some(repo.path()));
}

#[test]
fn test_working_directory_root_is_in_repository() {
    let repo = TempGitRepo::new();
    let found = is_in_repository(repo.path()).unwrap();
    assert_eq!(found.as_deref(), Some(repo.path()));
}

#[test]
fn test_nested_directory_finds_root() {
    let repo = TempGitRepo::new();
    repo.write_file("a/b/c/file.txt", "content");
    let found = has_repository(&repo.path().join("a/b/c")).unwrap();
    assert_eq!(found.as_deref(), Some(repo.path()));
}

#[test]
fn test_outside_repository_is_not_found() {
    let dir = non_repo_dir();
    assert!(is_in_repository(dir.path()).unwrap().is_none());
}

// =============================================================================
// DISCOVER GIT DIRECTORY
// =============================================================================

#[test]
fn test_discover_from_nested_path_ends_with_git() {
    let repo = TempGitRepo::new();
    repo.write_file("src/deep/mod.rs", "");
    let git_dir = discover_git_directory(&repo.path().join("src/deep/mod.rs"))
        .unwrap()
        .unwrap();
    assert!(git_dir.ends_with(".git"));
    assert_eq!(git_dir, repo.git_dir());
}

#[test]
fn test_discover_from_git_directory_itself() {
    let repo = TempGitRepo::new();
    let git_dir = discover_git_directory(&repo.git_dir()).unwrap().unwrap();
    assert_eq!(git_dir, repo.git_dir());
}

#[test]
fn test_discover_outside_repository_is_none() {
    let dir = non_repo_dir();
    assert!(discover_git_directory(dir.path()).unwrap().is_none());
}

// =============================================================================
// GET REPOSITORY
// =============================================================================

#[test]
fn test_get_repository_returns_root() {
    let repo = TempGitRepo::new();
    repo.write_file("docs/guide.md", "# Guide");
    let root = get_repository(&repo.path().join("docs/guide.md")).unwrap();
    assert_eq!(root, repo.path());
    assert_eq!(get_repository_directory_path(&repo.path().join("docs")).unwrap(), repo.path());
}

#[test]
fn test_get_repository_git_directory_returns_git_dir() {
    let repo = TempGitRepo::new();
    assert_eq!(get_repository_git_directory(repo.path()).unwrap(), repo.git_dir());
}

#[test]
fn test_get_repository_outside_repository_fails() {
    let dir = non_repo_dir();
    let err = get_repository(dir.path()).unwrap_err();
    assert!(matches!(err, GitError::RepositoryNotFound { .. }));
    assert!(err.to_string().contains("no git repository was found"));
}

#[test]
fn test_get_repository_git_directory_outside_repository_fails() {
    let dir = non_repo_dir();
    let err = get_repository_git_directory(dir.path()).unwrap_err();
    assert!(matches!(err, GitError::RepositoryNotFound { .. }));
}
