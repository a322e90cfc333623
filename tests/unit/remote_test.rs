//! Tests for remote lookup

use gitop::GitError;
use gitop::git::{
    get_origin_url, get_remote_url, get_repository_named_remote_url, get_repository_remote_url,
    list_remotes,
};

use crate::common::{TempGitRepo, non_repo_dir};

#[test]
fn test_origin_url() {
    let repo = TempGitRepo::new();
    repo.add_remote("origin", "https://example.com/team/project.git");

    assert_eq!(get_origin_url(&repo.open()).unwrap(), "https://example.com/team/project.git");
}

#[test]
fn test_named_remote_url() {
    let repo = TempGitRepo::new();
    repo.add_remote("origin", "https://example.com/origin.git");
    repo.add_remote("upstream", "https://example.com/upstream.git");

    assert_eq!(
        get_remote_url(&repo.open(), "upstream").unwrap(),
        "https://example.com/upstream.git"
    );
}

#[test]
fn test_missing_remote_is_remote_not_found() {
    let repo = TempGitRepo::new();
    let err = get_origin_url(&repo.open()).unwrap_err();
    assert!(matches!(err, GitError::RemoteNotFound { ref name } if name == "origin"));
}

#[test]
fn test_list_remotes() {
    let repo = TempGitRepo::new();
    assert!(list_remotes(&repo.open()).unwrap().is_empty());

    repo.add_remote("origin", "https://example.com/origin.git");
    repo.add_remote("fork", "https://example.com/fork.git");

    let mut remotes = list_remotes(&repo.open()).unwrap();
    remotes.sort();
    assert_eq!(remotes, vec!["fork".to_string(), "origin".to_string()]);
}

#[test]
fn test_repository_remote_url_from_nested_path() {
    let repo = TempGitRepo::new();
    repo.add_remote("origin", "git@example.com:team/project.git");
    repo.write_file("src/lib.rs", "");

    let url = get_repository_remote_url(&repo.path().join("src/lib.rs")).unwrap();
    assert_eq!(url, "git@example.com:team/project.git");
}

#[test]
fn test_repository_named_remote_url() {
    let repo = TempGitRepo::new();
    repo.add_remote("mirror", "https://mirror.example.com/project.git");

    let url = get_repository_named_remote_url(repo.path(), "mirror").unwrap();
    assert_eq!(url, "https://mirror.example.com/project.git");
}

#[test]
fn test_repository_remote_url_outside_repository() {
    let dir = non_repo_dir();
    let err = get_repository_remote_url(dir.path()).unwrap_err();
    assert!(matches!(err, GitError::RepositoryNotFound { .. }));
}
