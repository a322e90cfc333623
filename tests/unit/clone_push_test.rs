//! Tests for clone and push against a local bare remote

use gitop::GitError;
use gitop::git::{
    clone_non_idempotent, commit, get_origin_url, has_unpushed_local_changes, push,
    push_to_remote, stage,
};
use gitop::models::{Author, Credentials};

use crate::common::{TempBareRepo, TempGitRepo, UnauthorizedRemote, non_repo_dir};

fn author() -> Author {
    Author::new("Jane Doe", "jane@example.com")
}

/// A bare remote holding one commit, plus the repository that seeded it
fn seeded_remote() -> (TempBareRepo, TempGitRepo) {
    let remote = TempBareRepo::new();
    let seed = TempGitRepo::with_initial_commit();
    seed.add_remote("origin", &remote.url());
    push_to_remote(seed.path(), "origin", None).unwrap();
    (remote, seed)
}

// =============================================================================
// CLONE
// =============================================================================

#[test]
fn test_clone_into_missing_directory() {
    let (remote, seed) = seeded_remote();
    let target = non_repo_dir();
    let destination = target.path().join("clone");

    let workdir = clone_non_idempotent(&remote.url(), &destination, None).unwrap();

    assert!(workdir.join("README.md").exists());
    assert!(workdir.join(".git").is_dir());
    let clone = git2::Repository::open(&workdir).unwrap();
    assert_eq!(get_origin_url(&clone).unwrap(), remote.url());
    assert_eq!(clone.head().unwrap().target(), Some(seed.head_id()));
}

#[test]
fn test_clone_into_non_empty_directory_fails() {
    let (remote, _seed) = seeded_remote();
    let target = non_repo_dir();
    std::fs::write(target.path().join("occupied.txt"), "taken").unwrap();

    assert!(clone_non_idempotent(&remote.url(), target.path(), None).is_err());
}

#[test]
fn test_clone_from_missing_remote_fails() {
    let target = non_repo_dir();
    let missing = target.path().join("nowhere.git");
    let destination = target.path().join("clone");

    assert!(clone_non_idempotent(missing.to_str().unwrap(), &destination, None).is_err());
}

#[test]
fn test_rejected_credentials_fail_instead_of_retrying() {
    let remote = UnauthorizedRemote::start();
    let target = non_repo_dir();
    let credentials = Credentials::new("octocat", "wrong-token");

    let err = clone_non_idempotent(remote.url(), &target.path().join("clone"), Some(&credentials))
        .unwrap_err();

    assert!(err.to_string().contains("authentication failed"), "unexpected error: {err}");
    assert!(remote.requests() <= 4, "remote was asked {} times", remote.requests());
}

#[test]
fn test_anonymous_clone_of_protected_remote_fails() {
    let remote = UnauthorizedRemote::start();
    let target = non_repo_dir();

    assert!(clone_non_idempotent(remote.url(), &target.path().join("clone"), None).is_err());
}

// =============================================================================
// PUSH
// =============================================================================

#[test]
fn test_fresh_clone_has_nothing_to_push() {
    let (remote, _seed) = seeded_remote();
    let target = non_repo_dir();
    let workdir = clone_non_idempotent(&remote.url(), &target.path().join("clone"), None).unwrap();

    assert!(!has_unpushed_local_changes(&workdir).unwrap());
}

#[test]
fn test_commit_then_push_round_trip() {
    let (remote, seed) = seeded_remote();
    let branch = seed.head_branch();
    let target = non_repo_dir();
    let workdir = clone_non_idempotent(&remote.url(), &target.path().join("clone"), None).unwrap();

    std::fs::write(workdir.join("feature.txt"), "feature").unwrap();
    assert!(has_unpushed_local_changes(&workdir).unwrap());

    stage(&workdir, &["feature.txt"]).unwrap();
    let oid = commit(&workdir, "Add feature", &author()).unwrap().unwrap();
    assert!(has_unpushed_local_changes(&workdir).unwrap());

    push(&workdir, None).unwrap();

    assert!(!has_unpushed_local_changes(&workdir).unwrap());
    assert_eq!(remote.branch_id(&branch), Some(oid));
}

#[test]
fn test_push_without_upstream_fails() {
    let repo = TempGitRepo::with_initial_commit();
    let err = push(repo.path(), None).unwrap_err();
    assert!(matches!(err, GitError::NoUpstream { .. }));
}

#[test]
fn test_push_to_unknown_remote_fails() {
    let repo = TempGitRepo::with_initial_commit();
    let err = push_to_remote(repo.path(), "nowhere", None).unwrap_err();
    assert!(matches!(err, GitError::RemoteNotFound { ref name } if name == "nowhere"));
}

#[test]
fn test_push_from_detached_head_fails() {
    let repo = TempGitRepo::with_initial_commit();
    repo.open().set_head_detached(repo.head_id()).unwrap();

    let err = push(repo.path(), None).unwrap_err();
    assert!(matches!(err, GitError::DetachedHead));
}

#[test]
fn test_push_to_remote_publishes_branch() {
    let (remote, seed) = seeded_remote();
    assert_eq!(remote.branch_id(&seed.head_branch()), Some(seed.head_id()));
}

#[test]
fn test_diverged_push_fails() {
    let (remote, _seed) = seeded_remote();
    let target = non_repo_dir();
    let first = clone_non_idempotent(&remote.url(), &target.path().join("first"), None).unwrap();
    let second = clone_non_idempotent(&remote.url(), &target.path().join("second"), None).unwrap();

    std::fs::write(first.join("one.txt"), "1").unwrap();
    stage(&first, &["one.txt"]).unwrap();
    commit(&first, "First side", &author()).unwrap().unwrap();
    push(&first, None).unwrap();

    std::fs::write(second.join("two.txt"), "2").unwrap();
    stage(&second, &["two.txt"]).unwrap();
    commit(&second, "Second side", &author()).unwrap().unwrap();

    let err = push(&second, None).unwrap_err();
    assert!(matches!(
        err,
        GitError::PushRejected { ref reference, .. } if reference.starts_with("refs/heads/")
    ));
    assert!(has_unpushed_local_changes(&second).unwrap());
}
