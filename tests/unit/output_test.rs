//! Tests for output formatting

use gitop::models::PathKind;
use gitop::output::{
    ClassifyResult, CommitResult, DiscoveryResult, OperationResult, OutputMode, PathListResult,
    QueryResult,
};

#[test]
fn test_output_mode_default_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_query_result_json() {
    let result = QueryResult {
        path: "/code/repo".to_string(),
        query: "is_repository".to_string(),
        value: true,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["query"], "is_repository");
    assert_eq!(json["value"], true);
}

#[test]
fn test_discovery_result_omits_missing_result() {
    let result = DiscoveryResult {
        path: "/tmp/elsewhere".to_string(),
        found: false,
        result: None,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["found"], false);
    assert!(json.get("result").is_none());
}

#[test]
fn test_discovery_result_includes_found_path() {
    let result = DiscoveryResult {
        path: "/code/repo/src".to_string(),
        found: true,
        result: Some("/code/repo".to_string()),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["result"], "/code/repo");
}

#[test]
fn test_classify_result_json() {
    let result = ClassifyResult {
        path: "/code/repo/.git".to_string(),
        kind: PathKind::MetadataDirectory,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["kind"], "metadata_directory");
}

#[test]
fn test_path_list_result_json() {
    let result = PathListResult {
        repository: "/code/repo".to_string(),
        paths: vec!["a.txt".to_string(), "src/b.rs".to_string()],
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["paths"].as_array().unwrap().len(), 2);
}

#[test]
fn test_commit_result_skipped_has_no_id() {
    let result = CommitResult {
        committed: false,
        commit: None,
        author: "Jane Doe <jane@example.com>".to_string(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["committed"], false);
    assert!(json.get("commit").is_none());
}

#[test]
fn test_operation_result_json() {
    let result = OperationResult {
        success: true,
        message: "Pushed to upstream".to_string(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Pushed to upstream");
}
