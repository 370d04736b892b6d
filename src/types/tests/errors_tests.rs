use super::*;

#[test]
fn errors_serialize_as_their_display_string() {
    let err = ResolveError::UnsupportedRequest("bulkExport".to_string());
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!("Unsupported request type: bulkExport")
    );

    let err = ResolveError::MalformedRequest("missing field `post`".to_string());
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!("Malformed request: missing field `post`")
    );
}

#[test]
fn worker_errors_name_the_failure() {
    assert_eq!(
        WorkerError::Task("boom".to_string()).to_string(),
        "Task failed: boom"
    );
    assert_eq!(WorkerError::Disconnected.to_string(), "Worker disconnected");
}
