use topicboard::api::{ApiError, DeleteOutcome, DeleteResponse, Topic};

#[test]
fn test_classify_success() {
    let body = Ok(DeleteResponse {
        success: true,
        error: None,
    });
    assert_eq!(DeleteOutcome::classify(200, body), DeleteOutcome::Deleted);
}

#[test]
fn test_classify_business_failure() {
    let body = Ok(DeleteResponse {
        success: false,
        error: Some("topic not found".to_string()),
    });
    assert_eq!(
        DeleteOutcome::classify(200, body),
        DeleteOutcome::Rejected("topic not found".to_string())
    );
}

#[test]
fn test_classify_business_failure_without_reason() {
    let body = Ok(DeleteResponse {
        success: false,
        error: None,
    });
    match DeleteOutcome::classify(200, body) {
        DeleteOutcome::Rejected(reason) => assert!(!reason.is_empty()),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn test_classify_non_success_status_ignores_body() {
    // Status failures are uniform and never inspect the body
    let body = Ok(DeleteResponse {
        success: true,
        error: None,
    });
    assert!(matches!(
        DeleteOutcome::classify(500, body),
        DeleteOutcome::TransportFailed(_)
    ));

    let body = Ok(DeleteResponse {
        success: true,
        error: None,
    });
    assert!(matches!(
        DeleteOutcome::classify(404, body),
        DeleteOutcome::TransportFailed(_)
    ));
}

#[test]
fn test_classify_unparseable_body() {
    let body = Err(ApiError::InvalidBody("not json".to_string()));
    assert!(matches!(
        DeleteOutcome::classify(200, body),
        DeleteOutcome::TransportFailed(_)
    ));
}

#[test]
fn test_is_success() {
    assert!(DeleteOutcome::Deleted.is_success());
    assert!(!DeleteOutcome::Rejected("x".to_string()).is_success());
    assert!(!DeleteOutcome::TransportFailed("x".to_string()).is_success());
}

#[test]
fn test_topic_deserialization_defaults() {
    // Only id and title are required
    let topic: Topic = serde_json::from_str(r#"{"id": "7", "title": "Research"}"#).unwrap();
    assert_eq!(topic.id, "7");
    assert_eq!(topic.title, "Research");
    assert_eq!(topic.emoji, "");
    assert!(topic.description.is_none());
    assert!(topic.date.is_none());
}

#[test]
fn test_delete_response_deserialization() {
    let resp: DeleteResponse = serde_json::from_str(r#"{"success": false, "error": "gone"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.error.as_deref(), Some("gone"));

    let resp: DeleteResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(resp.success);
    assert!(resp.error.is_none());
}
