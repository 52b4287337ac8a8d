use affinet_core::errors::*;

#[test]
fn snapshot_error_converts_to_root_error() {
    let err: AffinetError = SnapshotError::MissingTree.into();
    assert!(matches!(err, AffinetError::Snapshot(SnapshotError::MissingTree)));
    assert!(err.to_string().contains("tree"));
}

#[test]
fn invalid_document_carries_reason() {
    let err = SnapshotError::InvalidDocument {
        reason: "expected object".into(),
    };
    assert!(err.to_string().contains("expected object"));
}

#[test]
fn session_not_found_carries_id() {
    let err: AffinetError = SessionError::SessionNotFound("sess-42".into()).into();
    assert!(err.to_string().contains("sess-42"));
}

#[test]
fn config_invalid_carries_field_and_reason() {
    let err = ConfigError::Invalid {
        field: "session.cache_capacity".into(),
        reason: "must be at least 1".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("session.cache_capacity"));
    assert!(msg.contains("at least 1"));
}
