#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::error::Error;
use upkeep_core::errors::{ExError, ExErrorKind};

#[test]
fn test_codes_are_stable() {
    assert_eq!(ExErrorKind::WriteFailed.code(), "ERR_WRITE_FAILED");
    assert_eq!(ExErrorKind::MissingIdentifier.code(), "ERR_MISSING_IDENTIFIER");
    assert_eq!(ExErrorKind::NotConverged.code(), "ERR_NOT_CONVERGED");
    assert_eq!(ExErrorKind::Cancelled.code(), "ERR_CANCELLED");
}

#[test]
fn test_input_codes() {
    assert_eq!(ExErrorKind::InvalidInput.code(), "ERR_INVALID_INPUT");
    assert_eq!(ExErrorKind::InvalidConfig.code(), "ERR_INVALID_CONFIG");
}

#[test]
fn test_display_carries_context() {
    let err = ExError::new(ExErrorKind::NotConverged)
        .with_op("settle")
        .with_resource_kind("monitor")
        .with_target_id("42")
        .with_message("remote object did not converge")
        .with_fields(vec!["tags".to_string(), "interval".to_string()]);
    let rendered = err.to_string();

    assert!(rendered.starts_with("[ERR_NOT_CONVERGED]"));
    assert!(rendered.contains("'settle'"));
    assert!(rendered.contains("monitor"));
    assert!(rendered.contains("42"));
    assert!(rendered.contains("tags, interval"));
}

#[test]
fn test_source_chain() {
    let read = ExError::new(ExErrorKind::ReadFailed).with_message("503 from remote");
    let err = ExError::new(ExErrorKind::NotConverged).with_source(read);

    let source = err.source().expect("source present");
    assert!(source.to_string().contains("503 from remote"));
    assert_eq!(err.source_error().map(ExError::kind), Some(ExErrorKind::ReadFailed));
    assert!(err.to_string().contains("caused by"));
}

#[test]
fn test_json_error_maps_to_serialization() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: ExError = parse.into();
    assert_eq!(err.kind(), ExErrorKind::Serialization);
}
