#![allow(clippy::unwrap_used, clippy::expect_used)]

use upkeep_core::errors::{ExError, ExErrorKind};
use upkeep_core::logging_facility::test_capture::init_test_capture;
use upkeep_core::{log_op_end, log_op_error, log_op_start};
use upkeep_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_FIELDS,
    FIELD_ERR_KIND, FIELD_RESOURCE_KIND,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(start_events, 1, "Should have exactly one start event");
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ExError::new(ExErrorKind::NotConverged).with_target_id("m-3");
    log_op_error!(op_name, err, duration_ms = 10, target_id = "m-3");

    let events = capture.events_for_target("m-3");
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event captured");
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_NOT_CONVERGED"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("NotConverged"));
    assert_eq!(error_event.field(FIELD_ERR_FIELDS), Some(""));
}

#[test]
fn test_log_op_error_lists_error_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_fields_unique_6";

    let err = ExError::new(ExErrorKind::NotConverged)
        .with_fields(vec!["name".to_string(), "tags".to_string()]);
    log_op_error!(op_name, err, duration_ms = 5, target_id = "m-6");

    let events = capture.events_for_target("m-6");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field(FIELD_ERR_FIELDS), Some("name,tags"));
}

#[test]
fn test_start_carries_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_fields_unique_4";

    log_op_start!(op_name, target_id = "m-4", resource_kind = "monitor");

    let events = capture.events_for_target("m-4");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field(FIELD_RESOURCE_KIND), Some("monitor"));
    assert!(events[0]
        .component
        .as_deref()
        .is_some_and(|c| c.contains("logging_facility_tests")));
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_5";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR)
    });
    assert_eq!(errors, 0);
}
