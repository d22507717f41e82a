//! Canonical schema constants for structured logging and events
//!
//! These constants keep log events and error reports consistent across crates.

// Field keys every operation event carries
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SESSION_ID: &str = "session_id";

// Remote object identity
pub const FIELD_TARGET_ID: &str = "target_id";
pub const FIELD_RESOURCE_KIND: &str = "resource_kind";

// Settle loop
pub const FIELD_ATTEMPT: &str = "attempt";
pub const FIELD_BACKOFF_MS: &str = "backoff_ms";
pub const FIELD_DIFFERING: &str = "differing";

// Error fields written by `log_op_error!`
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_FIELDS: &str = "err_fields";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_SETTLE_ATTEMPT: &str = "settle_attempt";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_TARGET_ID.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_SETTLE_ATTEMPT.is_empty());
    }

    #[test]
    fn test_error_keys_are_plain_identifiers() {
        // Macro field names cannot contain dots
        for key in [FIELD_ERR_KIND, FIELD_ERR_CODE, FIELD_ERR_FIELDS] {
            assert!(key.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_names_are_distinct() {
        let names = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_SETTLE_ATTEMPT];
        for (i, a) in names.iter().enumerate() {
            for b in names.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
