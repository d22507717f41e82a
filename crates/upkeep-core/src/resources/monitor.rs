use crate::model::{FieldDescriptor, ResourceCatalog, ResourceKind, ValueKind};
use crate::resources::IMPLIED_HEADERS;

/// Monitor subtypes that check an HTTP endpoint
const HTTP_LIKE: &[&str] = &["http", "keyword"];

/// Monitor subtypes driven by inbound pings; the remote ignores `timeout` for them
const PASSIVE: &[&str] = &["heartbeat", "push"];

static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", ValueKind::Text),
    FieldDescriptor::new("url", ValueKind::Text).except(PASSIVE),
    FieldDescriptor::new("monitor_type", ValueKind::Text).folded(),
    FieldDescriptor::new("interval", ValueKind::Int).wire("check_interval"),
    FieldDescriptor::new("timeout", ValueKind::Int).except(PASSIVE),
    FieldDescriptor::new("keyword", ValueKind::Text).only(&["keyword"]),
    FieldDescriptor::new("keyword_case", ValueKind::Text)
        .wire("keyword_case_sensitive")
        .labels("case-insensitive", "case-sensitive")
        .only(&["keyword"]),
    FieldDescriptor::new("paused", ValueKind::Bool),
    FieldDescriptor::new("tags", ValueKind::TagSet),
    FieldDescriptor::new("regions", ValueKind::StringSet),
    FieldDescriptor::new("accepted_status_codes", ValueKind::IntSet).only(HTTP_LIKE),
    FieldDescriptor::new("request_headers", ValueKind::Map)
        .ignoring(IMPLIED_HEADERS)
        .only(HTTP_LIKE),
    FieldDescriptor::new("integration_ids", ValueKind::IntSet),
];

pub static MONITOR: ResourceCatalog = ResourceCatalog {
    kind: ResourceKind::Monitor,
    id_key: "id",
    subtype_key: "monitor_type",
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{converged, still_differing};
    use crate::model::WriteIntent;
    use crate::projection::build_desired_from_create;
    use crate::snapshot::build_observed;
    use serde_json::json;

    #[test]
    fn test_heartbeat_timeout_not_asserted() {
        let intent = WriteIntent::create(ResourceKind::Monitor)
            .with_subtype("heartbeat")
            .with_text("name", "cron")
            .with_int("timeout", 30);
        let desired = build_desired_from_create(&MONITOR, &intent);
        assert_eq!(desired.asserted_names(), vec!["name"]);

        let observed = build_observed(&MONITOR, &json!({"id": 1, "name": "cron", "timeout": 0}));
        assert!(converged(&desired, &observed));
    }

    #[test]
    fn test_keyword_case_numeric_wire_matches_label() {
        let intent = WriteIntent::create(ResourceKind::Monitor)
            .with_subtype("keyword")
            .with_text("keyword", "OK")
            .with_text("keyword_case", "case-sensitive");
        let desired = build_desired_from_create(&MONITOR, &intent);

        let observed = build_observed(
            &MONITOR,
            &json!({"id": 2, "keyword": "OK", "keyword_case_sensitive": 1}),
        );
        assert!(converged(&desired, &observed));

        let flipped = build_observed(
            &MONITOR,
            &json!({"id": 2, "keyword": "OK", "keyword_case_sensitive": 0}),
        );
        assert_eq!(still_differing(&desired, &flipped), vec!["keyword_case"]);
    }

    #[test]
    fn test_interval_read_from_wire_key() {
        let intent = WriteIntent::create(ResourceKind::Monitor).with_int("interval", 60);
        let desired = build_desired_from_create(&MONITOR, &intent);
        let observed = build_observed(&MONITOR, &json!({"check_interval": "60"}));
        assert!(converged(&desired, &observed));
    }

    #[test]
    fn test_implied_content_type_ignored() {
        let intent = WriteIntent::create(ResourceKind::Monitor)
            .with_subtype("http")
            .with_pairs("request_headers", [("X-Token", "abc")]);
        let desired = build_desired_from_create(&MONITOR, &intent);
        let observed = build_observed(
            &MONITOR,
            &json!({"request_headers": [
                {"name": "x-token", "value": "abc"},
                {"name": "Content-Type", "value": "application/json"}
            ]}),
        );
        assert!(converged(&desired, &observed));
    }

    #[test]
    fn test_monitor_type_compares_case_insensitively() {
        let intent = WriteIntent::create(ResourceKind::Monitor)
            .with_text("monitor_type", "HTTP")
            .with_text("url", "https://example.com");
        let desired = build_desired_from_create(&MONITOR, &intent);
        let observed = build_observed(
            &MONITOR,
            &json!({"id": 3, "monitor_type": "http", "url": "https://example.com"}),
        );
        assert!(converged(&desired, &observed));
    }
}
