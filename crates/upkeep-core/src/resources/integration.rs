use crate::model::{FieldDescriptor, ResourceCatalog, ResourceKind, ValueKind};
use crate::resources::IMPLIED_HEADERS;

static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", ValueKind::Text),
    FieldDescriptor::new("integration_type", ValueKind::Text).wire("type").folded(),
    FieldDescriptor::new("enabled", ValueKind::Bool),
    // Arrives either as a bare address or as {"values": [...]}
    FieldDescriptor::new("recipient", ValueKind::Text)
        .loose()
        .only(&["email"]),
    FieldDescriptor::new("webhook_url", ValueKind::Text).only(&["webhook", "slack"]),
    FieldDescriptor::new("body_encoding", ValueKind::Text).only(&["webhook"]),
    FieldDescriptor::new("custom_headers", ValueKind::Map)
        .ignoring(IMPLIED_HEADERS)
        .only(&["webhook"]),
    FieldDescriptor::new("monitor_ids", ValueKind::IntSet),
];

pub static INTEGRATION: ResourceCatalog = ResourceCatalog {
    kind: ResourceKind::Integration,
    id_key: "id",
    subtype_key: "type",
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
    fn test_wrapped_recipient_matches_bare_intent() {
        let intent = WriteIntent::create(ResourceKind::Integration)
            .with_subtype("email")
            .with_text("integration_type", "email")
            .with_text("recipient", "oncall@example.com");
        let desired = build_desired_from_create(&INTEGRATION, &intent);

        let observed = build_observed(
            &INTEGRATION,
            &json!({
                "id": 3,
                "type": "email",
                "recipient": {"values": ["oncall@example.com"]}
            }),
        );
        assert!(converged(&desired, &observed));
    }

    #[test]
    fn test_webhook_fields_not_asserted_for_email() {
        let intent = WriteIntent::create(ResourceKind::Integration)
            .with_subtype("email")
            .with_text("webhook_url", "https://hooks.example.com/x")
            .with_bool("enabled", true);
        let desired = build_desired_from_create(&INTEGRATION, &intent);
        assert_eq!(desired.asserted_names(), vec!["enabled"]);

        let observed = build_observed(&INTEGRATION, &json!({"enabled": false}));
        assert_eq!(still_differing(&desired, &observed), vec!["enabled"]);
    }
}
