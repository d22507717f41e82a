use crate::model::{FieldDescriptor, ResourceCatalog, ResourceKind, ValueKind};

static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", ValueKind::Text),
    FieldDescriptor::new("description", ValueKind::Text),
    FieldDescriptor::new("timezone", ValueKind::Text),
    FieldDescriptor::new("start_time", ValueKind::Text),
    FieldDescriptor::new("duration_minutes", ValueKind::Int).wire("duration"),
    FieldDescriptor::new("recurrence", ValueKind::Text).folded(),
    // ISO weekdays, 1 = Monday
    FieldDescriptor::new("days", ValueKind::IntSet).only(&["weekly"]),
    FieldDescriptor::new("days_of_month", ValueKind::IntSet).only(&["monthly"]),
    FieldDescriptor::new("monitor_ids", ValueKind::IntSet).wire("monitors"),
];

pub static MAINTENANCE_WINDOW: ResourceCatalog = ResourceCatalog {
    kind: ResourceKind::MaintenanceWindow,
    id_key: "id",
    subtype_key: "recurrence",
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::converged;
    use crate::model::{IntentField, WriteIntent};
    use crate::projection::build_desired_from_update;
    use crate::snapshot::build_observed;
    use serde_json::json;

    #[test]
    fn test_monthly_window_ignores_weekdays() {
        let intent = WriteIntent::update(ResourceKind::MaintenanceWindow, "5")
            .with_subtype("monthly")
            .with_ints("days", [1, 2])
            .with_ints("days_of_month", [15, 1]);
        let desired = build_desired_from_update(&MAINTENANCE_WINDOW, &intent);
        assert_eq!(desired.asserted_names(), vec!["days_of_month"]);
    }

    #[test]
    fn test_preserved_monitor_ids_not_compared() {
        let intent = WriteIntent::update(ResourceKind::MaintenanceWindow, "5")
            .with_text("name", "patch tuesday")
            .with("monitor_ids", IntentField::Omit);
        let desired = build_desired_from_update(&MAINTENANCE_WINDOW, &intent);
        let observed = build_observed(
            &MAINTENANCE_WINDOW,
            &json!({"id": 5, "name": "patch tuesday", "monitors": ["7", 3]}),
        );
        assert!(converged(&desired, &observed));
    }
}
