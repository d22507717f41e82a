//! Declarative field catalogs.
//!
//! A [`ResourceCatalog`] lists every comparable field of one resource kind.
//! The projection and snapshot builders walk the same table, so both sides
//! of a comparison always agree on names, normalizers and labels.

use crate::model::value::ValueKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Monitor,
    MaintenanceWindow,
    Integration,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Monitor => "monitor",
            ResourceKind::MaintenanceWindow => "maintenance_window",
            ResourceKind::Integration => "integration",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which resource subtypes a field is meaningful for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    Always,
    Only(&'static [&'static str]),
    Except(&'static [&'static str]),
}

impl Applicability {
    /// Whether a field may be asserted for `subtype`.
    ///
    /// An unknown subtype allows every field: the caller supplied the value
    /// and there is nothing to rule it out with.
    pub fn allows(&self, subtype: Option<&str>) -> bool {
        let Some(subtype) = subtype.map(str::trim).filter(|s| !s.is_empty()) else {
            return true;
        };
        let listed = |set: &[&str]| set.iter().any(|s| s.eq_ignore_ascii_case(subtype));
        match self {
            Applicability::Always => true,
            Applicability::Only(set) => listed(set),
            Applicability::Except(set) => !listed(set),
        }
    }
}

/// Two canonical labels for a binary setting.
///
/// The wire may encode the setting as a bool, `0`/`1`, `"0"`/`"1"` or as one
/// of the labels; intents usually carry the label. Both sides relabel to
/// the same lower-case label so they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPair {
    pub off: &'static str,
    pub on: &'static str,
}

impl LabelPair {
    pub const fn new(off: &'static str, on: &'static str) -> Self {
        Self { off, on }
    }

    pub fn label_bool(&self, on: bool) -> String {
        let label = if on { self.on } else { self.off };
        label.to_string()
    }

    pub fn label_int(&self, code: i64) -> Option<String> {
        match code {
            0 => Some(self.off.to_string()),
            1 => Some(self.on.to_string()),
            _ => None,
        }
    }

    pub fn label_text(&self, text: &str) -> Option<String> {
        let folded = text.trim().to_lowercase();
        match folded.as_str() {
            "0" | "false" => Some(self.off.to_string()),
            "1" | "true" => Some(self.on.to_string()),
            s if s == self.off || s == self.on => Some(s.to_string()),
            _ => None,
        }
    }

    /// Relabel a raw wire value; `None` for anything that is not a known code.
    pub fn label_wire(&self, value: &Value) -> Option<String> {
        match value {
            Value::Bool(b) => Some(self.label_bool(*b)),
            Value::Number(n) => n.as_i64().and_then(|i| self.label_int(i)),
            Value::String(s) => self.label_text(s),
            _ => None,
        }
    }
}

/// How a text field may arrive on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    /// A bare scalar
    Plain,
    /// A bare scalar, or an object holding a list under `values`/`items`
    Loose,
}

/// One comparable field of a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub wire_key: &'static str,
    pub kind: ValueKind,
    pub labels: Option<LabelPair>,
    pub shape: WireShape,
    pub applies: Applicability,
    /// Text compared lower-cased on both sides
    pub folded: bool,
    /// Map keys dropped before comparison (only meaningful for `ValueKind::Map`)
    pub ignored_keys: &'static [&'static str],
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            wire_key: name,
            kind,
            labels: None,
            shape: WireShape::Plain,
            applies: Applicability::Always,
            folded: false,
            ignored_keys: &[],
        }
    }

    /// Read the field from a different wire key than its name
    pub const fn wire(self, wire_key: &'static str) -> Self {
        Self { wire_key, ..self }
    }

    pub const fn labels(self, off: &'static str, on: &'static str) -> Self {
        Self {
            labels: Some(LabelPair::new(off, on)),
            ..self
        }
    }

    pub const fn loose(self) -> Self {
        Self {
            shape: WireShape::Loose,
            ..self
        }
    }

    pub const fn folded(self) -> Self {
        Self {
            folded: true,
            ..self
        }
    }

    pub const fn only(self, subtypes: &'static [&'static str]) -> Self {
        Self {
            applies: Applicability::Only(subtypes),
            ..self
        }
    }

    pub const fn except(self, subtypes: &'static [&'static str]) -> Self {
        Self {
            applies: Applicability::Except(subtypes),
            ..self
        }
    }

    pub const fn ignoring(self, keys: &'static [&'static str]) -> Self {
        Self {
            ignored_keys: keys,
            ..self
        }
    }
}

/// The full field table of one resource kind.
#[derive(Debug)]
pub struct ResourceCatalog {
    pub kind: ResourceKind,
    /// Wire key of the remote identifier
    pub id_key: &'static str,
    /// Wire key of the subtype discriminator
    pub subtype_key: &'static str,
    /// Fields in declaration order; diagnostics follow this order
    pub fields: &'static [FieldDescriptor],
}

impl ResourceCatalog {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|d| d.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|d| d.name)
    }

    /// The field holding the subtype discriminator, if the catalog declares one
    pub fn subtype_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|d| d.wire_key == self.subtype_key)
    }

    /// The subtype a remote representation reports, lower-cased.
    pub fn observed_subtype(&self, raw: &Value) -> Option<String> {
        raw.get(self.subtype_key)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }
}
