pub mod catalog;
pub mod intent;
pub mod value;

pub use catalog::{
    Applicability, FieldDescriptor, LabelPair, ResourceCatalog, ResourceKind, WireShape,
};
pub use intent::{IntentField, WriteIntent, WriteOp};
pub use value::{FieldValue, ValueKind};
