//! Tri-state fields for partial updates.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A field of a partial-update request.
///
/// `Unset` fields are left out of the request body entirely, so
/// `Set(String::new())` ("clear this field") stays distinguishable from a
/// flag that was never passed. Patch structs mark every field with
/// `#[serde(skip_serializing_if = "Patch::is_unset")]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Not supplied by the caller.
    #[default]
    Unset,
    /// Supplied with a value.
    Set(T),
}

impl<T> Patch<T> {
    /// Returns `true` if the caller did not supply the field.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Unset => serializer.serialize_none(),
        }
    }
}

/// A partial-update request body.
pub trait PartialUpdate: Serialize {
    /// Returns `true` when no field was supplied.
    fn is_empty(&self) -> bool {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => fields.is_empty(),
            _ => false,
        }
    }
}
