//! Opaque API records.
//!
//! The API owns the shape of every resource, so records stay untyped JSON
//! objects. Commands only read the handful of fields they display or
//! manipulate, through [`RecordExt`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resource as returned by the API.
pub type Record = Map<String, Value>;

/// First page of a list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Records on this page.
    #[serde(default)]
    pub results: Vec<Record>,
}

impl Page {
    /// Returns the first record, if any.
    pub fn into_first(self) -> Option<Record> {
        self.results.into_iter().next()
    }
}

/// Field accessors for display code.
pub trait RecordExt {
    /// Renders a top-level field as text. Missing and null fields are empty.
    fn text(&self, key: &str) -> String;

    /// Renders a nested field (`["user", "username"]`) as text.
    fn text_at(&self, path: &[&str]) -> String;

    /// Reads a list field; missing or null lists are empty.
    fn list(&self, key: &str) -> Vec<Value>;

    /// Returns the primary key value, if present.
    fn pk(&self) -> Option<&Value>;
}

impl RecordExt for Record {
    fn text(&self, key: &str) -> String {
        self.get(key).map(value_text).unwrap_or_default()
    }

    fn text_at(&self, path: &[&str]) -> String {
        let Some((first, rest)) = path.split_first() else {
            return String::new();
        };

        let mut current = self.get(*first);
        for key in rest {
            current = current.and_then(|v| v.get(*key));
        }
        current.map(value_text).unwrap_or_default()
    }

    fn list(&self, key: &str) -> Vec<Value> {
        match self.get(key) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    fn pk(&self) -> Option<&Value> {
        self.get("pk").filter(|v| !v.is_null())
    }
}

/// Renders a scalar JSON value for display.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
