//! Host payload shape
//!
//! The host dashboard invokes the subscribed draw callback with a single
//! object carrying a row table, field-role metadata and a style map. All
//! pieces are optional at the serde level so that a malformed payload
//! deserializes into a value the validator can inspect and report on,
//! instead of failing opaquely inside the bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single data row: column id -> cell value.
///
/// Cell values arrive as arbitrary JSON; metrics may be numbers or
/// numeric strings depending on the host's field configuration.
pub type Row = HashMap<String, Value>;

/// Field-role metadata: role name -> columns bound to that role.
pub type FieldMap = HashMap<String, Vec<FieldDescriptor>>;

/// Style configuration: option name -> wrapped value.
pub type StyleMap = HashMap<String, StyleEntry>;

/// The payload delivered by the host on every data callback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataPayload {
    #[serde(default)]
    pub tables: Option<TableSet>,
    #[serde(default)]
    pub fields: Option<FieldMap>,
    #[serde(default)]
    pub style: Option<StyleMap>,
}

/// Row tables keyed by table name. Only the default table is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSet {
    #[serde(rename = "DEFAULT", default)]
    pub default: Option<Vec<Row>>,
}

/// One column bound to a semantic role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A single style option as delivered by the host: `{ "value": ... }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleEntry {
    #[serde(default)]
    pub value: Value,
}

impl DataPayload {
    /// Rows of the default table, if present.
    pub fn rows(&self) -> Option<&[Row]> {
        self.tables.as_ref()?.default.as_deref()
    }

    /// Column id bound to `role`, taking the first descriptor when the
    /// host maps several columns to the same role.
    pub fn column_for_role(&self, role: &str) -> Option<&str> {
        self.fields
            .as_ref()?
            .get(role)?
            .first()
            .map(|d| d.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_deserializes_with_missing_pieces() {
        let payload: DataPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.tables.is_none());
        assert!(payload.fields.is_none());
        assert!(payload.rows().is_none());
    }

    #[test]
    fn column_for_role_takes_first_descriptor() {
        let json = r#"{
            "tables": { "DEFAULT": [] },
            "fields": {
                "xMetric": [ { "id": "qt_ctr" }, { "id": "qt_ctr_2" } ]
            }
        }"#;
        let payload: DataPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.column_for_role("xMetric"), Some("qt_ctr"));
        assert_eq!(payload.column_for_role("yMetric"), None);
    }
}
