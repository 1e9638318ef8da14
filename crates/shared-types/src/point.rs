//! Point records derived from host rows

use crate::payload::Row;
use serde::{Deserialize, Serialize};

/// One plotted creative, derived from a single row of the default table.
///
/// Records are rebuilt from scratch on every render pass. Identity is
/// derived from the row index (`item-<n>`), not from row content, so an
/// element only persists across payloads when its row keeps its position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointRecord {
    /// Reconciliation key, stable per render index.
    pub id: String,
    /// Display name of the creative; falls back to `Creative <n>`.
    pub creative_id: String,
    /// Image to draw at the point. Always non-empty after filtering.
    pub image_url: String,
    /// X metric after numeric coercion. Always finite.
    pub x_value: f64,
    /// Y metric after numeric coercion. Always finite.
    pub y_value: f64,
    /// Size metric after numeric coercion; 1.0 when the role is unbound.
    pub size_value: f64,
    /// The raw row this record was derived from.
    pub source: Row,
}

impl PointRecord {
    /// Reconciliation key for a given row index.
    pub fn key_for_index(index: usize) -> String {
        format!("item-{index}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_row_index_derived() {
        assert_eq!(PointRecord::key_for_index(0), "item-0");
        assert_eq!(PointRecord::key_for_index(41), "item-41");
    }
}
