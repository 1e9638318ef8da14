//! Shared types for the Creative Scatter architecture
//!
//! This crate contains all types that are shared between the data-manager,
//! renderer, config-system and wasm-bridge crates: the host payload shape,
//! the derived point records, chart geometry, and the common error type.

pub mod errors;
pub mod geometry;
pub mod payload;
pub mod point;

pub use errors::{ScatterError, ScatterResult};
pub use geometry::{Dimensions, Margins};
pub use payload::{DataPayload, FieldDescriptor, FieldMap, Row, StyleEntry, StyleMap, TableSet};
pub use point::PointRecord;

/// Semantic field roles the host binds to concrete data columns.
///
/// The first four are required for a payload to validate; `sizeMetric`
/// is optional and falls back to a constant size of 1.
pub mod roles {
    pub const CREATIVE_ID: &str = "creativeId";
    pub const IMAGE_URL: &str = "imageUrl";
    pub const X_METRIC: &str = "xMetric";
    pub const Y_METRIC: &str = "yMetric";
    pub const SIZE_METRIC: &str = "sizeMetric";

    /// Roles that must be present and mapped to at least one column.
    pub const REQUIRED: [&str; 4] = [CREATIVE_ID, IMAGE_URL, X_METRIC, Y_METRIC];
}
