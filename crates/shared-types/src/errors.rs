//! Common error types used across all Creative Scatter crates
//! Provides consistent error handling and banner reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all Creative Scatter operations
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ScatterError {
    // Payload-shape errors
    #[error("Data table not found in payload")]
    MissingTable,

    #[error("Field metadata not found in payload")]
    MissingFields,

    #[error("Required field role is not bound: {role}")]
    MissingRole { role: String },

    #[error("Payload decode error: {message}")]
    PayloadDecode { message: String },

    // Empty-result errors
    #[error("No displayable rows after filtering")]
    EmptyData,

    // Rendering errors
    #[error("DOM element not found: {id}")]
    ElementNotFound { id: String },

    #[error("Render error: {message}")]
    Render { message: String },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for Creative Scatter operations
pub type ScatterResult<T> = Result<T, ScatterError>;

impl ScatterError {
    /// User-facing banner text for this error.
    ///
    /// Payload-shape failures and empty results get fixed phrasing; the
    /// remaining kinds surface their message so a broken render names its
    /// cause.
    pub fn banner_text(&self) -> String {
        match self {
            ScatterError::MissingTable
            | ScatterError::MissingFields
            | ScatterError::MissingRole { .. }
            | ScatterError::PayloadDecode { .. } => "Invalid data format".to_string(),
            ScatterError::EmptyData => "No displayable data".to_string(),
            other => format!("Rendering failed: {other}"),
        }
    }
}

impl From<serde_json::Error> for ScatterError {
    fn from(err: serde_json::Error) -> Self {
        ScatterError::PayloadDecode {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for ScatterError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        ScatterError::JsInterop {
            message: format!("{err:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ScatterError::MissingRole {
            role: "imageUrl".to_string(),
        };

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("MissingRole"));
        assert!(json.contains("imageUrl"));
    }

    #[test]
    fn test_banner_text_taxonomy() {
        assert_eq!(ScatterError::MissingTable.banner_text(), "Invalid data format");
        assert_eq!(
            ScatterError::MissingRole { role: "xMetric".into() }.banner_text(),
            "Invalid data format"
        );
        assert_eq!(ScatterError::EmptyData.banner_text(), "No displayable data");

        let render = ScatterError::Render {
            message: "tick overflow".to_string(),
        };
        assert!(render.banner_text().starts_with("Rendering failed:"));
        assert!(render.banner_text().contains("tick overflow"));
    }
}
