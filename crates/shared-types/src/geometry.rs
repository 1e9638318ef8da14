//! Chart geometry: margins and drawable dimensions

use serde::{Deserialize, Serialize};

/// Minimum drawable plot area. Containers smaller than this are clamped so
/// axes and ticks stay legible in tiny dashboard tiles.
pub const MIN_DRAW_WIDTH: f64 = 200.0;
pub const MIN_DRAW_HEIGHT: f64 = 150.0;

/// Fixed margins around the plot area, leaving room for tick labels on the
/// left/bottom and the rotated axis label on the left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 60.0,
            bottom: 60.0,
            left: 80.0,
        }
    }
}

/// Per-pass chart dimensions, recomputed from the container's current box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimensions {
    /// Outer SVG size.
    pub total_width: f64,
    pub total_height: f64,
    /// Inner plot area, total minus margins, clamped to the minimums.
    pub draw_width: f64,
    pub draw_height: f64,
    pub margins: Margins,
}

impl Dimensions {
    /// Derive dimensions from the container box, clamping the drawable
    /// area to [`MIN_DRAW_WIDTH`] x [`MIN_DRAW_HEIGHT`].
    pub fn from_container(width: f64, height: f64, margins: Margins) -> Self {
        let draw_width = (width - margins.left - margins.right).max(MIN_DRAW_WIDTH);
        let draw_height = (height - margins.top - margins.bottom).max(MIN_DRAW_HEIGHT);
        Self {
            total_width: width,
            total_height: height,
            draw_width,
            draw_height,
            margins,
        }
    }
}
