//! Per-pass render context
//!
//! One immutable value carries everything the draw stages need: current
//! dimensions, parsed style, computed scales and the pass generation
//! number. Stages receive the context instead of reaching for shared
//! mutable state, and deferred DOM callbacks compare their captured
//! generation against the live counter before committing mutations.

use crate::scale::{build_scales, ScaleSet};
use creative_scatter_config::ChartStyle;
use creative_scatter_shared::{Dimensions, PointRecord};

/// Immutable inputs for one render pass.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub dims: Dimensions,
    pub style: ChartStyle,
    pub scales: ScaleSet,
    /// Monotonic pass counter; a deferred callback from pass N aborts when
    /// the live counter has moved past N.
    pub generation: u64,
}

/// Resolved placement of one creative image, centered on its data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageGeometry {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl RenderContext {
    pub fn new(
        records: &[PointRecord],
        style: ChartStyle,
        dims: Dimensions,
        generation: u64,
    ) -> Self {
        let scales = build_scales(records, &style, &dims);
        Self {
            dims,
            style,
            scales,
            generation,
        }
    }

    /// Pixel geometry for one record: the image is a square of the scaled
    /// size, centered on the scaled point.
    pub fn image_geometry(&self, record: &PointRecord) -> ImageGeometry {
        let size = self.scales.size.scale(record.size_value);
        ImageGeometry {
            x: self.scales.x.scale(record.x_value) - size / 2.0,
            y: self.scales.y.scale(record.y_value) - size / 2.0,
            size,
        }
    }
}
