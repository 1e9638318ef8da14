//! Rendering pipeline for Creative Scatter
//!
//! Pure stages (scales, tick generation, value formatting, tooltip
//! templating, per-pass context) build on every target and are unit-tested
//! natively; the SVG drawables compile for `wasm32` only.

pub mod context;
pub mod format;
pub mod scale;
pub mod tooltip;

#[cfg(target_arch = "wasm32")]
pub mod drawables;

pub use context::{ImageGeometry, RenderContext};
pub use scale::{build_scales, ticks, LinearScale, ScaleSet, SqrtScale, TICK_COUNT};
pub use tooltip::tooltip_content;
