//! Style validation and repair
//!
//! The style panel lets users type arbitrary numbers; rather than refusing
//! to render, broken size settings are repaired to the nearest sane value
//! and a warning is logged.

use crate::ChartStyle;

/// Smallest useful creative image, in pixels.
const MIN_SANE_IMAGE_SIZE: f64 = 1.0;

/// Repair out-of-range size settings in place.
pub fn validate_style(style: &mut ChartStyle) {
    if !style.min_image_size.is_finite() || style.min_image_size < MIN_SANE_IMAGE_SIZE {
        log::warn!(
            "minImageSize {} out of range, resetting to default",
            style.min_image_size
        );
        style.min_image_size = ChartStyle::default().min_image_size;
    }

    if !style.max_image_size.is_finite() || style.max_image_size < MIN_SANE_IMAGE_SIZE {
        log::warn!(
            "maxImageSize {} out of range, resetting to default",
            style.max_image_size
        );
        style.max_image_size = ChartStyle::default().max_image_size;
    }

    if style.min_image_size > style.max_image_size {
        log::warn!(
            "minImageSize {} exceeds maxImageSize {}, swapping",
            style.min_image_size,
            style.max_image_size
        );
        std::mem::swap(&mut style.min_image_size, &mut style.max_image_size);
    }
}
