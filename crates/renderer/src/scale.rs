//! Numeric scales: linear position scales with nice rounding, and a
//! square-root size scale
//!
//! Domains are padded and rounded the way charting libraries conventionally
//! do it: tick steps are powers of ten refined by factors of 1/2/5, and
//! `nice` widens the domain outward to step boundaries. Degenerate
//! (zero-span) domains are tolerated everywhere: they produce a single tick
//! and map every input to the midpoint of the range, never NaN.

use creative_scatter_config::ChartStyle;
use creative_scatter_shared::{Dimensions, PointRecord};
use serde::{Deserialize, Serialize};

/// Ticks requested per axis.
pub const TICK_COUNT: usize = 5;

/// Fraction of the data span added as headroom on both ends of a
/// position-scale domain.
const DOMAIN_PADDING: f64 = 0.1;

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

/// Tick step for the interval `[start, stop]` at roughly `count` ticks:
/// a power of ten scaled by 1, 2 or 5.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start).abs() / count.max(1) as f64;
    if step == 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10f64.powf(power);
    let error = step / base;
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Tick values covering `[start, stop]`, aligned to the computed step.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop {
        return vec![start];
    }
    let step = tick_step(start, stop, count);
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let i0 = (start.min(stop) / step).ceil();
    let i1 = (start.max(stop) / step).floor();
    if i1 < i0 {
        return Vec::new();
    }
    let n = (i1 - i0) as usize + 1;
    (0..n).map(|i| (i0 + i as f64) * step).collect()
}

/// Linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range. A zero-span domain maps every
    /// input to the midpoint of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Widen the domain outward to tick-step boundaries. Re-evaluates the
    /// step after each widening until it stabilizes.
    pub fn nice(&mut self, count: usize) {
        let (mut start, mut stop) = self.domain;
        if start == stop || !(stop - start).is_finite() {
            return;
        }
        let mut prestep = 0.0;
        for _ in 0..10 {
            let step = tick_step(start, stop, count);
            if step == prestep || step == 0.0 {
                break;
            }
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
            prestep = step;
        }
        self.domain = (start, stop);
    }

    /// Tick values for the current domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Square-root mapping, so that the visual *area* of a square mark scales
/// linearly with the metric rather than its edge length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn scale(&self, value: f64) -> f64 {
        let t0 = signed_sqrt(self.domain.0);
        let t1 = signed_sqrt(self.domain.1);
        let (r0, r1) = self.range;
        let span = t1 - t0;
        let t = if span == 0.0 {
            0.5
        } else {
            (signed_sqrt(value) - t0) / span
        };
        r0 + t * (r1 - r0)
    }
}

/// Sign-preserving square root, so negative metrics still order correctly.
fn signed_sqrt(value: f64) -> f64 {
    if value < 0.0 {
        -(-value).sqrt()
    } else {
        value.sqrt()
    }
}

/// The three per-pass scales.
#[derive(Debug, Clone, Copy)]
pub struct ScaleSet {
    pub x: LinearScale,
    pub y: LinearScale,
    pub size: SqrtScale,
}

/// Build position and size scales from the current records.
///
/// Position domains are padded by 10% of the data span, floored at zero,
/// and nice-rounded. The Y range is inverted for the SVG top-down
/// coordinate system. Callers must pass a non-empty record set; the empty
/// case is rejected earlier in the pipeline.
pub fn build_scales(records: &[PointRecord], style: &ChartStyle, dims: &Dimensions) -> ScaleSet {
    let (x_lo, x_hi) = extent(records.iter().map(|r| r.x_value));
    let (y_lo, y_hi) = extent(records.iter().map(|r| r.y_value));
    let (s_lo, s_hi) = extent(records.iter().map(|r| r.size_value));

    let mut x = LinearScale::new(padded_domain(x_lo, x_hi), (0.0, dims.draw_width));
    x.nice(TICK_COUNT);

    let mut y = LinearScale::new(padded_domain(y_lo, y_hi), (dims.draw_height, 0.0));
    y.nice(TICK_COUNT);

    let size = SqrtScale::new((s_lo, s_hi), (style.min_image_size, style.max_image_size));

    ScaleSet { x, y, size }
}

/// Position-scale domain before nice rounding: the data extent widened by
/// 10% of its span on both ends, floored at zero. A zero-span extent gets
/// zero padding.
pub fn padded_domain(lo: f64, hi: f64) -> (f64, f64) {
    let pad = (hi - lo) * DOMAIN_PADDING;
    ((lo - pad).max(0.0), hi + pad)
}

/// Min/max of an iterator of finite values.
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 500.0));
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(10.0), 500.0);
        assert_eq!(scale.scale(5.0), 250.0);
    }

    #[test]
    fn inverted_range_maps_top_down() {
        let scale = LinearScale::new((0.0, 1.0), (400.0, 0.0));
        assert_eq!(scale.scale(0.0), 400.0);
        assert_eq!(scale.scale(1.0), 0.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(scale.scale(3.0), 50.0);
        assert_eq!(scale.scale(999.0), 50.0);
        assert!(scale.scale(3.0).is_finite());
    }

    #[test]
    fn nice_widens_to_step_boundaries() {
        let mut scale = LinearScale::new((0.012, 0.087), (0.0, 100.0));
        scale.nice(TICK_COUNT);
        let (lo, hi) = scale.domain();
        assert!(lo <= 0.012);
        assert!(hi >= 0.087);
        // boundaries land on multiples of the step
        let step = hi - lo;
        assert!(step.is_finite() && step > 0.0);
        let tick_values = scale.ticks(TICK_COUNT);
        assert!((*tick_values.first().unwrap() - lo).abs() < 1e-9);
        assert!((*tick_values.last().unwrap() - hi).abs() < 1e-9);
    }

    #[test]
    fn nice_is_noop_on_degenerate_domain() {
        let mut scale = LinearScale::new((2.0, 2.0), (0.0, 10.0));
        scale.nice(TICK_COUNT);
        assert_eq!(scale.domain(), (2.0, 2.0));
        assert_eq!(scale.ticks(TICK_COUNT), vec![2.0]);
    }

    #[test]
    fn padded_domain_matches_ten_percent_rule() {
        let (lo, hi) = padded_domain(0.02, 0.08);
        let span = 0.08 - 0.02;
        assert!((lo - (0.02 - 0.1 * span)).abs() < 1e-12);
        assert!((hi - (0.08 + 0.1 * span)).abs() < 1e-12);

        // the lower bound never goes negative
        let (lo, hi) = padded_domain(0.001, 1.0);
        assert_eq!(lo, 0.0);
        assert!(hi > 1.0);

        // zero span means zero padding
        assert_eq!(padded_domain(0.5, 0.5), (0.5, 0.5));
    }

    #[test]
    fn ticks_are_step_aligned() {
        let values = ticks(0.0, 0.055, TICK_COUNT);
        assert!(values.len() >= 2);
        let step = values[1] - values[0];
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-12);
        }
        // every tick is an integer multiple of the step
        for v in &values {
            let ratio = v / step;
            assert!((ratio - ratio.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn sqrt_scale_area_linear_in_metric() {
        let scale = SqrtScale::new((0.0, 4.0), (0.0, 10.0));
        let half = scale.scale(1.0);
        let full = scale.scale(4.0);
        // metric ratio 1:4 shows up as area ratio 1:4, not edge ratio
        assert!((half * half / (full * full) - 0.25).abs() < 1e-9);
        assert!((half - 5.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_scale_degenerate_domain_maps_to_midpoint() {
        let scale = SqrtScale::new((1.0, 1.0), (20.0, 80.0));
        assert_eq!(scale.scale(1.0), 50.0);
        assert!(scale.scale(1.0).is_finite());
    }

    #[test]
    fn build_scales_pads_and_floors_at_zero() {
        use creative_scatter_shared::Margins;

        let records: Vec<PointRecord> = [(0.02, 0.3, 100.0), (0.08, 0.5, 400.0)]
            .iter()
            .enumerate()
            .map(|(i, (x, y, s))| PointRecord {
                id: PointRecord::key_for_index(i),
                creative_id: format!("c{i}"),
                image_url: "https://cdn.test/img.png".to_string(),
                x_value: *x,
                y_value: *y,
                size_value: *s,
                source: Default::default(),
            })
            .collect();

        let dims = Dimensions::from_container(800.0, 600.0, Margins::default());
        let style = ChartStyle::default();
        let scales = build_scales(&records, &style, &dims);

        // pre-nice lower bound is max(0, lo - 0.1*span); nice can only widen
        let span: f64 = 0.08 - 0.02;
        let (x_lo, x_hi) = scales.x.domain();
        assert!(x_lo <= (0.02 - 0.1 * span).max(0.0));
        assert!(x_hi >= 0.08 + 0.1 * span);
        assert!(x_lo >= 0.0);

        // y range inverted
        assert_eq!(scales.y.range(), (dims.draw_height, 0.0));

        // size range follows style
        assert_eq!(scales.size.scale(100.0), style.min_image_size);
        assert_eq!(scales.size.scale(400.0), style.max_image_size);
    }

    #[test]
    fn build_scales_single_point_has_zero_padding() {
        use creative_scatter_shared::Margins;

        let record = PointRecord {
            id: "item-0".to_string(),
            creative_id: "only".to_string(),
            image_url: "https://cdn.test/img.png".to_string(),
            x_value: 0.04,
            y_value: 0.2,
            size_value: 1.0,
            source: Default::default(),
        };
        let dims = Dimensions::from_container(800.0, 600.0, Margins::default());
        let scales = build_scales(&[record], &ChartStyle::default(), &dims);

        // zero span: domain stays degenerate, output stays finite
        assert_eq!(scales.x.domain(), (0.04, 0.04));
        assert!(scales.x.scale(0.04).is_finite());
        assert_eq!(scales.x.ticks(TICK_COUNT), vec![0.04]);
        assert!(scales.size.scale(1.0).is_finite());
    }
}
