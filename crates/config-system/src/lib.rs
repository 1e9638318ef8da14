//! Configuration system for Creative Scatter
//! Parses the host's style map into a typed chart style with defaults

use creative_scatter_shared::payload::StyleMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod validation;

pub use validation::validate_style;

/// Typed chart style, one field per recognized host option.
///
/// Unrecognized options are ignored; malformed values fall back to the
/// option's default so a bad style panel entry never breaks a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub min_image_size: f64,
    pub max_image_size: f64,
    pub show_grid_lines: bool,
    pub show_tooltips: bool,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            min_image_size: 20.0,
            max_image_size: 80.0,
            show_grid_lines: true,
            show_tooltips: true,
            x_label: "CTR (%)".to_string(),
            y_label: "CVR (%)".to_string(),
        }
    }
}

impl ChartStyle {
    /// Build a style from the host's option map, applying defaults for
    /// missing or malformed entries, then run validation.
    pub fn from_style_map(style: Option<&StyleMap>) -> Self {
        let defaults = Self::default();
        let mut parsed = match style {
            Some(map) => Self {
                min_image_size: number_option(map, "minImageSize", defaults.min_image_size),
                max_image_size: number_option(map, "maxImageSize", defaults.max_image_size),
                show_grid_lines: bool_option(map, "showGridLines", defaults.show_grid_lines),
                show_tooltips: bool_option(map, "showTooltips", defaults.show_tooltips),
                x_label: string_option(map, "xLabel", &defaults.x_label),
                y_label: string_option(map, "yLabel", &defaults.y_label),
            },
            None => defaults,
        };
        validate_style(&mut parsed);
        parsed
    }
}

/// Read a numeric option; numeric strings are accepted since style panels
/// round-trip values through text inputs.
fn number_option(map: &StyleMap, key: &str, default: f64) -> f64 {
    match map.get(key).map(|entry| &entry.value) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(default),
        Some(other) if !other.is_null() => {
            log::warn!("style option {key} has non-numeric value {other}, using default");
            default
        }
        _ => default,
    }
}

fn bool_option(map: &StyleMap, key: &str, default: bool) -> bool {
    match map.get(key).map(|entry| &entry.value) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.as_str() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    }
}

fn string_option(map: &StyleMap, key: &str, default: &str) -> String {
    match map.get(key).map(|entry| &entry.value) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creative_scatter_shared::payload::StyleEntry;
    use std::collections::HashMap;

    fn style_map(entries: &[(&str, Value)]) -> StyleMap {
        entries
            .iter()
            .map(|(k, v)| {
                (
                    k.to_string(),
                    StyleEntry { value: v.clone() },
                )
            })
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn missing_map_yields_defaults() {
        let style = ChartStyle::from_style_map(None);
        assert_eq!(style, ChartStyle::default());
    }

    #[test]
    fn options_override_defaults() {
        let map = style_map(&[
            ("minImageSize", Value::from(10.0)),
            ("maxImageSize", Value::from(120.0)),
            ("showGridLines", Value::from(false)),
            ("xLabel", Value::from("Click rate")),
        ]);
        let style = ChartStyle::from_style_map(Some(&map));
        assert_eq!(style.min_image_size, 10.0);
        assert_eq!(style.max_image_size, 120.0);
        assert!(!style.show_grid_lines);
        assert!(style.show_tooltips);
        assert_eq!(style.x_label, "Click rate");
        assert_eq!(style.y_label, "CVR (%)");
    }

    #[test]
    fn numeric_strings_parse() {
        let map = style_map(&[("minImageSize", Value::from("32"))]);
        let style = ChartStyle::from_style_map(Some(&map));
        assert_eq!(style.min_image_size, 32.0);
    }

    #[test]
    fn malformed_values_fall_back() {
        let map = style_map(&[
            ("minImageSize", Value::from("not a number")),
            ("showTooltips", Value::from(3)),
        ]);
        let style = ChartStyle::from_style_map(Some(&map));
        assert_eq!(style.min_image_size, 20.0);
        assert!(style.show_tooltips);
    }

    #[test]
    fn unknown_keys_ignored() {
        let map = style_map(&[("bogusOption", Value::from(99))]);
        let style = ChartStyle::from_style_map(Some(&map));
        assert_eq!(style, ChartStyle::default());
    }
}
