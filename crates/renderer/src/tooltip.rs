//! Tooltip content templating
//!
//! Builds the HTML fragment shown on hover. Content is rendered here, off
//! the DOM, so the bridge's event handlers stay dumb and the template is
//! unit-testable on the native target. Creative names come from host data
//! and are escaped before interpolation.

use crate::format::{format_grouped, format_percent};
use creative_scatter_config::ChartStyle;
use creative_scatter_shared::PointRecord;

/// HTML fragment for one creative's tooltip.
pub fn tooltip_content(record: &PointRecord, style: &ChartStyle) -> String {
    format!(
        concat!(
            r#"<div class="tooltip-title">{title}</div>"#,
            r#"<div class="tooltip-content">"#,
            r#"<div class="tooltip-row"><span class="tooltip-label">{x_label}:</span>"#,
            r#"<span class="tooltip-value">{x}</span></div>"#,
            r#"<div class="tooltip-row"><span class="tooltip-label">{y_label}:</span>"#,
            r#"<span class="tooltip-value">{y}</span></div>"#,
            r#"<div class="tooltip-row"><span class="tooltip-label">Size:</span>"#,
            r#"<span class="tooltip-value">{size}</span></div>"#,
            r#"</div>"#
        ),
        title = escape_html(&record.creative_id),
        x_label = escape_html(&style.x_label),
        y_label = escape_html(&style.y_label),
        x = format_percent(record.x_value, 2),
        y = format_percent(record.y_value, 2),
        size = format_grouped(record.size_value),
    )
}

/// Minimal HTML escaping for text interpolated into the tooltip.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PointRecord {
        PointRecord {
            id: "item-0".to_string(),
            creative_id: "Summer Sale <A>".to_string(),
            image_url: "https://cdn.test/a.png".to_string(),
            x_value: 0.0123,
            y_value: 0.4,
            size_value: 1_234_567.0,
            source: Default::default(),
        }
    }

    #[test]
    fn content_contains_formatted_metrics() {
        let html = tooltip_content(&record(), &ChartStyle::default());
        assert!(html.contains("1.23%"));
        assert!(html.contains("40.00%"));
        assert!(html.contains("1,234,567"));
        assert!(html.contains("CTR (%):"));
        assert!(html.contains("CVR (%):"));
    }

    #[test]
    fn creative_name_is_escaped() {
        let html = tooltip_content(&record(), &ChartStyle::default());
        assert!(html.contains("Summer Sale &lt;A&gt;"));
        assert!(!html.contains("<A>"));
    }
}
