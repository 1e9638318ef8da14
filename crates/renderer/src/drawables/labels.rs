//! Axis label drawable
//!
//! Labels hang off the SVG root rather than the margin-translated main
//! group, so their coordinates include the margins. Fully redrawn each
//! pass to pick up style changes.

use super::svg::{self, px};
use crate::context::RenderContext;
use creative_scatter_shared::ScatterResult;
use web_sys::{Document, Element};

pub fn draw_axis_labels(
    document: &Document,
    svg_root: &Element,
    ctx: &RenderContext,
) -> ScatterResult<()> {
    let stale = svg_root.query_selector_all(".axis-label")?;
    for i in 0..stale.length() {
        if let Some(node) = stale.item(i) {
            if let Some(parent) = node.parent_node() {
                parent.remove_child(&node).ok();
            }
        }
    }

    let margins = ctx.dims.margins;

    let x_label = svg::create(document, "text")?;
    svg::set_attrs(
        &x_label,
        &[
            ("class", "axis-label x-axis-label"),
            ("x", &px(margins.left + ctx.dims.draw_width / 2.0)),
            ("y", &px(margins.top + ctx.dims.draw_height + 45.0)),
            ("text-anchor", "middle"),
        ],
    )?;
    x_label.set_text_content(Some(&ctx.style.x_label));
    svg_root.append_child(&x_label)?;

    let y_label = svg::create(document, "text")?;
    svg::set_attrs(
        &y_label,
        &[
            ("class", "axis-label y-axis-label"),
            ("transform", "rotate(-90)"),
            ("x", &px(-(margins.top + ctx.dims.draw_height / 2.0))),
            ("y", "20"),
            ("text-anchor", "middle"),
        ],
    )?;
    y_label.set_text_content(Some(&ctx.style.y_label));
    svg_root.append_child(&y_label)?;

    Ok(())
}
