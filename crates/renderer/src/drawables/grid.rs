//! Gridline drawable
//!
//! Fully redrawn each pass; a disabled toggle simply leaves the group
//! empty so stale lines from a previous style never survive.

use super::svg::{self, px};
use crate::context::RenderContext;
use crate::scale::TICK_COUNT;
use creative_scatter_shared::ScatterResult;
use web_sys::{Document, Element};

const GRID_COLOR: &str = "#e0e0e0";

pub fn draw_grid(document: &Document, group: &Element, ctx: &RenderContext) -> ScatterResult<()> {
    svg::clear(group);
    if !ctx.style.show_grid_lines {
        return Ok(());
    }

    for tick in ctx.scales.x.ticks(TICK_COUNT) {
        let x = px(ctx.scales.x.scale(tick));
        let line = svg::create(document, "line")?;
        svg::set_attrs(
            &line,
            &[
                ("x1", &x),
                ("y1", "0"),
                ("x2", &x),
                ("y2", &px(ctx.dims.draw_height)),
                ("stroke", GRID_COLOR),
                ("class", "grid-line"),
            ],
        )?;
        group.append_child(&line)?;
    }

    for tick in ctx.scales.y.ticks(TICK_COUNT) {
        let y = px(ctx.scales.y.scale(tick));
        let line = svg::create(document, "line")?;
        svg::set_attrs(
            &line,
            &[
                ("x1", "0"),
                ("y1", &y),
                ("x2", &px(ctx.dims.draw_width)),
                ("y2", &y),
                ("stroke", GRID_COLOR),
                ("class", "grid-line"),
            ],
        )?;
        group.append_child(&line)?;
    }

    Ok(())
}
