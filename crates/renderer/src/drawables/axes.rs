//! Axis drawables
//!
//! Both axes redraw in full each pass: a domain line, tick marks and
//! percentage-formatted tick labels. The X axis group is translated to the
//! bottom of the plot area; the Y axis group stays at the origin.

use super::svg::{self, px};
use crate::context::RenderContext;
use crate::format::format_percent;
use crate::scale::TICK_COUNT;
use creative_scatter_shared::ScatterResult;
use web_sys::{Document, Element};

const TICK_LENGTH: f64 = 6.0;
const AXIS_COLOR: &str = "#333333";

pub fn draw_x_axis(
    document: &Document,
    group: &Element,
    ctx: &RenderContext,
) -> ScatterResult<()> {
    svg::clear(group);
    group.set_attribute(
        "transform",
        &format!("translate(0,{})", px(ctx.dims.draw_height)),
    )?;

    let domain = svg::create(document, "line")?;
    svg::set_attrs(
        &domain,
        &[
            ("x1", "0"),
            ("y1", "0"),
            ("x2", &px(ctx.dims.draw_width)),
            ("y2", "0"),
            ("stroke", AXIS_COLOR),
        ],
    )?;
    group.append_child(&domain)?;

    for tick in ctx.scales.x.ticks(TICK_COUNT) {
        let x = px(ctx.scales.x.scale(tick));

        let mark = svg::create(document, "line")?;
        svg::set_attrs(
            &mark,
            &[
                ("x1", &x),
                ("y1", "0"),
                ("x2", &x),
                ("y2", &px(TICK_LENGTH)),
                ("stroke", AXIS_COLOR),
            ],
        )?;
        group.append_child(&mark)?;

        let label = svg::create(document, "text")?;
        svg::set_attrs(
            &label,
            &[
                ("x", &x),
                ("y", "20"),
                ("text-anchor", "middle"),
                ("class", "tick-label"),
            ],
        )?;
        label.set_text_content(Some(&format_percent(tick, 1)));
        group.append_child(&label)?;
    }

    Ok(())
}

pub fn draw_y_axis(
    document: &Document,
    group: &Element,
    ctx: &RenderContext,
) -> ScatterResult<()> {
    svg::clear(group);

    let domain = svg::create(document, "line")?;
    svg::set_attrs(
        &domain,
        &[
            ("x1", "0"),
            ("y1", "0"),
            ("x2", "0"),
            ("y2", &px(ctx.dims.draw_height)),
            ("stroke", AXIS_COLOR),
        ],
    )?;
    group.append_child(&domain)?;

    for tick in ctx.scales.y.ticks(TICK_COUNT) {
        let y = px(ctx.scales.y.scale(tick));

        let mark = svg::create(document, "line")?;
        svg::set_attrs(
            &mark,
            &[
                ("x1", &px(-TICK_LENGTH)),
                ("y1", &y),
                ("x2", "0"),
                ("y2", &y),
                ("stroke", AXIS_COLOR),
            ],
        )?;
        group.append_child(&mark)?;

        let label = svg::create(document, "text")?;
        svg::set_attrs(
            &label,
            &[
                ("x", "-9"),
                ("y", &px(ctx.scales.y.scale(tick) + 4.0)),
                ("text-anchor", "end"),
                ("class", "tick-label"),
            ],
        )?;
        label.set_text_content(Some(&format_percent(tick, 1)));
        group.append_child(&label)?;
    }

    Ok(())
}
