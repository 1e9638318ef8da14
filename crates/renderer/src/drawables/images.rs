//! Image element reconciliation
//!
//! Binds the point records to `<image>` elements keyed by record id. New
//! keys fade in, surviving keys retarget their in-flight CSS transition to
//! the new geometry, removed keys fade out and are deleted by a deferred
//! callback. Deferred callbacks capture the pass generation and abort when
//! a newer pass has started, so a superseded pass never mutates elements
//! the newer pass owns.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::svg::{self, px, XLINK_NS};
use crate::context::RenderContext;
use crate::tooltip::tooltip_content;
use creative_scatter_shared::{PointRecord, ScatterResult};

/// Exit fade duration; the removal timer fires after it.
pub const EXIT_MS: i32 = 300;

const ENTER_UPDATE_TRANSITION: &str =
    "opacity 0.5s ease, x 0.5s ease, y 0.5s ease, width 0.5s ease, height 0.5s ease";
const EXIT_TRANSITION: &str = "opacity 0.3s ease";

pub fn draw_images(
    document: &Document,
    group: &Element,
    records: &[PointRecord],
    ctx: &RenderContext,
    live_generation: &Rc<Cell<u64>>,
) -> ScatterResult<()> {
    let mut existing: HashMap<String, Element> = HashMap::new();
    let children = group.children();
    for i in 0..children.length() {
        if let Some(el) = children.item(i) {
            if let Some(key) = el.get_attribute("data-key") {
                existing.insert(key, el);
            }
        }
    }

    let mut kept: HashSet<&str> = HashSet::new();
    for record in records {
        let geometry = ctx.image_geometry(record);
        let tooltip = tooltip_content(record, &ctx.style);

        match existing.get(record.id.as_str()) {
            Some(el) => {
                el.remove_attribute("data-exiting").ok();
                set_geometry(el, &geometry)?;
                el.set_attribute("data-tooltip", &tooltip)?;
                el.set_attribute(
                    "style",
                    &format!("opacity:1;transition:{ENTER_UPDATE_TRANSITION};"),
                )?;
            }
            None => {
                let el = svg::create(document, "image")?;
                el.set_attribute("class", "creative-image")?;
                el.set_attribute("data-key", &record.id)?;
                el.set_attribute_ns(Some(XLINK_NS), "xlink:href", &record.image_url)?;
                set_geometry(&el, &geometry)?;
                el.set_attribute("data-tooltip", &tooltip)?;
                el.set_attribute(
                    "style",
                    &format!("opacity:0;transition:{ENTER_UPDATE_TRANSITION};"),
                )?;
                group.append_child(&el)?;
                fade_in_next_frame(el, live_generation.clone(), ctx.generation);
            }
        }
        kept.insert(record.id.as_str());
    }

    // Exit: every pass restarts the fade for still-present orphans, so the
    // newest pass always owns the removal timer.
    for (key, el) in &existing {
        if kept.contains(key.as_str()) {
            continue;
        }
        el.set_attribute("data-exiting", "true")?;
        el.set_attribute("style", &format!("opacity:0;transition:{EXIT_TRANSITION};"))?;
        schedule_removal(el.clone(), live_generation.clone(), ctx.generation);
    }

    log::debug!(
        "reconciled images: {} records, {} pre-existing elements",
        records.len(),
        existing.len()
    );
    Ok(())
}

fn set_geometry(el: &Element, geometry: &crate::context::ImageGeometry) -> ScatterResult<()> {
    svg::set_attrs(
        el,
        &[
            ("x", &px(geometry.x)),
            ("y", &px(geometry.y)),
            ("width", &px(geometry.size)),
            ("height", &px(geometry.size)),
        ],
    )
}

/// Flip opacity on the next animation frame so the enter transition runs
/// from the just-committed initial style.
fn fade_in_next_frame(el: Element, live: Rc<Cell<u64>>, pass: u64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move || {
        if live.get() != pass {
            return;
        }
        el.set_attribute(
            "style",
            &format!("opacity:1;transition:{ENTER_UPDATE_TRANSITION};"),
        )
        .ok();
    });
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget(); // invoked once by the browser
    }
}

/// Delete the element after the exit fade, unless a newer pass has taken
/// ownership of it in the meantime.
fn schedule_removal(el: Element, live: Rc<Cell<u64>>, pass: u64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move || {
        if live.get() != pass {
            return;
        }
        el.remove();
    });
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            EXIT_MS,
        )
        .is_ok()
    {
        closure.forget();
    }
}
