//! SVG element helpers

use creative_scatter_shared::{ScatterError, ScatterResult};
use web_sys::{Document, Element};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Create an element in the SVG namespace.
pub fn create(document: &Document, name: &str) -> ScatterResult<Element> {
    document
        .create_element_ns(Some(SVG_NS), name)
        .map_err(ScatterError::from)
}

/// Set a batch of attributes on one element.
pub fn set_attrs(element: &Element, attrs: &[(&str, &str)]) -> ScatterResult<()> {
    for (name, value) in attrs {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

/// Drop all children of a group.
pub fn clear(element: &Element) {
    element.set_inner_html("");
}

/// Compact attribute formatting for pixel values.
pub fn px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}
