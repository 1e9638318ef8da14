//! DOM event wiring: resize debounce, tooltip delegation, page-level
//! error hook
//!
//! All handlers are persistent `Closure`s owned by the structs below, so
//! they can be detached again; the page-level error hook alone is leaked
//! intentionally since it lives for the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, HtmlElement, MouseEvent};

use creative_scatter_shared::{ScatterError, ScatterResult};

use crate::chart_engine::{ERROR_BANNER_ID, LOADING_ID};

/// Quiet period before a resize burst triggers one re-render.
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

/// Tooltip offset from the pointer, in page pixels.
const TOOLTIP_OFFSET_X: i32 = 10;
const TOOLTIP_OFFSET_Y: i32 = -10;

/// Trailing-edge debouncer around a fixed action.
///
/// Every [`schedule`](Self::schedule) cancels the pending timer, so a
/// burst of calls fires the action exactly once, one delay after the
/// last call.
pub struct Debouncer {
    delay_ms: i32,
    pending: Rc<RefCell<Option<i32>>>,
    fire: Closure<dyn FnMut()>,
}

impl Debouncer {
    pub fn new(delay_ms: i32, mut action: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(RefCell::new(None));
        let pending_in_fire = pending.clone();
        let fire = Closure::wrap(Box::new(move || {
            pending_in_fire.borrow_mut().take();
            action();
        }) as Box<dyn FnMut()>);
        Self {
            delay_ms,
            pending,
            fire,
        }
    }

    pub fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(handle) = self.pending.borrow_mut().take() {
            window.clear_timeout_with_handle(handle);
        }
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.fire.as_ref().unchecked_ref(),
            self.delay_ms,
        ) {
            Ok(handle) => *self.pending.borrow_mut() = Some(handle),
            Err(err) => log::warn!("failed to schedule debounced call: {err:?}"),
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let (Some(window), Some(handle)) = (web_sys::window(), self.pending.borrow_mut().take())
        {
            window.clear_timeout_with_handle(handle);
        }
    }
}

/// Window resize listener feeding a [`Debouncer`]. Detached on drop.
pub struct ResizeHook {
    listener: Closure<dyn FnMut()>,
    _debouncer: Rc<Debouncer>,
}

impl ResizeHook {
    pub fn install(action: impl FnMut() + 'static) -> ScatterResult<Self> {
        let window = web_sys::window().ok_or_else(|| ScatterError::Render {
            message: "no window".to_string(),
        })?;

        let debouncer = Rc::new(Debouncer::new(RESIZE_DEBOUNCE_MS, action));
        let debouncer_in_listener = debouncer.clone();
        let listener = Closure::wrap(Box::new(move || {
            debouncer_in_listener.schedule();
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
        Ok(Self {
            listener,
            _debouncer: debouncer,
        })
    }
}

impl Drop for ResizeHook {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window
                .remove_event_listener_with_callback("resize", self.listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

/// Delegated hover handlers on the images group.
///
/// Delegation keeps one closure set per chart instead of one per image;
/// each image carries its rendered tooltip content in a `data-tooltip`
/// attribute, so the handlers never touch chart state.
pub struct TooltipHandlers {
    over: Closure<dyn FnMut(MouseEvent)>,
    moved: Closure<dyn FnMut(MouseEvent)>,
    out: Closure<dyn FnMut(MouseEvent)>,
}

impl TooltipHandlers {
    pub fn attach(group: &Element, tooltip: HtmlElement) -> ScatterResult<Self> {
        let tip = tooltip.clone();
        let over = Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let Some(content) = target.get_attribute("data-tooltip") else {
                return;
            };
            tip.set_inner_html(&content);
            tip.class_list().add_1("visible").ok();
        }) as Box<dyn FnMut(MouseEvent)>);

        let tip = tooltip.clone();
        let moved = Closure::wrap(Box::new(move |event: MouseEvent| {
            let style = tip.style();
            style
                .set_property("left", &format!("{}px", event.page_x() + TOOLTIP_OFFSET_X))
                .ok();
            style
                .set_property("top", &format!("{}px", event.page_y() + TOOLTIP_OFFSET_Y))
                .ok();
        }) as Box<dyn FnMut(MouseEvent)>);

        let tip = tooltip;
        let out = Closure::wrap(Box::new(move |_event: MouseEvent| {
            tip.class_list().remove_1("visible").ok();
        }) as Box<dyn FnMut(MouseEvent)>);

        group.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())?;
        group.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref())?;
        group.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())?;

        Ok(Self { over, moved, out })
    }

    pub fn detach(&self, group: &Element) {
        group
            .remove_event_listener_with_callback("mouseover", self.over.as_ref().unchecked_ref())
            .ok();
        group
            .remove_event_listener_with_callback("mousemove", self.moved.as_ref().unchecked_ref())
            .ok();
        group
            .remove_event_listener_with_callback("mouseout", self.out.as_ref().unchecked_ref())
            .ok();
    }
}

/// Catch uncaught page errors and surface the generic banner. Installed
/// once per page; the closure is leaked on purpose.
pub fn install_global_error_hook() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |event: ErrorEvent| {
        log::error!("uncaught page error: {}", event.message());
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(banner) = document.get_element_by_id(ERROR_BANNER_ID) {
            if let Ok(Some(text)) = banner.query_selector(".error-text") {
                text.set_text_content(Some("An unexpected error occurred"));
            }
            if let Ok(el) = banner.dyn_into::<HtmlElement>() {
                el.style().set_property("display", "block").ok();
            }
        }
        if let Some(loading) = document.get_element_by_id(LOADING_ID) {
            if let Ok(el) = loading.dyn_into::<HtmlElement>() {
                el.style().set_property("display", "none").ok();
            }
        }
    }) as Box<dyn FnMut(ErrorEvent)>);

    if window
        .add_event_listener_with_callback("error", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget(); // page-lifetime handler
    }
}
