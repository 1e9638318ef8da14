//! Chart engine: owns the DOM surface and drives the render pipeline
//!
//! Built once per plugin mount. Persistent SVG groups are created at
//! construction; every host callback (and debounced resize) then runs the
//! validate -> transform -> scale -> draw pass against them. All pass
//! inputs travel in an immutable [`RenderContext`]; the only cross-pass
//! state is the stored payload and the pass generation counter.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use creative_scatter_config::ChartStyle;
use creative_scatter_data::{transform, validate};
use creative_scatter_renderer::drawables::svg as svg_helpers;
use creative_scatter_renderer::drawables::{axes, grid, images, labels};
use creative_scatter_renderer::RenderContext;
use creative_scatter_shared::{
    DataPayload, Dimensions, Margins, ScatterError, ScatterResult,
};

use crate::events::TooltipHandlers;
use crate::pipeline::PipelinePhase;

// Fixed element ids of the hosting page.
pub const CONTAINER_ID: &str = "visualization-container";
pub const SVG_ID: &str = "scatter-plot-svg";
pub const TOOLTIP_ID: &str = "tooltip";
pub const LOADING_ID: &str = "loading";
pub const ERROR_BANNER_ID: &str = "error-message";

pub struct ChartEngine {
    document: Document,
    container: Element,
    svg: Element,
    grid_group: Element,
    x_axis_group: Element,
    y_axis_group: Element,
    images_group: Element,
    tooltip: HtmlElement,
    loading: HtmlElement,
    error_banner: HtmlElement,
    error_text: Element,

    margins: Margins,
    phase: PipelinePhase,
    last_payload: Option<DataPayload>,
    /// Monotonic pass counter shared with deferred DOM callbacks.
    live_generation: Rc<Cell<u64>>,
    tooltip_handlers: Option<TooltipHandlers>,
}

impl ChartEngine {
    /// Mount the chart: resolve the page's fixed elements and build the
    /// persistent SVG groups. The loading indicator stays visible until
    /// the first payload arrives.
    pub fn new() -> ScatterResult<Self> {
        let window = web_sys::window().ok_or_else(|| ScatterError::Render {
            message: "no window".to_string(),
        })?;
        let document = window.document().ok_or_else(|| ScatterError::Render {
            message: "no document".to_string(),
        })?;

        let container = require_element(&document, CONTAINER_ID)?;
        let svg = require_element(&document, SVG_ID)?;
        let tooltip = require_html_element(&document, TOOLTIP_ID)?;
        let loading = require_html_element(&document, LOADING_ID)?;
        let error_banner = require_html_element(&document, ERROR_BANNER_ID)?;
        let error_text = error_banner
            .query_selector(".error-text")?
            .ok_or_else(|| ScatterError::ElementNotFound {
                id: format!("{ERROR_BANNER_ID} .error-text"),
            })?;

        let margins = Margins::default();

        let main_group = svg_helpers::create(&document, "g")?;
        svg_helpers::set_attrs(
            &main_group,
            &[
                ("class", "main-group"),
                (
                    "transform",
                    &format!("translate({},{})", margins.left, margins.top),
                ),
            ],
        )?;

        let grid_group = svg_helpers::create(&document, "g")?;
        grid_group.set_attribute("class", "grid-group")?;
        let x_axis_group = svg_helpers::create(&document, "g")?;
        x_axis_group.set_attribute("class", "x-axis")?;
        let y_axis_group = svg_helpers::create(&document, "g")?;
        y_axis_group.set_attribute("class", "y-axis")?;
        let images_group = svg_helpers::create(&document, "g")?;
        images_group.set_attribute("class", "images-group")?;

        // grid under axes under images
        main_group.append_child(&grid_group)?;
        main_group.append_child(&x_axis_group)?;
        main_group.append_child(&y_axis_group)?;
        main_group.append_child(&images_group)?;
        svg.append_child(&main_group)?;

        let engine = Self {
            document,
            container,
            svg,
            grid_group,
            x_axis_group,
            y_axis_group,
            images_group,
            tooltip,
            loading,
            error_banner,
            error_text,
            margins,
            phase: PipelinePhase::Idle,
            last_payload: None,
            live_generation: Rc::new(Cell::new(0)),
            tooltip_handlers: None,
        };
        engine.show_loading(true);
        log::info!("chart engine mounted");
        Ok(engine)
    }

    /// Handle one host data callback. Errors never propagate to the host;
    /// they terminate the pass into the banner display state. The argument
    /// is a `Result` so an upstream payload-decode failure takes the same
    /// path as a validation failure.
    pub fn update(&mut self, payload: ScatterResult<DataPayload>) {
        self.set_phase(PipelinePhase::Validating);
        match payload.and_then(|data| self.render_pass(data)) {
            Ok(()) => {
                self.hide_error();
                self.set_phase(PipelinePhase::Idle);
            }
            Err(error) => {
                log::error!("render pass failed: {error}");
                self.set_phase(PipelinePhase::Error);
                self.show_error(&error.banner_text());
            }
        }
    }

    /// Re-run the pipeline against the last payload, e.g. after a resize.
    /// A resize before the first payload is a no-op.
    pub fn rerender(&mut self) {
        if let Some(payload) = self.last_payload.clone() {
            log::debug!("re-rendering after resize");
            self.update(Ok(payload));
        }
    }

    fn render_pass(&mut self, payload: DataPayload) -> ScatterResult<()> {
        self.set_phase(PipelinePhase::Validating);
        validate(&payload)?;
        self.show_loading(false);

        // the payload is good enough to supersede the stored one
        self.last_payload = Some(payload.clone());
        let style = ChartStyle::from_style_map(payload.style.as_ref());

        self.set_phase(PipelinePhase::Transforming);
        let records = transform(&payload)?;
        if records.is_empty() {
            return Err(ScatterError::EmptyData);
        }

        self.set_phase(PipelinePhase::Scaling);
        let dims = self.measure()?;
        let generation = self.live_generation.get() + 1;
        self.live_generation.set(generation);
        let ctx = RenderContext::new(&records, style, dims, generation);

        self.set_phase(PipelinePhase::Drawing);
        grid::draw_grid(&self.document, &self.grid_group, &ctx)?;
        axes::draw_x_axis(&self.document, &self.x_axis_group, &ctx)?;
        axes::draw_y_axis(&self.document, &self.y_axis_group, &ctx)?;
        images::draw_images(
            &self.document,
            &self.images_group,
            &records,
            &ctx,
            &self.live_generation,
        )?;
        labels::draw_axis_labels(&self.document, &self.svg, &ctx)?;
        self.sync_tooltip_handlers(ctx.style.show_tooltips)?;

        log::debug!(
            "pass {generation} drew {} creatives into {}x{}",
            records.len(),
            ctx.dims.draw_width,
            ctx.dims.draw_height
        );
        Ok(())
    }

    /// Measure the container and size the outer SVG to it.
    fn measure(&self) -> ScatterResult<Dimensions> {
        let rect = self.container.get_bounding_client_rect();
        let dims = Dimensions::from_container(rect.width(), rect.height(), self.margins);
        self.svg
            .set_attribute("width", &format!("{}", dims.total_width))?;
        self.svg
            .set_attribute("height", &format!("{}", dims.total_height))?;
        Ok(dims)
    }

    /// Attach or detach the delegated tooltip handlers to match the
    /// style toggle, evaluated on every pass.
    fn sync_tooltip_handlers(&mut self, enabled: bool) -> ScatterResult<()> {
        match (enabled, self.tooltip_handlers.is_some()) {
            (true, false) => {
                self.tooltip_handlers = Some(TooltipHandlers::attach(
                    &self.images_group,
                    self.tooltip.clone(),
                )?);
            }
            (false, true) => {
                if let Some(handlers) = self.tooltip_handlers.take() {
                    handlers.detach(&self.images_group);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn set_phase(&mut self, next: PipelinePhase) {
        debug_assert!(
            self.phase.can_transition_to(next) || self.phase == next,
            "illegal phase transition {:?} -> {next:?}",
            self.phase
        );
        log::debug!("pipeline phase {:?} -> {next:?}", self.phase);
        self.phase = next;
    }

    pub fn phase(&self) -> PipelinePhase {
        self.phase
    }

    fn show_loading(&self, show: bool) {
        let display = if show { "block" } else { "none" };
        self.loading.style().set_property("display", display).ok();
    }

    fn show_error(&self, message: &str) {
        self.error_text.set_text_content(Some(message));
        self.error_banner
            .style()
            .set_property("display", "block")
            .ok();
        self.show_loading(false);
    }

    fn hide_error(&self) {
        self.error_banner
            .style()
            .set_property("display", "none")
            .ok();
    }
}

fn require_element(document: &Document, id: &str) -> ScatterResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ScatterError::ElementNotFound { id: id.to_string() })
}

fn require_html_element(document: &Document, id: &str) -> ScatterResult<HtmlElement> {
    require_element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ScatterError::Render {
            message: format!("element #{id} is not an HTML element"),
        })
}
