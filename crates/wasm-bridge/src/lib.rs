//! WASM bridge for Creative Scatter
//! Host-facing orchestration layer between the dashboard page and the
//! Rust rendering pipeline.
//!
//! The host page constructs one [`ScatterChart`] and feeds every data
//! callback into [`ScatterChart::update`]:
//!
//! ```js
//! const chart = new ScatterChart();
//! dscc.subscribeToData((data) => chart.update(data), {
//!     transform: dscc.objectTransform,
//! });
//! ```
//!
//! Payload problems never throw back into the host; they surface as the
//! page's error banner, and the next callback re-enters the pipeline.

pub mod pipeline;

#[cfg(target_arch = "wasm32")]
pub mod chart_engine;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod instance_manager;

#[cfg(target_arch = "wasm32")]
mod api {
    use uuid::Uuid;
    use wasm_bindgen::prelude::*;

    use creative_scatter_shared::{DataPayload, ScatterError};

    use crate::chart_engine::ChartEngine;
    use crate::events::{install_global_error_hook, ResizeHook};
    use crate::instance_manager::InstanceManager;

    /// One-time per-page runtime setup: panic hook, console logger and
    /// the page-level error handler.
    fn init_runtime() {
        use std::sync::Once;
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            let _ = console_log::init_with_level(log::Level::Info);
            install_global_error_hook();
        });
    }

    fn to_js_error(error: ScatterError) -> JsValue {
        serde_wasm_bindgen::to_value(&error)
            .unwrap_or_else(|_| JsValue::from_str(&error.to_string()))
    }

    /// A mounted image scatter plot.
    #[wasm_bindgen]
    pub struct ScatterChart {
        instance_id: Uuid,
    }

    #[wasm_bindgen]
    impl ScatterChart {
        /// Mount the chart against the page's fixed element ids and start
        /// listening for resizes. Fails when the hosting page is missing
        /// one of the expected elements.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<ScatterChart, JsValue> {
            init_runtime();

            let engine = ChartEngine::new().map_err(to_js_error)?;
            let instance_id = InstanceManager::create_instance(engine);

            let hook = match ResizeHook::install(move || {
                InstanceManager::with_instance_mut(&instance_id, |instance| {
                    instance.engine.rerender();
                });
            }) {
                Ok(hook) => hook,
                Err(error) => {
                    InstanceManager::remove_instance(&instance_id);
                    return Err(to_js_error(error));
                }
            };
            InstanceManager::with_instance_mut(&instance_id, |instance| {
                instance.resize_hook = Some(hook);
            });

            log::info!("scatter chart {instance_id} mounted");
            Ok(ScatterChart { instance_id })
        }

        /// Handle one host data callback. Never throws for bad payloads;
        /// those end in the error banner.
        pub fn update(&self, payload: JsValue) -> Result<(), JsValue> {
            let decoded = serde_wasm_bindgen::from_value::<DataPayload>(payload).map_err(|err| {
                ScatterError::PayloadDecode {
                    message: err.to_string(),
                }
            });

            InstanceManager::with_instance_mut(&self.instance_id, |instance| {
                instance.engine.update(decoded);
            })
            .ok_or_else(|| JsValue::from_str("chart instance not found"))
        }

        /// Unmount: drops the instance and detaches its DOM hooks.
        pub fn destroy(&self) {
            if InstanceManager::remove_instance(&self.instance_id) {
                log::info!("scatter chart {} destroyed", self.instance_id);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use api::ScatterChart;
