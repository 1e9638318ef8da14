//! Safe instance management for mounted charts
//! Thread-local registry instead of unsafe global state

use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

use crate::chart_engine::ChartEngine;
use crate::events::ResizeHook;

/// One mounted chart: the engine plus the DOM hooks that feed it.
pub struct ChartInstance {
    pub engine: ChartEngine,
    /// Holds the resize listener alive; dropped (and detached) with the
    /// instance.
    pub resize_hook: Option<ResizeHook>,
}

thread_local! {
    static CHART_INSTANCES: RefCell<HashMap<Uuid, ChartInstance>> = RefCell::new(HashMap::new());
}

/// Manages chart instances without global mutable state.
pub struct InstanceManager;

impl InstanceManager {
    /// Register a freshly mounted engine and return its id.
    pub fn create_instance(engine: ChartEngine) -> Uuid {
        let id = Uuid::new_v4();
        let instance = ChartInstance {
            engine,
            resize_hook: None,
        };
        CHART_INSTANCES.with(|instances| {
            instances.borrow_mut().insert(id, instance);
        });
        id
    }

    pub fn with_instance_mut<F, R>(id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut ChartInstance) -> R,
    {
        CHART_INSTANCES.with(|instances| instances.borrow_mut().get_mut(id).map(f))
    }

    pub fn instance_exists(id: &Uuid) -> bool {
        CHART_INSTANCES.with(|instances| instances.borrow().contains_key(id))
    }

    /// Drop an instance, detaching its DOM hooks.
    pub fn remove_instance(id: &Uuid) -> bool {
        CHART_INSTANCES
            .with(|instances| instances.borrow_mut().remove(id))
            .is_some()
    }

    pub fn instance_count() -> usize {
        CHART_INSTANCES.with(|instances| instances.borrow().len())
    }
}
