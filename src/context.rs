//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::api::FoodApi;
use crate::components::SignalDialogs;

/// App-wide services and signals provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Food service client. The browser runs on one thread, so the non-Send client is wrapped.
    api: SendWrapper<Rc<dyn FoodApi>>,
    /// Alert/confirm dialogs rendered by `DialogHost`
    pub dialogs: SignalDialogs,
    /// Trigger to reload the list from the service - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the list from the service - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        api: Rc<dyn FoodApi>,
        dialogs: SignalDialogs,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            api: SendWrapper::new(api),
            dialogs,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Handle to the food service
    pub fn api(&self) -> Rc<dyn FoodApi> {
        Rc::clone(&self.api)
    }

    /// Trigger a reload of the list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
