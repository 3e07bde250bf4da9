//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use inventory_core::{AppConfig, Controller};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page, activity, products and sidebar state
    pub controller: Controller,
    /// Settings read at startup
    pub config: AppConfig,
}

impl AppState {
    pub fn new(controller: Controller, config: AppConfig) -> Self {
        Self { controller, config }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
