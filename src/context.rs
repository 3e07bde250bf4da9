//! Application Context
//!
//! Shared handle provided via Leptos Context API. Components call its
//! methods instead of touching the controller or the service directly.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_core::{Controller, Effect, InventoryService, ProductDraft, ProductId, Route};

use crate::browser::{BrowserStorage, TimerLatency};
use crate::store::{AppStateStoreFields, AppStore};

/// Mock service as wired in the browser
pub type Service = InventoryService<BrowserStorage, TimerLatency>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive UI state
    pub store: AppStore,
    /// Mock API over local storage
    service: StoredValue<Service>,
}

impl AppContext {
    pub fn new(store: AppStore, service: Service) -> Self {
        Self {
            store,
            service: StoredValue::new(service),
        }
    }

    /// Run an effect on the service and feed the outcome back
    pub fn run(&self, effect: Effect) {
        let service = self.service.get_value();
        let store = self.store;
        tracing::debug!(?effect, "dispatching");
        spawn_local(async move {
            let outcome = service.execute(effect).await;
            store.controller().write().apply(outcome);
        });
    }

    pub fn navigate(&self, route: Route) {
        self.update(|c| c.navigate(route));
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.update(|c| c.set_sidebar_open(open));
    }

    pub fn edit(&self, id: ProductId) {
        if let Err(rejected) = self.update(|c| c.edit(&id)) {
            tracing::warn!(?rejected, "edit ignored");
        }
    }

    pub fn request_delete(&self, id: ProductId) {
        if let Err(rejected) = self.update(|c| c.request_delete(id)) {
            tracing::warn!(?rejected, "delete request ignored");
        }
    }

    pub fn cancel_delete(&self) {
        self.update(Controller::cancel_delete);
    }

    pub fn confirm_delete(&self) {
        if let Some(effect) = self.update(Controller::confirm_delete) {
            self.run(effect);
        }
    }

    pub fn submit(&self, draft: ProductDraft) {
        match self.update(|c| c.submit(draft)) {
            Ok(effect) => self.run(effect),
            Err(rejected) => tracing::warn!(?rejected, "submit ignored"),
        }
    }

    pub fn reload(&self) {
        match self.update(Controller::reload) {
            Ok(effect) => self.run(effect),
            Err(rejected) => tracing::warn!(?rejected, "reload ignored"),
        }
    }

    pub fn reset(&self) {
        match self.update(Controller::reset) {
            Ok(effect) => self.run(effect),
            Err(rejected) => tracing::warn!(?rejected, "reset ignored"),
        }
    }

    pub fn dismiss_error(&self) {
        self.update(Controller::dismiss_error);
    }

    fn update<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> R {
        let binding = self.store.controller();
        let mut guard = binding.write();
        f(&mut *guard)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
