//! Browser Adapters
//!
//! `localStorage` as a [`KeyValueStore`], timer-based latency, and the
//! optional settings document.

use async_trait::async_trait;
use std::time::Duration;
use wasm_bindgen::JsValue;

use inventory_core::{AppConfig, InventoryError, InventoryResult, KeyValueStore, Latency};

/// Local-storage key of the optional JSON settings document
pub const SETTINGS_KEY: &str = "inventory_settings";

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> InventoryResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| InventoryError::Storage("no window object".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| InventoryError::Storage("localStorage is disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> InventoryResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> InventoryResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> InventoryResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }

    fn keys(&self) -> InventoryResult<Vec<String>> {
        let storage = Self::storage()?;
        let len = storage.length().map_err(js_error)?;
        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Some(key) = storage.key(i).map_err(js_error)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

fn js_error(e: JsValue) -> InventoryError {
    InventoryError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Simulated network latency on `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerLatency;

#[async_trait(?Send)]
impl Latency for TimerLatency {
    async fn pause(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        gloo_timers::future::sleep(duration).await;
    }
}

/// Settings from local storage, falling back to defaults
pub fn load_config() -> AppConfig {
    let raw = match BrowserStorage.get(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AppConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "settings unavailable, using defaults");
            return AppConfig::default();
        }
    };
    match AppConfig::from_json(&raw) {
        Ok(config) => {
            tracing::info!(?config, "loaded settings");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid settings");
            AppConfig::default()
        }
    }
}
