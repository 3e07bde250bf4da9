//! Application Settings
//!
//! Every field has a default, so a partial JSON document is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{InventoryError, InventoryResult};

/// Default storage key for the product index
pub const DEFAULT_STORAGE_KEY: &str = "inventory_products";
/// Products with fewer units than this are flagged on the dashboard
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage_key: String,
    pub low_stock_threshold: u64,
    /// Simulated latency of `list`
    pub list_latency_ms: u64,
    /// Simulated latency of `upsert`, `remove` and `reset`
    pub write_latency_ms: u64,
    /// How many products the "recent" panel shows
    pub recent_limit: usize,
    pub currency_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            list_latency_ms: 1000,
            write_latency_ms: 500,
            recent_limit: 5,
            currency_prefix: "Rp".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> InventoryResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| InventoryError::Config(e.to_string()))?;
        if config.storage_key.trim().is_empty() {
            return Err(InventoryError::Config("storage_key must not be empty".into()));
        }
        Ok(config)
    }

    /// Same settings without simulated latency
    pub fn without_latency(mut self) -> Self {
        self.list_latency_ms = 0;
        self.write_latency_ms = 0;
        self
    }

    pub fn list_latency(&self) -> Duration {
        Duration::from_millis(self.list_latency_ms)
    }

    pub fn write_latency(&self) -> Duration {
        Duration::from_millis(self.write_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"low_stock_threshold": 5}"#).unwrap();
        assert_eq!(config.low_stock_threshold, 5);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.write_latency(), Duration::from_millis(500));
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = AppConfig::from_json(r#"{"storage_key": " "}"#).unwrap_err();
        assert!(matches!(err, InventoryError::Config(_)));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(AppConfig::from_json("[1,2]").is_err());
    }
}
