//! Inventory Errors
//!
//! Every storage and service operation reports failures through
//! [`InventoryError`] instead of assuming well-formed storage.

use thiserror::Error;

use super::ProductId;

/// Common result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors raised by the storage adapter, service layer and form parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The key-value slot is unavailable or refused a write
    #[error("Storage unavailable: {0}")]
    Storage(String),
    /// Stored data under `key` could not be parsed
    #[error("Corrupt data under '{key}': {reason}")]
    Corrupt { key: String, reason: String },
    /// An update targeted a product that no longer exists
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    /// A draft or form field failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The settings document could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl InventoryError {
    pub fn corrupt(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether re-seeding the store is a sensible recovery
    pub fn is_recoverable_by_reset(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
