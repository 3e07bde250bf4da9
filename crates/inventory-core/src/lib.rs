//! Inventory Core
//!
//! Layered, platform-independent half of the inventory UI:
//! - domain: product entity, drafts, snapshots, errors
//! - repository: key-value storage abstraction and keyed product store
//! - service: mock API with simulated latency
//! - controller: UI state machine
//! - stats / format: dashboard aggregation and number formatting

pub mod config;
pub mod controller;
pub mod domain;
pub mod format;
pub mod repository;
pub mod service;
pub mod stats;

pub use config::AppConfig;
pub use controller::{
    Activity, Confirmation, Controller, Effect, FormMode, Outcome, Page, Pending, Rejected, Route,
};
pub use domain::{Entity, InventoryError, InventoryResult, Product, ProductDraft, ProductId, Snapshot};
pub use repository::{KeyValueStore, MemoryStore, ProductRepository, Repository};
pub use service::{Clock, InventoryService, Latency, NoLatency, SystemClock};
pub use stats::{category_totals, recent_products, CategoryTotal, DashboardStats};
