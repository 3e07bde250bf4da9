//! Domain Layer
//!
//! Contains the product entity, drafts, snapshots and the error taxonomy.
//! This layer has no I/O (serde only, for persistence).

mod entity;
mod error;
mod product;
mod snapshot;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use product::{Product, ProductDraft, ProductId};
pub use snapshot::Snapshot;
