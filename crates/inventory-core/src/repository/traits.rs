//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::{Entity, InventoryResult};

/// A persistent slot of string values under string keys.
///
/// Mirrors the browser `Storage` API. Every call is synchronous, so a
/// read followed by a write on the same key cannot interleave with another
/// task on a single-threaded executor.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> InventoryResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> InventoryResult<()>;

    fn remove(&self, key: &str) -> InventoryResult<()>;

    /// Every key currently stored, in no particular order
    fn keys(&self) -> InventoryResult<Vec<String>>;
}

/// Keyed CRUD over one entity type
///
/// Every write touches a single record; none rewrites the whole collection.
pub trait Repository<T: Entity> {
    /// List all entities in insertion order
    fn list(&self) -> InventoryResult<Vec<T>>;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> InventoryResult<Option<T>>;

    /// Insert or replace one entity
    fn put(&self, entity: &T) -> InventoryResult<T>;

    /// Delete entity by ID, returning whether it existed
    fn delete(&self, id: &T::Id) -> InventoryResult<bool>;
}
