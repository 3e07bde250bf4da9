//! Repository Layer
//!
//! Key-value storage abstraction and the keyed product store built on it.

mod traits;
mod memory;
mod product_repo;
mod seed;


pub use traits::{KeyValueStore, Repository};
pub use memory::MemoryStore;
pub use product_repo::{ProductRepository, SCHEMA_VERSION};
pub use seed::default_products;
