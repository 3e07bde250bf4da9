//! Snapshot
//!
//! The full product collection as read at one store revision.

use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// Full product collection plus the store revision it was read at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub revision: u64,
    pub products: Vec<Product>,
}

impl Snapshot {
    pub fn new(revision: u64, products: Vec<Product>) -> Self {
        Self { revision, products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }
}
