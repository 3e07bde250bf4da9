//! Product Repository Implementation
//!
//! Keyed product store on top of any [`KeyValueStore`].
//!
//! Layout under the configured key (default `inventory_products`):
//! - `<key>`: index document `{"schema":1,"revision":n,"ids":[...]}`
//! - `<key>:<id>`: one JSON product per record
//!
//! A `<key>` holding a JSON array is the older single-document layout and
//! is migrated on first read.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::seed::default_products;
use super::traits::{KeyValueStore, Repository};
use crate::domain::{InventoryError, InventoryResult, Product, ProductId, Snapshot};

/// Current index document schema
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreIndex {
    schema: u32,
    revision: u64,
    ids: Vec<ProductId>,
}

impl StoreIndex {
    fn contains(&self, id: &ProductId) -> bool {
        self.ids.iter().any(|i| i == id)
    }
}

/// Record of the single-array layout. Its form had no lower bound on the
/// number inputs, and a blank input was saved as `null`.
#[derive(Debug, Deserialize)]
struct LegacyProduct {
    id: ProductId,
    name: String,
    category: String,
    stock: Option<i64>,
    price: Option<i64>,
}

impl LegacyProduct {
    fn into_product(self) -> Product {
        let stock = clamp_amount(&self.id, "stock", self.stock);
        let price = clamp_amount(&self.id, "price", self.price);
        Product {
            id: self.id,
            name: self.name,
            category: self.category,
            stock,
            price,
            version: 1,
        }
    }
}

fn clamp_amount(id: &ProductId, field: &'static str, value: Option<i64>) -> u64 {
    match value {
        Some(v) if v >= 0 => v as u64,
        other => {
            tracing::warn!(product_id = %id, field, value = ?other, "clamping legacy amount to 0");
            0
        }
    }
}

/// Keyed product storage
#[derive(Debug, Clone)]
pub struct ProductRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProductRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Full snapshot, seeding the defaults when nothing is stored
    pub fn load(&self) -> InventoryResult<Snapshot> {
        let index = self.index_or_seed()?;
        let mut products = Vec::with_capacity(index.ids.len());
        for id in &index.ids {
            match self.read_record(id)? {
                Some(product) => products.push(product),
                None => tracing::warn!(product_id = %id, "index lists a record that is missing"),
            }
        }
        Ok(Snapshot::new(index.revision, products))
    }

    /// Replace the whole collection
    pub fn save(&self, products: &[Product]) -> InventoryResult<Snapshot> {
        let mut seen = HashSet::new();
        for product in products {
            if !seen.insert(&product.id) {
                return Err(InventoryError::InvalidInput(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        let previous = self.read_index()?.unwrap_or_default();
        for product in products {
            self.write_record(product)?;
        }
        let index = StoreIndex {
            schema: SCHEMA_VERSION,
            revision: previous.revision + 1,
            ids: products.iter().map(|p| p.id.clone()).collect(),
        };
        self.write_index(&index)?;
        for stale in previous.ids.iter().filter(|id| !index.contains(id)) {
            self.store.remove(&self.record_key(stale))?;
        }

        tracing::debug!(revision = index.revision, count = products.len(), "collection replaced");
        Ok(Snapshot::new(index.revision, products.to_vec()))
    }

    /// Drop stored data and write the default records again.
    ///
    /// Works even when the current index cannot be parsed: records are found
    /// by key prefix, not through the index. The revision then restarts at 1.
    pub fn reset(&self) -> InventoryResult<Snapshot> {
        let previous_revision = match self.read_index() {
            Ok(index) => index.map(|i| i.revision).unwrap_or(0),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable index");
                0
            }
        };
        self.store.remove(&self.key)?;
        let prefix = self.record_key_prefix();
        let mut swept = 0usize;
        for key in self.store.keys()? {
            if key.starts_with(&prefix) {
                self.store.remove(&key)?;
                swept += 1;
            }
        }
        tracing::debug!(swept, "old records removed");

        let seed = default_products();
        for product in &seed {
            self.write_record(product)?;
        }
        let index = StoreIndex {
            schema: SCHEMA_VERSION,
            revision: previous_revision + 1,
            ids: seed.iter().map(|p| p.id.clone()).collect(),
        };
        self.write_index(&index)?;
        tracing::info!(revision = index.revision, "store reset to defaults");
        Ok(Snapshot::new(index.revision, seed))
    }

    /// Ids currently listed, in insertion order
    pub fn ids(&self) -> InventoryResult<Vec<ProductId>> {
        Ok(self.index_or_seed()?.ids)
    }

    fn record_key_prefix(&self) -> String {
        format!("{}:", self.key)
    }

    fn record_key(&self, id: &ProductId) -> String {
        format!("{}{}", self.record_key_prefix(), id)
    }

    fn index_or_seed(&self) -> InventoryResult<StoreIndex> {
        match self.read_index()? {
            Some(index) => Ok(index),
            None => {
                let seed = default_products();
                tracing::info!(key = %self.key, count = seed.len(), "seeding default inventory");
                for product in &seed {
                    self.write_record(product)?;
                }
                let index = StoreIndex {
                    schema: SCHEMA_VERSION,
                    revision: 1,
                    ids: seed.iter().map(|p| p.id.clone()).collect(),
                };
                self.write_index(&index)?;
                Ok(index)
            }
        }
    }

    fn read_index(&self) -> InventoryResult<Option<StoreIndex>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| InventoryError::corrupt(&self.key, e))?;

        if value.is_array() {
            let legacy: Vec<LegacyProduct> =
                serde_json::from_value(value).map_err(|e| InventoryError::corrupt(&self.key, e))?;
            return self.migrate(legacy).map(Some);
        }

        let index: StoreIndex =
            serde_json::from_value(value).map_err(|e| InventoryError::corrupt(&self.key, e))?;
        if index.schema != SCHEMA_VERSION {
            return Err(InventoryError::corrupt(
                &self.key,
                format!("unsupported schema {}", index.schema),
            ));
        }
        Ok(Some(index))
    }

    /// Rewrite a single-array document into the keyed layout
    fn migrate(&self, legacy: Vec<LegacyProduct>) -> InventoryResult<StoreIndex> {
        let mut index = StoreIndex {
            schema: SCHEMA_VERSION,
            revision: 1,
            ids: Vec::with_capacity(legacy.len()),
        };
        for record in legacy {
            if index.contains(&record.id) {
                tracing::warn!(product_id = %record.id, "dropping duplicate id during migration");
                continue;
            }
            let product = record.into_product();
            self.write_record(&product)?;
            index.ids.push(product.id);
        }
        self.write_index(&index)?;
        tracing::info!(key = %self.key, count = index.ids.len(), "migrated single-array layout");
        Ok(index)
    }

    fn write_index(&self, index: &StoreIndex) -> InventoryResult<()> {
        let raw = serde_json::to_string(index).map_err(|e| InventoryError::Storage(e.to_string()))?;
        self.store.set(&self.key, &raw)
    }

    fn read_record(&self, id: &ProductId) -> InventoryResult<Option<Product>> {
        let key = self.record_key(id);
        match self.store.get(&key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| InventoryError::corrupt(key, e)),
            None => Ok(None),
        }
    }

    fn write_record(&self, product: &Product) -> InventoryResult<()> {
        let raw =
            serde_json::to_string(product).map_err(|e| InventoryError::Storage(e.to_string()))?;
        self.store.set(&self.record_key(&product.id), &raw)
    }
}

impl<S: KeyValueStore> Repository<Product> for ProductRepository<S> {
    fn list(&self) -> InventoryResult<Vec<Product>> {
        Ok(self.load()?.products)
    }

    fn find_by_id(&self, id: &ProductId) -> InventoryResult<Option<Product>> {
        if !self.index_or_seed()?.contains(id) {
            return Ok(None);
        }
        self.read_record(id)
    }

    fn put(&self, product: &Product) -> InventoryResult<Product> {
        let mut index = self.index_or_seed()?;
        // Record first: an interrupted insert leaves an orphan, never a dangling id.
        self.write_record(product)?;
        if !index.contains(&product.id) {
            index.ids.push(product.id.clone());
        }
        index.revision += 1;
        self.write_index(&index)?;
        tracing::debug!(product_id = %product.id, revision = index.revision, "record written");
        Ok(product.clone())
    }

    fn delete(&self, id: &ProductId) -> InventoryResult<bool> {
        let mut index = self.index_or_seed()?;
        if !index.contains(id) {
            return Ok(false);
        }
        index.ids.retain(|i| i != id);
        index.revision += 1;
        // Index first, then the record.
        self.write_index(&index)?;
        self.store.remove(&self.record_key(id))?;
        tracing::debug!(product_id = %id, revision = index.revision, "record deleted");
        Ok(true)
    }
}
