//! Product Entity
//!
//! A single inventory record plus the draft a form submission produces.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::Entity;
use super::error::{InventoryError, InventoryResult};

/// Unique product identifier, e.g. `p1` or `p1718000000000`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build a timestamp id (`p<millis>`), adding a `-n` suffix while the
    /// candidate is already taken.
    pub fn generate(millis: i64, taken: impl Fn(&ProductId) -> bool) -> Self {
        let base = format!("p{}", millis);
        let mut candidate = Self(base.clone());
        let mut suffix = 1u32;
        while taken(&candidate) {
            candidate = Self(format!("{}-{}", base, suffix));
            suffix += 1;
        }
        candidate
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An inventory record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Units on hand
    pub stock: u64,
    /// Unit price in minor currency units
    pub price: u64,
    /// Bumped on every write; absent in data written by older layouts
    #[serde(default)]
    pub version: u64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u64,
        price: u64,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            stock,
            price,
            version: 1,
        }
    }

    /// Stock value (price × stock) in minor units
    pub fn value(&self) -> u128 {
        u128::from(self.price) * u128::from(self.stock)
    }

    pub fn is_low_stock(&self, threshold: u64) -> bool {
        self.stock < threshold
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Candidate record for an upsert.
///
/// Without `id` it describes a new product and every field is required.
/// With `id` it is merged onto the stored record: absent fields keep their
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u64>,
    pub price: Option<u64>,
    /// Version of the record the draft was edited from
    pub base_version: Option<u64>,
}

impl ProductDraft {
    /// Draft carrying every field, for create (`id = None`) or full replace
    pub fn full(
        id: Option<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u64,
        price: u64,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            category: Some(category.into()),
            stock: Some(stock),
            price: Some(price),
            base_version: None,
        }
    }

    pub fn with_base_version(mut self, version: u64) -> Self {
        self.base_version = Some(version);
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Turn a create draft into a product with the given id
    pub fn into_new_product(self, id: ProductId) -> InventoryResult<Product> {
        let name = required_text(self.name, "name")?;
        let category = required_text(self.category, "category")?;
        let stock = self
            .stock
            .ok_or_else(|| InventoryError::InvalidInput("stock is required".into()))?;
        let price = self
            .price
            .ok_or_else(|| InventoryError::InvalidInput("price is required".into()))?;
        Ok(Product {
            id,
            name,
            category,
            stock,
            price,
            version: 1,
        })
    }

    /// Shallow merge onto `existing`; the id never changes
    pub fn merge_into(self, existing: &Product) -> InventoryResult<Product> {
        let mut merged = existing.clone();
        if let Some(name) = self.name {
            merged.name = non_empty(name, "name")?;
        }
        if let Some(category) = self.category {
            merged.category = non_empty(category, "category")?;
        }
        if let Some(stock) = self.stock {
            merged.stock = stock;
        }
        if let Some(price) = self.price {
            merged.price = price;
        }
        merged.version = existing.version + 1;
        Ok(merged)
    }
}

fn required_text(value: Option<String>, field: &str) -> InventoryResult<String> {
    match value {
        Some(v) => non_empty(v, field),
        None => Err(InventoryError::InvalidInput(format!("{} is required", field))),
    }
}

fn non_empty(value: String, field: &str) -> InventoryResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}
