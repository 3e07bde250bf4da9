//! Dashboard Aggregation
//!
//! Pure functions over the product list, recomputed on every render.

use crate::domain::Product;

/// Headline figures for the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_stock: u64,
    /// Sum of price × stock, in minor units
    pub total_value: u128,
    /// Products with stock strictly below the threshold
    pub low_stock: usize,
}

impl DashboardStats {
    pub fn compute(products: &[Product], low_stock_threshold: u64) -> Self {
        products.iter().fold(Self::default(), |mut acc, p| {
            acc.total_products += 1;
            acc.total_stock = acc.total_stock.saturating_add(p.stock);
            acc.total_value = acc.total_value.saturating_add(p.value());
            if p.is_low_stock(low_stock_threshold) {
                acc.low_stock += 1;
            }
            acc
        })
    }
}

/// Stock summed over one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub stock: u64,
}

/// Stock per category, in order of first appearance
pub fn category_totals(products: &[Product]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for p in products {
        match totals.iter_mut().find(|t| t.category == p.category) {
            Some(total) => total.stock = total.stock.saturating_add(p.stock),
            None => totals.push(CategoryTotal {
                category: p.category.clone(),
                stock: p.stock,
            }),
        }
    }
    totals
}

/// The last `limit` products added, newest first
pub fn recent_products(products: &[Product], limit: usize) -> Vec<Product> {
    products.iter().rev().take(limit).cloned().collect()
}
