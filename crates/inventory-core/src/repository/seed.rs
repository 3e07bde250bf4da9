//! Default inventory written on first access

use crate::domain::Product;

/// The records seeded into an empty store
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("p1", "Laptop Pro 14\"", "Elektronik", 15, 25_000_000),
        Product::new("p2", "Keyboard Mekanikal", "Aksesoris", 45, 1_200_000),
        Product::new("p3", "Mouse Gaming RGB", "Aksesoris", 70, 850_000),
        Product::new("p4", "Monitor Ultrawide 34\"", "Elektronik", 10, 7_500_000),
        Product::new("p5", "Buku \"React Clean Code\"", "Buku", 120, 250_000),
    ]
}
