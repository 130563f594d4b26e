use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{Product, ProductId};

/// Seed list as (name, price in hundredths). Ids follow list position, from 1.
const SEED_PRODUCTS: [(&str, i64); 7] = [
    ("Laptop", 2_500_000),
    ("Mouse", 50_000),
    ("Keyboard", 120_000),
    ("Monitor", 800_000),
    ("Headphones", 300_000),
    ("Webcam", 150_000),
    ("USB flash drive 64GB", 30_000),
];

/// The fixed list of purchasable products.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    pub fn seeded() -> Self {
        let products = (1u32..)
            .zip(SEED_PRODUCTS)
            .map(|(id, (name, cents))| Arc::new(Product::new(ProductId(id), name, Decimal::new(cents, 2))))
            .collect();
        Self { products }
    }

    pub fn find(&self, product_id: ProductId) -> Option<Arc<Product>> {
        self.products
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n")?;
        writeln!(f, "     AVAILABLE PRODUCTS")?;
        for product in self.iter() {
            writeln!(f, "  {product}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_exact() {
        let catalog = Catalog::seeded();
        let seeded: Vec<(u32, String, Decimal)> = catalog
            .iter()
            .map(|p| (p.id.0, p.name.clone(), p.price))
            .collect();

        assert_eq!(
            seeded,
            vec![
                (1, "Laptop".to_string(), Decimal::from(25_000)),
                (2, "Mouse".to_string(), Decimal::from(500)),
                (3, "Keyboard".to_string(), Decimal::from(1_200)),
                (4, "Monitor".to_string(), Decimal::from(8_000)),
                (5, "Headphones".to_string(), Decimal::from(3_000)),
                (6, "Webcam".to_string(), Decimal::from(1_500)),
                (7, "USB flash drive 64GB".to_string(), Decimal::from(300)),
            ]
        );
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.find(ProductId(4)).map(|p| p.name.clone()), Some("Monitor".to_string()));
        assert!(catalog.find(ProductId(0)).is_none());
        assert!(catalog.find(ProductId(8)).is_none());
    }

    #[test]
    fn test_find_shares_the_same_product() {
        let catalog = Catalog::seeded();
        let a = catalog.find(ProductId(1)).unwrap();
        let b = catalog.find(ProductId(1)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_rendering_lists_every_product() {
        let rendered = Catalog::seeded().to_string();
        assert!(rendered.contains("AVAILABLE PRODUCTS"));
        assert!(rendered.contains("[1] Laptop - 25000.00 UAH"));
        assert!(rendered.contains("[7] USB flash drive 64GB - 300.00 UAH"));
    }
}
