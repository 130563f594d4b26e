use std::sync::Arc;

use crate::domain::{Product, ProductId};

/// Custom actions for Order entities.
///
/// These are the line-item edits that can be applied to an order held in a
/// [`ResourceStore`](crate::resource_store::ResourceStore).
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Adds `quantity` units of a product, summing onto an existing line.
    AddProduct { product: Arc<Product>, quantity: i64 },
    /// Drops the product's line. Absent products are ignored.
    RemoveProduct(ProductId),
    /// Replaces the quantity of an existing line; zero or less removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
}

/// Result of an [`OrderAction`]: the product's quantity once the action has
/// been applied, or `None` when the order no longer has a line for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderActionResult {
    pub product_id: ProductId,
    pub quantity: Option<i64>,
}
