use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use super::{Money, Product, ProductId};

/// Timestamp layout used wherever an order's creation time is shown.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One (product, quantity) association. The product is shared with the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product: Arc<Product>,
    pub quantity: i64,
}

impl OrderLine {
    pub fn total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Represents a customer order.
///
/// Lines are keyed by [`ProductId`] and kept in insertion order.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub created_at: DateTime<Local>,
    lines: Vec<OrderLine>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub created_at: DateTime<Local>,
}

impl Order {
    pub fn new(id: OrderId, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            created_at,
            lines: Vec::new(),
        }
    }

    /// Sums `quantity` onto an existing line or opens a new one.
    ///
    /// The quantity is not validated: zero or negative values are applied as given.
    pub fn add_product(&mut self, product: Arc<Product>, quantity: i64) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(OrderLine { product, quantity }),
        }
    }

    /// Drops the line for `product_id`. Returns whether a line was present.
    pub fn remove_product(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != product_id);
        self.lines.len() != before
    }

    /// A quantity of zero or less removes the line. A positive quantity only
    /// replaces an existing line; it never opens a new one.
    pub fn update_product_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_product(product_id);
        } else if let Some(line) = self.line_mut(product_id) {
            line.quantity = new_quantity;
        }
    }

    pub fn total_amount(&self) -> Decimal {
        self.lines.iter().map(OrderLine::total).sum()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.lines
            .iter()
            .find(|line| line.product.id == product_id)
            .map(|line| line.quantity)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.quantity_of(product_id).is_some()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut OrderLine> {
        self.lines.iter_mut().find(|line| line.product.id == product_id)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "     ORDER {}", self.id)?;
        writeln!(f, "     Date: {}", self.created_at.format(DATE_FORMAT))?;

        if self.is_empty() {
            return writeln!(f, "  Order is empty");
        }

        writeln!(f, "\n  Products:")?;
        for line in self.lines() {
            writeln!(
                f,
                "  • {} x{} - {}",
                line.product.name,
                line.quantity,
                Money(line.total())
            )?;
        }
        writeln!(f)?;
        writeln!(f, "  TOTAL: {}", Money(self.total_amount()))
    }
}
