use tracing::{debug, info};

use crate::domain::{Order, OrderCreate, OrderId};
use crate::resource_store::Entity;
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &OrderId { &self.id }

    /// Creates an empty Order stamped with the requested creation time.
    fn from_create(id: OrderId, params: OrderCreate) -> Self {
        Order::new(id, params.created_at)
    }

    fn on_create(&mut self) {
        info!(order_id = %self.id, "Order opened");
    }

    fn on_delete(&self) {
        info!(order_id = %self.id, lines = self.line_count(), "Order removed");
    }

    /// Applies a line-item edit.
    ///
    /// # Actions
    /// - `AddProduct`: sums onto the existing line or opens a new one
    /// - `RemoveProduct`: drops the line if present
    /// - `UpdateQuantity`: replaces an existing line's quantity, removing it at zero or below
    fn handle_action(&mut self, action: OrderAction) -> OrderActionResult {
        debug!(order_id = %self.id, ?action, "Applying order action");
        let product_id = match action {
            OrderAction::AddProduct { product, quantity } => {
                let product_id = product.id;
                self.add_product(product, quantity);
                product_id
            }
            OrderAction::RemoveProduct(product_id) => {
                self.remove_product(product_id);
                product_id
            }
            OrderAction::UpdateQuantity { product_id, quantity } => {
                self.update_product_quantity(product_id, quantity);
                product_id
            }
        };
        OrderActionResult {
            product_id,
            quantity: self.quantity_of(product_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Local;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{Product, ProductId};

    #[test]
    fn test_actions_report_resulting_quantity() {
        let mut order = Order::from_create(OrderId(1), OrderCreate { created_at: Local::now() });
        let mouse = Arc::new(Product::new(ProductId(2), "Mouse", Decimal::new(50_000, 2)));

        let added = order.handle_action(OrderAction::AddProduct { product: Arc::clone(&mouse), quantity: 3 });
        assert_eq!(added, OrderActionResult { product_id: ProductId(2), quantity: Some(3) });

        let updated = order.handle_action(OrderAction::UpdateQuantity { product_id: ProductId(2), quantity: 7 });
        assert_eq!(updated.quantity, Some(7));

        let removed = order.handle_action(OrderAction::RemoveProduct(ProductId(2)));
        assert_eq!(removed.quantity, None);

        let not_inserted = order.handle_action(OrderAction::UpdateQuantity { product_id: ProductId(2), quantity: 7 });
        assert_eq!(not_inserted.quantity, None);
        assert!(order.is_empty());
    }
}
