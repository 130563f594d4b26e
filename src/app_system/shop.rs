use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, instrument};

use crate::domain::{Order, OrderCreate, OrderId, Product, ProductId};
use crate::error::ShopError;
use crate::order::{OrderAction, OrderActionResult};
use crate::resource_store::ResourceStore;
use super::{Catalog, OrdersReport};

/// Owns the fixed catalog and the live orders for the lifetime of the process.
///
/// Order ids come from a counter owned by the order store: they start at 1,
/// only ever increase, and are never handed out twice.
pub struct Shop {
    catalog: Catalog,
    orders: ResourceStore<Order>,
}

impl Shop {
    pub fn new() -> Self {
        let mut order_id_counter = 0;
        let next_order_id = move || {
            order_id_counter += 1;
            OrderId::from(order_id_counter)
        };

        Self {
            catalog: Catalog::seeded(),
            orders: ResourceStore::new(next_order_id),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn product(&self, id: ProductId) -> Option<Arc<Product>> {
        let product = self.catalog.find(id);
        if product.is_none() {
            debug!(product_id = %id, "Product lookup missed");
        }
        product
    }

    #[instrument(skip(self))]
    pub fn create_order(&mut self) -> OrderId {
        let id = self.orders.create(OrderCreate { created_at: Local::now() });
        info!(order_id = %id, "Order created");
        id
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        let order = self.orders.get(&id);
        if order.is_none() {
            debug!(order_id = %id, "Order lookup missed");
        }
        order
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    #[instrument(skip(self))]
    pub fn add_product(&mut self, order_id: OrderId, product_id: ProductId, quantity: i64) -> Result<OrderActionResult, ShopError> {
        let product = self.product(product_id).ok_or(ShopError::ProductNotFound(product_id))?;
        self.apply(order_id, OrderAction::AddProduct { product, quantity })
    }

    /// Sets the quantity of a product the order already holds; zero or less removes it.
    #[instrument(skip(self))]
    pub fn change_quantity(&mut self, order_id: OrderId, product_id: ProductId, quantity: i64) -> Result<OrderActionResult, ShopError> {
        let order = self.order(order_id).ok_or(ShopError::OrderNotFound(order_id))?;
        if !order.contains(product_id) {
            return Err(ShopError::ProductNotInOrder(product_id));
        }
        self.apply(order_id, OrderAction::UpdateQuantity { product_id, quantity })
    }

    /// Removing a catalog product the order does not hold is a successful no-op.
    #[instrument(skip(self))]
    pub fn remove_product(&mut self, order_id: OrderId, product_id: ProductId) -> Result<OrderActionResult, ShopError> {
        if self.product(product_id).is_none() {
            return Err(ShopError::ProductNotFound(product_id));
        }
        self.apply(order_id, OrderAction::RemoveProduct(product_id))
    }

    #[instrument(skip(self))]
    pub fn delete_order(&mut self, id: OrderId) -> Result<Order, ShopError> {
        self.orders.delete(&id).map_err(|_| ShopError::OrderNotFound(id))
    }

    pub fn report(&self) -> OrdersReport {
        self.orders().collect()
    }

    fn apply(&mut self, order_id: OrderId, action: OrderAction) -> Result<OrderActionResult, ShopError> {
        let result = self
            .orders
            .perform_action(&order_id, action)
            .map_err(|_| ShopError::OrderNotFound(order_id))?;
        info!(order_id = %order_id, product_id = %result.product_id, quantity = ?result.quantity, "Order updated");
        Ok(result)
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_order_ids_start_at_one_and_increase() {
        let mut shop = Shop::new();
        let ids: Vec<OrderId> = (0..3).map(|_| shop.create_order()).collect();
        assert_eq!(ids, [OrderId(1), OrderId(2), OrderId(3)]);
    }

    #[test]
    fn test_deleted_order_id_is_not_reissued() {
        let mut shop = Shop::new();
        shop.create_order();
        let second = shop.create_order();
        shop.delete_order(second).unwrap();

        assert_eq!(shop.create_order(), OrderId(3));
        let live: Vec<OrderId> = shop.orders().map(|o| o.id).collect();
        assert_eq!(live, [OrderId(1), OrderId(3)]);
    }

    #[test]
    fn test_unknown_order_is_not_found() {
        let mut shop = Shop::new();
        shop.create_order();

        assert!(shop.order(OrderId(2)).is_none());
        assert!(shop.order(OrderId(0)).is_none());
    }

    #[test]
    fn test_delete_missing_order_reports_failure_and_changes_nothing() {
        let mut shop = Shop::new();
        shop.create_order();

        assert_eq!(shop.delete_order(OrderId(9)).unwrap_err(), ShopError::OrderNotFound(OrderId(9)));
        assert_eq!(shop.orders().count(), 1);

        let deleted = shop.delete_order(OrderId(1)).unwrap();
        assert_eq!(deleted.id, OrderId(1));
        assert_eq!(shop.orders().count(), 0);
    }

    #[test]
    fn test_mouse_scenario() {
        let mut shop = Shop::new();
        let id = shop.create_order();
        let mouse = ProductId(2);

        shop.add_product(id, mouse, 3).unwrap();
        assert_eq!(shop.order(id).unwrap().total_amount(), Decimal::from(1_500));

        let added = shop.add_product(id, mouse, 2).unwrap();
        assert_eq!(added.quantity, Some(5));
        assert_eq!(shop.order(id).unwrap().total_amount(), Decimal::from(2_500));

        let updated = shop.change_quantity(id, mouse, 0).unwrap();
        assert_eq!(updated.quantity, None);
        let order = shop.order(id).unwrap();
        assert_eq!(order.line_count(), 0);
        assert_eq!(order.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_lookup_failures() {
        let mut shop = Shop::new();
        let id = shop.create_order();

        assert_eq!(shop.add_product(id, ProductId(99), 1), Err(ShopError::ProductNotFound(ProductId(99))));
        assert_eq!(shop.add_product(OrderId(5), ProductId(1), 1), Err(ShopError::OrderNotFound(OrderId(5))));
        assert_eq!(shop.change_quantity(id, ProductId(1), 4), Err(ShopError::ProductNotInOrder(ProductId(1))));
        assert_eq!(shop.remove_product(id, ProductId(0)), Err(ShopError::ProductNotFound(ProductId(0))));
    }

    #[test]
    fn test_removing_absent_catalog_product_succeeds() {
        let mut shop = Shop::new();
        let id = shop.create_order();

        let result = shop.remove_product(id, ProductId(3)).unwrap();
        assert_eq!(result.quantity, None);
    }

    #[test]
    fn test_report_reflects_orders() {
        let mut shop = Shop::new();
        assert_eq!(shop.report(), OrdersReport::Empty);

        let id = shop.create_order();
        shop.add_product(id, ProductId(7), 2).unwrap();
        match shop.report() {
            OrdersReport::Summary { rows, grand_total } => {
                assert_eq!(rows.len(), 1);
                assert_eq!(grand_total, Decimal::from(600));
            }
            OrdersReport::Empty => panic!("expected a summary"),
        }
    }
}
