use std::fmt;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;

use crate::domain::{Money, Order, OrderId, DATE_FORMAT};

/// One row of the all-orders listing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: OrderId,
    pub created_at: DateTime<Local>,
    pub line_count: usize,
    pub total: Decimal,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            created_at: order.created_at,
            line_count: order.line_count(),
            total: order.total_amount(),
        }
    }
}

/// Listing of every order plus the grand total.
///
/// `Empty` is its own state so callers never print a zero grand total table.
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersReport {
    Empty,
    Summary {
        rows: Vec<OrderSummary>,
        grand_total: Decimal,
    },
}

impl<'a> FromIterator<&'a Order> for OrdersReport {
    fn from_iter<I: IntoIterator<Item = &'a Order>>(orders: I) -> Self {
        let rows: Vec<OrderSummary> = orders.into_iter().map(OrderSummary::from).collect();
        if rows.is_empty() {
            return Self::Empty;
        }
        let grand_total = rows.iter().map(|row| row.total).sum();
        Self::Summary { rows, grand_total }
    }
}

impl fmt::Display for OrdersReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, grand_total) = match self {
            Self::Empty => return writeln!(f, "\n No orders yet!"),
            Self::Summary { rows, grand_total } => (rows, grand_total),
        };

        writeln!(f, "\n")?;
        writeln!(f, "     ALL ORDERS")?;
        for row in rows {
            writeln!(f, "\n Order {} | {}", row.id, row.created_at.format(DATE_FORMAT))?;
            writeln!(f, "     Items: {} | Total: {}", row.line_count, Money(row.total))?;
        }
        writeln!(f, "\n")?;
        writeln!(f, "    GRAND TOTAL OF ALL ORDERS: {}", Money(*grand_total))
    }
}
