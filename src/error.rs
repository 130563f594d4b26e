use thiserror::Error;

use crate::domain::{OrderId, ProductId};

/// Errors raised by the generic [`ResourceStore`](crate::resource_store::ResourceStore).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),
    #[error("Product {0} is not part of the order")]
    ProductNotInOrder(ProductId),
}

/// Malformed text typed at a prompt.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Not a number: {0:?}")]
    NotANumber(String),
    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),
}

/// The only failures that escape a menu handler.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input stream closed")]
    InputClosed,
}
