//! Order-specific behaviour: the line-item actions and the store integration.

mod actions;
pub mod entity;

pub use actions::*;
