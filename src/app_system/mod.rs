//! Shop orchestration: the fixed catalog, the order store, reporting, and
//! tracing setup.

pub mod catalog;
pub mod report;
pub mod shop;
pub mod telemetry;

pub use catalog::*;
pub use report::*;
pub use shop::*;
pub use telemetry::*;
