//! Application services over the inventory core.
//!
//! This crate is the in-process surface an interactive caller drives: it
//! wraps the domain operations with logging and turns their results into
//! timestamped, serializable reports. Console concerns (menus, input
//! parsing, rendering) stay with the caller.

pub mod report;
pub mod service;

pub use report::{InventoryReport, JobReport, LineReport, ReorderReport};
pub use service::InventoryService;
