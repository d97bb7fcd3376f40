//! HTTP route handlers, one module per resource.

pub mod amount;
pub mod chain;
pub mod consensus;
pub mod mine;
pub mod transactions;
