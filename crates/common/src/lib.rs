//! Shared identifier types used across the workspace.

pub mod types;

pub use types::OrderId;
