//! Domain error types.

use thiserror::Error;

use crate::status::OrderStatus;

/// Errors that can occur when applying transition events.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The transition table does not permit this move.
    #[error("Invalid transition: cannot move from {from} to {to}")]
    InvalidTransition {
        /// State the order was in.
        from: OrderStatus,

        /// State the event would have moved it to.
        to: OrderStatus,
    },
}
