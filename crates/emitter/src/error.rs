//! Emitter error types.

use thiserror::Error;

use crate::dispatch::HandlerId;

/// Boxed error returned by an event handler.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A handler returned an error during dispatch.
///
/// Dispatch does not stop at a failed handler: the failure is logged,
/// collected into the [`EmitReport`](crate::EmitReport), and the remaining
/// handlers still run.
#[derive(Debug, Error)]
#[error("Handler {handler} failed: {source}")]
pub struct HandlerFailure {
    /// The registration that failed.
    pub handler: HandlerId,

    /// The error the handler returned.
    #[source]
    pub source: BoxError,
}
