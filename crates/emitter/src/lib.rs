//! Synchronous typed event dispatch.
//!
//! This crate provides:
//! - [`Event`] trait binding a closed set of event kinds to payload shapes
//! - [`Emitter`] for in-process, registration-ordered fan-out
//! - [`EmitReport`] and [`HandlerFailure`] for per-handler failure isolation

pub mod dispatch;
pub mod error;
pub mod event;

pub use dispatch::{EmitReport, Emitter, HandlerId};
pub use error::{BoxError, HandlerFailure};
pub use event::Event;
