//! Handler registry and synchronous dispatch.

use std::collections::HashMap;

use crate::error::{BoxError, HandlerFailure};
use crate::event::Event;

/// Identifies one handler registration.
///
/// Closures have no identity of their own, so [`Emitter::on`] and
/// [`Emitter::once`] hand back a token and [`Emitter::off`] takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

impl std::fmt::Display for HandlerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Handler<E> = Box<dyn FnMut(&E) -> Result<(), BoxError>>;

struct Subscription<E> {
    id: HandlerId,
    once: bool,
    handler: Handler<E>,
}

/// Outcome of one [`Emitter::emit`] call.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Number of handlers invoked, including those that failed.
    pub invoked: usize,

    /// Failures collected during dispatch, in invocation order.
    pub failures: Vec<HandlerFailure>,
}

impl EmitReport {
    /// Returns true if every invoked handler succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Synchronous fan-out of events to registered handlers.
///
/// Handlers are keyed by [`Event::Kind`] and invoked in registration order.
/// A failing handler does not stop dispatch: the failure is logged and
/// reported, and the remaining handlers still run.
///
/// The registry is exclusively owned — all mutation goes through `&mut self`,
/// which also means a handler cannot re-enter the emitter it is being
/// dispatched from.
pub struct Emitter<E: Event> {
    subscriptions: HashMap<E::Kind, Vec<Subscription<E>>>,
    next_id: u64,
}

impl<E: Event> Emitter<E> {
    /// Creates an emitter with no registrations.
    pub fn new() -> Self {
        Self {
            subscriptions: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers `handler` for every future event of `kind`.
    ///
    /// Multiple handlers may be registered for the same kind; they are
    /// invoked in registration order. Registering the first handler for a
    /// kind creates its registration set.
    pub fn on<F>(&mut self, kind: E::Kind, handler: F) -> HandlerId
    where
        F: FnMut(&E) -> Result<(), BoxError> + 'static,
    {
        self.register(kind, Box::new(handler), false)
    }

    /// Like [`Emitter::on`], but the handler unregisters itself after its
    /// first invocation, whether or not it succeeded.
    pub fn once<F>(&mut self, kind: E::Kind, handler: F) -> HandlerId
    where
        F: FnMut(&E) -> Result<(), BoxError> + 'static,
    {
        self.register(kind, Box::new(handler), true)
    }

    /// Removes a previously registered handler.
    ///
    /// Returns false (not an error) if the handler is not registered for
    /// `kind` — including when it already fired as a `once` handler.
    pub fn off(&mut self, kind: E::Kind, id: HandlerId) -> bool {
        let Some(subs) = self.subscriptions.get_mut(&kind) else {
            return false;
        };
        let before = subs.len();
        subs.retain(|sub| sub.id != id);
        let removed = subs.len() < before;
        if subs.is_empty() {
            self.subscriptions.remove(&kind);
        }
        removed
    }

    /// Synchronously invokes every currently registered handler for the
    /// event's kind, in registration order.
    ///
    /// Emitting a kind with no registrations is a successful no-op.
    pub fn emit(&mut self, event: &E) -> EmitReport {
        let kind = event.kind();
        let mut report = EmitReport::default();

        let Some(subs) = self.subscriptions.get_mut(&kind) else {
            return report;
        };

        for sub in subs.iter_mut() {
            report.invoked += 1;
            if let Err(source) = (sub.handler)(event) {
                tracing::warn!(kind = ?kind, handler = %sub.id, error = %source, "event handler failed");
                report.failures.push(HandlerFailure {
                    handler: sub.id,
                    source,
                });
            }
        }

        subs.retain(|sub| !sub.once);
        if subs.is_empty() {
            self.subscriptions.remove(&kind);
        }

        metrics::counter!("emitter_handlers_invoked").increment(report.invoked as u64);
        report
    }

    /// Returns the number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.subscriptions.get(&kind).map_or(0, Vec::len)
    }

    /// Removes every registration.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    fn register(&mut self, kind: E::Kind, handler: Handler<E>, once: bool) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.subscriptions
            .entry(kind)
            .or_default()
            .push(Subscription { id, once, handler });
        id
    }
}

impl<E: Event> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}
