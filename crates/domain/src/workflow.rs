//! Order workflow service tying transitions to notifications.

use common::OrderId;
use emitter::Emitter;

use crate::error::TransitionError;
use crate::event::TransitionEvent;
use crate::machine;
use crate::notice::OrderNotice;
use crate::snapshot::OrderSnapshot;
use crate::status::OrderStatus;
use crate::value_objects::TrackingNumber;

/// Drives a single order through its lifecycle.
///
/// Keeps the current snapshot and the history of applied events, and
/// publishes an [`OrderNotice`] on the embedded emitter for every landed
/// transition. A rejected transition leaves snapshot and history untouched.
pub struct OrderWorkflow {
    snapshot: OrderSnapshot,
    history: Vec<TransitionEvent>,
    emitter: Emitter<OrderNotice>,
}

impl OrderWorkflow {
    /// Creates a workflow for a newly placed order.
    pub fn new(order_id: OrderId) -> Self {
        Self {
            snapshot: OrderSnapshot::pending(order_id),
            history: Vec::new(),
            emitter: Emitter::new(),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> &OrderSnapshot {
        &self.snapshot
    }

    /// Returns the current lifecycle state.
    pub fn status(&self) -> OrderStatus {
        self.snapshot.status()
    }

    /// Returns the events applied so far, oldest first.
    pub fn history(&self) -> &[TransitionEvent] {
        &self.history
    }

    /// Returns the emitter notices are published on, for subscribing.
    pub fn emitter_mut(&mut self) -> &mut Emitter<OrderNotice> {
        &mut self.emitter
    }

    /// Applies a transition event.
    ///
    /// On success the snapshot is replaced, the event recorded, and the
    /// matching notice published; handler failures are isolated and logged
    /// by the emitter. On failure nothing changes.
    #[tracing::instrument(skip(self), fields(order_id = %self.snapshot.order_id()))]
    pub fn apply(&mut self, event: TransitionEvent) -> Result<&OrderSnapshot, TransitionError> {
        let next = machine::transition(&self.snapshot, &event)?;
        let notice = OrderNotice::from_snapshot(&next);

        self.snapshot = next;
        self.history.push(event);

        metrics::counter!("order_transitions_applied").increment(1);
        tracing::info!(status = %self.snapshot.status(), "order transition applied");

        if let Some(notice) = notice {
            self.emitter.emit(&notice);
        }

        Ok(&self.snapshot)
    }

    /// Confirms a pending order.
    pub fn confirm(&mut self) -> Result<&OrderSnapshot, TransitionError> {
        self.apply(TransitionEvent::confirm())
    }

    /// Ships a confirmed order with the given tracking number.
    pub fn ship(
        &mut self,
        tracking_number: impl Into<TrackingNumber>,
    ) -> Result<&OrderSnapshot, TransitionError> {
        self.apply(TransitionEvent::ship(tracking_number))
    }

    /// Marks a shipped order as delivered.
    pub fn deliver(&mut self) -> Result<&OrderSnapshot, TransitionError> {
        self.apply(TransitionEvent::deliver())
    }

    /// Cancels an order that has not shipped.
    pub fn cancel(
        &mut self,
        reason: impl Into<String>,
        cancelled_by: Option<String>,
    ) -> Result<&OrderSnapshot, TransitionError> {
        self.apply(TransitionEvent::cancel(reason, cancelled_by))
    }
}
