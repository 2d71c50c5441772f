//! Transition table application.
//!
//! [`transition`] never mutates its input: a disallowed move fails before
//! anything is constructed, and an allowed move returns a fresh snapshot.

use crate::error::TransitionError;
use crate::event::TransitionEvent;
use crate::snapshot::OrderSnapshot;
use crate::status::OrderStatus;

/// Returns whether the transition table permits moving from `from` to `to`.
///
/// Pure table lookup, no side effects.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    from.can_transition_to(to)
}

/// Applies a transition event to a snapshot, producing the next snapshot.
///
/// The target variant is populated from the event; `order_id` (and the
/// tracking number, for delivery) carry over from the current snapshot.
/// Fails with [`TransitionError::InvalidTransition`] if the table disallows
/// moving from the snapshot's state to the event's target state.
pub fn transition(
    current: &OrderSnapshot,
    event: &TransitionEvent,
) -> Result<OrderSnapshot, TransitionError> {
    let from = current.status();
    let to = event.target_status();

    if !can_transition(from, to) {
        return Err(TransitionError::InvalidTransition { from, to });
    }

    let next = match (current, event) {
        (OrderSnapshot::Pending { order_id }, TransitionEvent::Confirm(data)) => {
            OrderSnapshot::Confirmed {
                order_id: *order_id,
                confirmed_at: data.confirmed_at,
            }
        }
        (OrderSnapshot::Confirmed { order_id, .. }, TransitionEvent::Ship(data)) => {
            OrderSnapshot::Shipped {
                order_id: *order_id,
                tracking_number: data.tracking_number.clone(),
                shipped_at: data.shipped_at,
            }
        }
        (
            OrderSnapshot::Shipped {
                order_id,
                tracking_number,
                ..
            },
            TransitionEvent::Deliver(data),
        ) => OrderSnapshot::Delivered {
            order_id: *order_id,
            tracking_number: tracking_number.clone(),
            delivered_at: data.delivered_at,
        },
        (_, TransitionEvent::Cancel(data)) => OrderSnapshot::Cancelled {
            order_id: current.order_id(),
            reason: data.reason.clone(),
            cancelled_by: data.cancelled_by.clone(),
            cancelled_at: data.cancelled_at,
        },
        // Every pair the table permits has an arm above; anything else was
        // already rejected by the table check.
        (other, ev) => unreachable!(
            "transition table permitted {} -> {} but no arm constructs it",
            other.status(),
            ev.target_status()
        ),
    };

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ConfirmData, ShipData};
    use crate::value_objects::TrackingNumber;
    use chrono::Utc;
    use common::OrderId;

    /// Builds a snapshot in the given state by walking the happy path.
    fn snapshot_in(status: OrderStatus, order_id: OrderId) -> OrderSnapshot {
        let mut snapshot = OrderSnapshot::pending(order_id);
        let path = match status {
            OrderStatus::Pending => vec![],
            OrderStatus::Confirmed => vec![TransitionEvent::confirm()],
            OrderStatus::Shipped => vec![
                TransitionEvent::confirm(),
                TransitionEvent::ship("1Z-999-AA1"),
            ],
            OrderStatus::Delivered => vec![
                TransitionEvent::confirm(),
                TransitionEvent::ship("1Z-999-AA1"),
                TransitionEvent::deliver(),
            ],
            OrderStatus::Cancelled => vec![TransitionEvent::cancel("changed mind", None)],
        };
        for event in &path {
            snapshot = transition(&snapshot, event).unwrap();
        }
        snapshot
    }

    fn event_targeting(to: OrderStatus) -> Option<TransitionEvent> {
        match to {
            OrderStatus::Pending => None,
            OrderStatus::Confirmed => Some(TransitionEvent::confirm()),
            OrderStatus::Shipped => Some(TransitionEvent::ship("1Z-999-AA1")),
            OrderStatus::Delivered => Some(TransitionEvent::deliver()),
            OrderStatus::Cancelled => Some(TransitionEvent::cancel("changed mind", None)),
        }
    }

    #[test]
    fn test_confirm_pending() {
        let order_id = OrderId::new();
        let stamp = Utc::now();
        let event = TransitionEvent::Confirm(ConfirmData { confirmed_at: stamp });

        let next = transition(&OrderSnapshot::pending(order_id), &event).unwrap();

        assert_eq!(
            next,
            OrderSnapshot::Confirmed {
                order_id,
                confirmed_at: stamp,
            }
        );
    }

    #[test]
    fn test_ship_confirmed_populates_tracking_from_event() {
        let order_id = OrderId::new();
        let confirmed = snapshot_in(OrderStatus::Confirmed, order_id);
        let stamp = Utc::now();
        let event = TransitionEvent::Ship(ShipData {
            tracking_number: TrackingNumber::from("1Z-999-AA1"),
            shipped_at: stamp,
        });

        let next = transition(&confirmed, &event).unwrap();

        assert_eq!(
            next,
            OrderSnapshot::Shipped {
                order_id,
                tracking_number: TrackingNumber::from("1Z-999-AA1"),
                shipped_at: stamp,
            }
        );
    }

    #[test]
    fn test_deliver_carries_tracking_forward() {
        let order_id = OrderId::new();
        let shipped = snapshot_in(OrderStatus::Shipped, order_id);

        let next = transition(&shipped, &TransitionEvent::deliver()).unwrap();

        assert_eq!(next.status(), OrderStatus::Delivered);
        assert_eq!(next.tracking_number().unwrap().as_str(), "1Z-999-AA1");
        assert_eq!(next.order_id(), order_id);
    }

    #[test]
    fn test_cancel_records_reason() {
        let order_id = OrderId::new();

        for from in [OrderStatus::Pending, OrderStatus::Confirmed] {
            let snapshot = snapshot_in(from, order_id);
            let event = TransitionEvent::cancel("out of stock", Some("system".to_string()));

            let next = transition(&snapshot, &event).unwrap();

            assert_eq!(next.status(), OrderStatus::Cancelled);
            if let OrderSnapshot::Cancelled {
                reason,
                cancelled_by,
                ..
            } = next
            {
                assert_eq!(reason, "out of stock");
                assert_eq!(cancelled_by, Some("system".to_string()));
            } else {
                panic!("Expected Cancelled snapshot");
            }
        }
    }

    #[test]
    fn test_allowed_pairs_produce_declared_target() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let Some(event) = event_targeting(to) else {
                    continue;
                };
                if !can_transition(from, to) {
                    continue;
                }

                let snapshot = snapshot_in(from, OrderId::new());
                let next = transition(&snapshot, &event).unwrap();

                assert_eq!(next.status(), to, "wrong target for {from} -> {to}");
                assert_eq!(next.order_id(), snapshot.order_id());
            }
        }
    }

    #[test]
    fn test_disallowed_pairs_fail_and_leave_snapshot_unchanged() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let Some(event) = event_targeting(to) else {
                    continue;
                };
                if can_transition(from, to) {
                    continue;
                }

                let snapshot = snapshot_in(from, OrderId::new());
                let before = snapshot.clone();

                let err = transition(&snapshot, &event).unwrap_err();

                let TransitionError::InvalidTransition {
                    from: err_from,
                    to: err_to,
                } = err;
                assert_eq!(err_from, from);
                assert_eq!(err_to, to);
                assert_eq!(snapshot, before);
            }
        }
    }

    #[test]
    fn test_terminal_states_reject_every_event() {
        for status in [OrderStatus::Delivered, OrderStatus::Cancelled] {
            let snapshot = snapshot_in(status, OrderId::new());
            for to in OrderStatus::ALL {
                if let Some(event) = event_targeting(to) {
                    assert!(transition(&snapshot, &event).is_err());
                }
            }
        }
    }

    #[test]
    fn test_order_processing_scenario() {
        let order_id = OrderId::new();
        let pending = OrderSnapshot::pending(order_id);

        let confirmed = transition(&pending, &TransitionEvent::confirm()).unwrap();
        assert_eq!(confirmed.status(), OrderStatus::Confirmed);
        assert_eq!(confirmed.order_id(), order_id);

        let shipped = transition(&confirmed, &TransitionEvent::ship("T1")).unwrap();
        assert_eq!(shipped.status(), OrderStatus::Shipped);
        assert_eq!(shipped.order_id(), order_id);
        assert_eq!(shipped.tracking_number().unwrap().as_str(), "T1");

        let err = transition(&shipped, &TransitionEvent::confirm()).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::InvalidTransition {
                from: OrderStatus::Shipped,
                to: OrderStatus::Confirmed,
            }
        ));
    }
}
