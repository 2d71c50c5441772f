//! Lifecycle notices published after transitions land.

use common::OrderId;
use emitter::Event;

use crate::snapshot::OrderSnapshot;
use crate::value_objects::TrackingNumber;

/// Notification published on the workflow emitter after a transition lands.
///
/// The set of notice kinds is closed: declared here once, never extended at
/// runtime. Handlers subscribe per [`OrderNoticeKind`] and receive exactly
/// the payload shape declared for that kind.
#[derive(Debug, Clone)]
pub enum OrderNotice {
    /// A pending order was confirmed.
    Confirmed { order_id: OrderId },

    /// A confirmed order was shipped.
    Shipped {
        order_id: OrderId,
        tracking_number: TrackingNumber,
    },

    /// A shipped order reached the customer.
    Delivered { order_id: OrderId },

    /// An order was cancelled.
    Cancelled { order_id: OrderId, reason: String },
}

/// Discriminant used to subscribe to one kind of notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderNoticeKind {
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl Event for OrderNotice {
    type Kind = OrderNoticeKind;

    fn kind(&self) -> OrderNoticeKind {
        match self {
            OrderNotice::Confirmed { .. } => OrderNoticeKind::Confirmed,
            OrderNotice::Shipped { .. } => OrderNoticeKind::Shipped,
            OrderNotice::Delivered { .. } => OrderNoticeKind::Delivered,
            OrderNotice::Cancelled { .. } => OrderNoticeKind::Cancelled,
        }
    }
}

impl OrderNotice {
    /// Builds the notice describing the state a snapshot just entered.
    ///
    /// Returns None for a pending snapshot: pending is the starting state,
    /// not the result of a transition.
    pub fn from_snapshot(snapshot: &OrderSnapshot) -> Option<Self> {
        match snapshot {
            OrderSnapshot::Pending { .. } => None,
            OrderSnapshot::Confirmed { order_id, .. } => Some(OrderNotice::Confirmed {
                order_id: *order_id,
            }),
            OrderSnapshot::Shipped {
                order_id,
                tracking_number,
                ..
            } => Some(OrderNotice::Shipped {
                order_id: *order_id,
                tracking_number: tracking_number.clone(),
            }),
            OrderSnapshot::Delivered { order_id, .. } => Some(OrderNotice::Delivered {
                order_id: *order_id,
            }),
            OrderSnapshot::Cancelled {
                order_id, reason, ..
            } => Some(OrderNotice::Cancelled {
                order_id: *order_id,
                reason: reason.clone(),
            }),
        }
    }

    /// Returns the order this notice is about.
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderNotice::Confirmed { order_id }
            | OrderNotice::Shipped { order_id, .. }
            | OrderNotice::Delivered { order_id }
            | OrderNotice::Cancelled { order_id, .. } => *order_id,
        }
    }
}
