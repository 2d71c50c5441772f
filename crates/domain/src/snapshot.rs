//! Order state snapshots.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::status::OrderStatus;
use crate::value_objects::TrackingNumber;

/// A snapshot of an order at one point in its lifecycle.
///
/// Each variant carries only the fields valid for that state — a value
/// cannot mix fields from two states. Snapshots are immutable; applying a
/// transition produces a new snapshot (see [`crate::machine::transition`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OrderSnapshot {
    /// Order has been placed, awaiting confirmation.
    Pending { order_id: OrderId },

    /// Order has been confirmed, awaiting shipment.
    Confirmed {
        order_id: OrderId,
        /// When the order was confirmed.
        confirmed_at: DateTime<Utc>,
    },

    /// Order has left the warehouse.
    Shipped {
        order_id: OrderId,
        /// Carrier tracking number for the shipment.
        tracking_number: TrackingNumber,
        /// When the order was shipped.
        shipped_at: DateTime<Utc>,
    },

    /// Order reached the customer (terminal state).
    Delivered {
        order_id: OrderId,
        tracking_number: TrackingNumber,
        /// When the order was delivered.
        delivered_at: DateTime<Utc>,
    },

    /// Order was cancelled (terminal state).
    Cancelled {
        order_id: OrderId,
        /// Reason for cancellation.
        reason: String,
        /// Who cancelled the order.
        cancelled_by: Option<String>,
        /// When the order was cancelled.
        cancelled_at: DateTime<Utc>,
    },
}

impl OrderSnapshot {
    /// Creates the initial snapshot for a newly placed order.
    pub fn pending(order_id: OrderId) -> Self {
        OrderSnapshot::Pending { order_id }
    }

    /// Returns the lifecycle state this snapshot is in.
    pub fn status(&self) -> OrderStatus {
        match self {
            OrderSnapshot::Pending { .. } => OrderStatus::Pending,
            OrderSnapshot::Confirmed { .. } => OrderStatus::Confirmed,
            OrderSnapshot::Shipped { .. } => OrderStatus::Shipped,
            OrderSnapshot::Delivered { .. } => OrderStatus::Delivered,
            OrderSnapshot::Cancelled { .. } => OrderStatus::Cancelled,
        }
    }

    /// Returns the order this snapshot belongs to.
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderSnapshot::Pending { order_id }
            | OrderSnapshot::Confirmed { order_id, .. }
            | OrderSnapshot::Shipped { order_id, .. }
            | OrderSnapshot::Delivered { order_id, .. }
            | OrderSnapshot::Cancelled { order_id, .. } => *order_id,
        }
    }

    /// Returns the tracking number, if the order has shipped.
    pub fn tracking_number(&self) -> Option<&TrackingNumber> {
        match self {
            OrderSnapshot::Shipped {
                tracking_number, ..
            }
            | OrderSnapshot::Delivered {
                tracking_number, ..
            } => Some(tracking_number),
            _ => None,
        }
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}
