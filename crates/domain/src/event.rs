//! Order transition events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::OrderStatus;
use crate::value_objects::TrackingNumber;

/// Events requesting a move of an order to a new lifecycle state.
///
/// Each event carries only the data needed to perform that one transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TransitionEvent {
    /// Confirm a pending order.
    Confirm(ConfirmData),

    /// Ship a confirmed order.
    Ship(ShipData),

    /// Mark a shipped order as delivered.
    Deliver(DeliverData),

    /// Cancel an order that has not shipped.
    Cancel(CancelData),
}

impl TransitionEvent {
    /// Returns the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            TransitionEvent::Confirm(_) => "Confirm",
            TransitionEvent::Ship(_) => "Ship",
            TransitionEvent::Deliver(_) => "Deliver",
            TransitionEvent::Cancel(_) => "Cancel",
        }
    }

    /// Returns the state this event moves an order into.
    pub fn target_status(&self) -> OrderStatus {
        match self {
            TransitionEvent::Confirm(_) => OrderStatus::Confirmed,
            TransitionEvent::Ship(_) => OrderStatus::Shipped,
            TransitionEvent::Deliver(_) => OrderStatus::Delivered,
            TransitionEvent::Cancel(_) => OrderStatus::Cancelled,
        }
    }
}

/// Data for Confirm events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmData {
    /// When the order was confirmed.
    pub confirmed_at: DateTime<Utc>,
}

/// Data for Ship events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipData {
    /// Carrier tracking number for the shipment.
    pub tracking_number: TrackingNumber,

    /// When the order was shipped.
    pub shipped_at: DateTime<Utc>,
}

/// Data for Deliver events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverData {
    /// When the order was delivered.
    pub delivered_at: DateTime<Utc>,
}

/// Data for Cancel events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelData {
    /// Reason for cancellation.
    pub reason: String,

    /// Who cancelled the order.
    pub cancelled_by: Option<String>,

    /// When the order was cancelled.
    pub cancelled_at: DateTime<Utc>,
}

// Convenience constructors for events
impl TransitionEvent {
    /// Creates a Confirm event stamped now.
    pub fn confirm() -> Self {
        TransitionEvent::Confirm(ConfirmData {
            confirmed_at: Utc::now(),
        })
    }

    /// Creates a Ship event stamped now.
    pub fn ship(tracking_number: impl Into<TrackingNumber>) -> Self {
        TransitionEvent::Ship(ShipData {
            tracking_number: tracking_number.into(),
            shipped_at: Utc::now(),
        })
    }

    /// Creates a Deliver event stamped now.
    pub fn deliver() -> Self {
        TransitionEvent::Deliver(DeliverData {
            delivered_at: Utc::now(),
        })
    }

    /// Creates a Cancel event stamped now.
    pub fn cancel(reason: impl Into<String>, cancelled_by: Option<String>) -> Self {
        TransitionEvent::Cancel(CancelData {
            reason: reason.into(),
            cancelled_by,
            cancelled_at: Utc::now(),
        })
    }
}
