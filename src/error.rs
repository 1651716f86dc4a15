//! Error types returned by the bus and its building blocks.
//!
//! [`BusError`] is the single taxonomy shared by [`Bus`](crate::Bus),
//! [`EventQueue`](crate::EventQueue) and [`Registry`](crate::Registry).
//! Every failure is returned to the immediate caller: nothing is logged and
//! swallowed, nothing is retried internally, and a failed operation never
//! leaves state partially mutated.

use thiserror::Error;

use crate::events::EventType;

/// # Errors produced by the event bus.
///
/// A failed [`Bus::publish`](crate::Bus::publish) means the event is lost;
/// callers that need durability implement their own retry policy.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The bus has not been initialized with [`Bus::init`](crate::Bus::init).
    #[error("event bus not initialized")]
    NotInitialized,

    /// Event type id is outside `[0, max)`.
    #[error("invalid event type {type_id} (max {max})")]
    InvalidType {
        /// The rejected type id.
        type_id: EventType,
        /// Configured number of event types.
        max: usize,
    },

    /// No free subscriber slot remains for this event type.
    #[error("subscriber table full for event type {type_id}")]
    SubscribersFull {
        /// Type id whose table is exhausted.
        type_id: EventType,
    },

    /// No free observer slot remains.
    #[error("observer table full")]
    ObserversFull,

    /// No active registration matches the given handler.
    #[error("registration not found")]
    NotFound,

    /// Payload exceeds [`MAX_PAYLOAD_BYTES`](crate::MAX_PAYLOAD_BYTES).
    #[error("payload of {len} bytes exceeds limit of {max}")]
    PayloadTooLarge {
        /// Length of the rejected payload.
        len: usize,
        /// Payload ceiling.
        max: usize,
    },

    /// The queue is at capacity; the event was dropped.
    #[error("event queue full")]
    QueueFull,

    /// The queue holds no events.
    #[error("event queue empty")]
    QueueEmpty,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use ringbus::BusError;
    ///
    /// assert_eq!(BusError::QueueFull.as_label(), "bus_queue_full");
    /// assert_eq!(BusError::InvalidType { type_id: 40, max: 32 }.as_label(), "bus_invalid_type");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::NotInitialized => "bus_not_initialized",
            BusError::InvalidType { .. } => "bus_invalid_type",
            BusError::SubscribersFull { .. } => "bus_subscribers_full",
            BusError::ObserversFull => "bus_observers_full",
            BusError::NotFound => "bus_not_found",
            BusError::PayloadTooLarge { .. } => "bus_payload_too_large",
            BusError::QueueFull => "bus_queue_full",
            BusError::QueueEmpty => "bus_queue_empty",
        }
    }
}
