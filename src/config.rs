//! # Bus configuration.
//!
//! Provides [`BusConfig`], the capacity limits and diagnostics toggle for a
//! [`Bus`](crate::Bus). Storage for the queue and both handler tables is sized
//! from this config once, when the bus is built, and never grows afterwards.
//!
//! The payload ceiling is not part of the config: it sizes the inline payload
//! array of every [`Event`](crate::Event) and is fixed at compile time by
//! [`MAX_PAYLOAD_BYTES`](crate::MAX_PAYLOAD_BYTES).
//!
//! ## Clamping
//! - every capacity is clamped to a minimum of 1
//! - `max_event_types` is clamped to `u16::MAX + 1` (the [`EventType`](crate::EventType) range)
//! - `queue_capacity` is clamped to `u16::MAX` so [`Bus::get_count`](crate::Bus::get_count) never truncates

/// Capacity limits and diagnostics for a bus instance.
///
/// ## Field semantics
/// - `max_event_types`: valid type ids are `[0, max_event_types)`
/// - `max_subscribers_per_type`: per-type fan-out capacity
/// - `max_observers`: global fan-out capacity
/// - `queue_capacity`: number of events buffered between drains
/// - `trace`: emit a `tracing::debug!` record for every operation
///
/// ## Notes
/// All fields are public. Components read them through the clamped accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusConfig {
    /// Number of distinct event types.
    pub max_event_types: usize,

    /// Subscriber slots available per event type.
    pub max_subscribers_per_type: usize,

    /// Observer slots (observers match every event type).
    pub max_observers: usize,

    /// Depth of the event ring buffer.
    pub queue_capacity: usize,

    /// Diagnostic tracing of every operation. No behavioral effect.
    pub trace: bool,
}

impl BusConfig {
    /// Number of event types, clamped to `[1, u16::MAX + 1]`.
    #[inline]
    pub fn max_event_types_clamped(&self) -> usize {
        self.max_event_types.clamp(1, usize::from(u16::MAX) + 1)
    }

    /// Subscriber slots per type, clamped to a minimum of 1.
    #[inline]
    pub fn max_subscribers_clamped(&self) -> usize {
        self.max_subscribers_per_type.max(1)
    }

    /// Observer slots, clamped to a minimum of 1.
    #[inline]
    pub fn max_observers_clamped(&self) -> usize {
        self.max_observers.max(1)
    }

    /// Queue depth, clamped to `[1, u16::MAX]`.
    #[inline]
    pub fn queue_capacity_clamped(&self) -> usize {
        self.queue_capacity.clamp(1, usize::from(u16::MAX))
    }
}

impl Default for BusConfig {
    /// Default configuration:
    ///
    /// - `max_event_types = 32`
    /// - `max_subscribers_per_type = 8`
    /// - `max_observers = 4`
    /// - `queue_capacity = 64`
    /// - `trace = false`
    fn default() -> Self {
        Self {
            max_event_types: 32,
            max_subscribers_per_type: 8,
            max_observers: 4,
            queue_capacity: 64,
            trace: false,
        }
    }
}
