//! # Event record carried through the bus.
//!
//! An [`Event`] is built inside [`Bus::publish`](crate::Bus::publish), copied by
//! value into the queue, and handed by reference to every matching handler
//! during dispatch. It owns its payload inline: the caller's buffer is copied,
//! never referenced.
//!
//! ## Example
//! ```rust
//! use ringbus::{Event, priority};
//!
//! let ev = Event::new(2, priority::NORMAL, 1_500, &[0x01, 0x68])?;
//!
//! assert_eq!(ev.type_id, 2);
//! assert_eq!(ev.payload(), &[0x01, 0x68]);
//! assert_eq!(ev.data_size(), 2);
//! # Ok::<(), ringbus::BusError>(())
//! ```

use std::fmt;

use crate::error::BusError;

/// Event type identifier. Valid ids are `[0, BusConfig::max_event_types)`.
pub type EventType = u16;

/// Advisory event priority. Stored and handed to handlers, never used to reorder.
pub type Priority = u8;

/// Largest payload an event can carry, in bytes.
pub const MAX_PAYLOAD_BYTES: usize = 32;

/// Conventional priority levels.
pub mod priority {
    use super::Priority;

    pub const LOW: Priority = 0;
    pub const NORMAL: Priority = 1;
    pub const HIGH: Priority = 2;
}

/// One published occurrence.
///
/// - `type_id`: event type
/// - `priority`: advisory metadata
/// - `timestamp`: clock sample taken at publish time (ms)
/// - payload: inline bytes, read through [`Event::payload`] and [`Event::data_size`]
///
/// The payload length is private, so it always stays within [`MAX_PAYLOAD_BYTES`]:
///
/// ```compile_fail
/// let mut ev = ringbus::Event::new(1, ringbus::priority::LOW, 0, &[1, 2])?;
/// ev.data_size = 200;
/// # Ok::<(), ringbus::BusError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Event type id.
    pub type_id: EventType,
    /// Advisory priority.
    pub priority: Priority,
    /// Millisecond timestamp from the bus clock.
    pub timestamp: u32,
    data_size: u8,
    data: [u8; MAX_PAYLOAD_BYTES],
}

impl Event {
    /// Zeroed record used to fill unoccupied queue slots.
    pub(crate) const BLANK: Event = Event {
        type_id: 0,
        priority: priority::LOW,
        timestamp: 0,
        data_size: 0,
        data: [0u8; MAX_PAYLOAD_BYTES],
    };

    /// Builds an event, copying `payload` into inline storage.
    ///
    /// Fails with [`BusError::PayloadTooLarge`] when `payload` is longer than
    /// [`MAX_PAYLOAD_BYTES`]. Type ids are not range-checked here; the bus does
    /// that against its config.
    pub fn new(
        type_id: EventType,
        priority: Priority,
        timestamp: u32,
        payload: &[u8],
    ) -> Result<Self, BusError> {
        if payload.len() > MAX_PAYLOAD_BYTES {
            return Err(BusError::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD_BYTES,
            });
        }
        let mut data = [0u8; MAX_PAYLOAD_BYTES];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            type_id,
            priority,
            timestamp,
            data_size: payload.len() as u8,
            data,
        })
    }

    /// Number of payload bytes in use, at most [`MAX_PAYLOAD_BYTES`].
    #[inline]
    pub fn data_size(&self) -> u8 {
        self.data_size
    }

    /// The payload bytes actually carried (`data_size` long).
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..usize::from(self.data_size)]
    }

    /// True if the event carries no payload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data_size == 0
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("type_id", &self.type_id)
            .field("priority", &self.priority)
            .field("timestamp", &self.timestamp)
            .field("payload", &self.payload())
            .finish()
    }
}
