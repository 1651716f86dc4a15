//! # Bounded FIFO ring buffer of events.
//!
//! [`EventQueue`] stores events by value in a fixed array allocated once at
//! construction.
//!
//! ## Rules
//! - **Strict FIFO**: events leave in the order they entered; priority is ignored.
//! - **Reject on full**: `push` on a full queue fails with [`BusError::QueueFull`]
//!   and changes nothing. There is no overwrite of old entries and no growth.
//! - **Whole records**: a record enters whole or not at all.
//!
//! ## Layout
//! ```text
//!   head            tail
//!    ▼               ▼
//! [ e3 | e4 | e5 | __ | __ | e1 | e2 ]   (wrapped: live slots run head..tail mod cap)
//! ```
//! Invariant: `len <= capacity`, `head < capacity`, `tail < capacity`,
//! and `tail == (head + len) % capacity`.

use crate::error::BusError;

use super::event::Event;

/// Fixed-capacity circular buffer of [`Event`] records.
pub struct EventQueue {
    slots: Box<[Event]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl EventQueue {
    /// Creates an empty queue. The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![Event::BLANK; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Resets to empty, dropping every pending record.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Appends a copy of `event` at the tail.
    pub fn push(&mut self, event: Event) -> Result<(), BusError> {
        if self.is_full() {
            return Err(BusError::QueueFull);
        }
        self.slots[self.tail] = event;
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the record at the head.
    pub fn pop(&mut self) -> Result<Event, BusError> {
        if self.is_empty() {
            return Err(BusError::QueueEmpty);
        }
        let event = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Ok(event)
    }

    /// True if no records are queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the next push would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Number of queued records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
