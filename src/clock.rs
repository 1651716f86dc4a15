//! Timestamp source for published events.
//!
//! The bus treats the clock as opaque: it samples [`Clock::now_ms`] once per
//! publish and stores the value on the [`Event`](crate::Event). Nothing in the
//! bus relies on the values being monotonic.

use std::time::Instant;

/// Source of event timestamps in milliseconds.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

/// Milliseconds elapsed since the clock was created.
///
/// Wraps around after `u32::MAX` ms (about 49 days).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose zero is "now".
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the documented wrap-around.
        self.origin.elapsed().as_millis() as u32
    }
}
