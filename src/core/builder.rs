use crate::clock::{Clock, SystemClock};
use crate::config::BusConfig;

use super::bus::Bus;

/// Builder for constructing a [`Bus`] with a custom clock.
pub struct BusBuilder {
    cfg: BusConfig,
    clock: Option<Box<dyn Clock>>,
}

impl BusBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: BusConfig) -> Self {
        Self { cfg, clock: None }
    }

    /// Sets the timestamp source (defaults to [`SystemClock`]).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Builds an uninitialized bus; call [`Bus::init`] before use.
    ///
    /// Queue and registry storage is allocated here, once.
    pub fn build(self) -> Bus {
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new()) as Box<dyn Clock>);
        Bus::from_parts(self.cfg, clock)
    }
}
