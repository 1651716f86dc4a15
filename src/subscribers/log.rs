//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] prints every event it sees to stdout in a human-readable format.
//! Register it with [`Bus::register_observer`](crate::Bus::register_observer) to
//! watch all traffic.
//!
//! ## Output format
//! ```text
//! [event] type=1 priority=2 ts=0ms size=0
//! [event] type=2 priority=1 ts=0ms size=2 data=01 68
//! ```
//!
//! ## Example
//! ```no_run
//! # use std::rc::Rc;
//! # use ringbus::{Bus, BusConfig, LogWriter};
//! let bus = Bus::new(BusConfig::default());
//! bus.init()?;
//! bus.register_observer(Rc::new(LogWriter))?;
//! # Ok::<(), ringbus::BusError>(())
//! ```

use crate::events::Event;
use crate::subscribers::Subscribe;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Not intended for production use;
/// the bus's own `trace` option emits structured `tracing` records instead.
pub struct LogWriter;

impl LogWriter {
    /// Formats one event as a single line (without trailing newline).
    pub fn format(ev: &Event) -> String {
        let mut line = format!(
            "[event] type={} priority={} ts={}ms size={}",
            ev.type_id, ev.priority, ev.timestamp, ev.data_size()
        );
        if !ev.is_empty() {
            let hex: Vec<String> = ev.payload().iter().map(|b| format!("{b:02X}")).collect();
            line.push_str(&format!(" data={}", hex.join(" ")));
        }
        line
    }
}

impl Subscribe for LogWriter {
    fn on_event(&self, ev: &Event) {
        println!("{}", Self::format(ev));
    }

    fn name(&self) -> &str {
        "log_writer"
    }
}
