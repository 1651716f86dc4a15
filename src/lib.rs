//! # ringbus
//!
//! **ringbus** is a single-threaded, in-memory event bus.
//!
//! Producers publish typed events with a small inline payload; consumers register
//! per-type handlers (*subscribers*) and type-agnostic handlers (*observers*);
//! [`Bus::process`] drains the queue and dispatches every event synchronously.
//! All storage is fixed-capacity and allocated once, when the bus is built.
//!
//! ## Architecture
//! ```text
//!   producer                                         consumer
//!      │ publish(type, priority, payload)               │ process()
//!      ▼                                                ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Bus                                                             │
//! │  ┌───────────────────────────────┐   ┌────────────────────────┐  │
//! │  │ EventQueue (ring buffer)      │──►│ Registry               │  │
//! │  │ capacity: queue_capacity      │pop│ subscribers[type_id]   │  │
//! │  │ push rejects when full        │   │ observers              │  │
//! │  └───────────────────────────────┘   └───────────┬────────────┘  │
//! └──────────────────────────────────────────────────┼───────────────┘
//!                                                    ▼
//!                        sub1 ─► sub2 ─► ... ─► obs1 ─► obs2 ─► ...
//!                        (all subscribers of the type, then all observers)
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits              |
//! |-------------------|----------------------------------------------------------|---------------------------------|
//! | **Bus**           | Init, publish, drain/dispatch, clear, count.             | [`Bus`], [`BusBuilder`]         |
//! | **Handlers**      | Per-type subscribers and global observers.               | [`Subscribe`], [`HandlerFn`]    |
//! | **Events**        | Fixed-size record with inline payload.                   | [`Event`], [`EventQueue`]       |
//! | **Errors**        | Typed errors for every rejected operation.               | [`BusError`]                    |
//! | **Configuration** | Capacities and the trace toggle.                         | [`BusConfig`]                   |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use ringbus::{Bus, BusConfig, Event, HandlerFn, priority};
//!
//! const SENSOR_DATA: u16 = 2;
//!
//! let bus = Bus::new(BusConfig::default());
//! bus.init()?;
//!
//! let seen = Rc::new(Cell::new(0u32));
//! let counter = Rc::clone(&seen);
//! bus.subscribe(SENSOR_DATA, HandlerFn::rc("sensor", move |ev: &Event| {
//!     assert_eq!(ev.payload(), &[0x01, 0x68]);
//!     counter.set(counter.get() + 1);
//! }))?;
//!
//! bus.publish(SENSOR_DATA, priority::NORMAL, Some(&[0x01, 0x68]))?;
//! assert_eq!(bus.get_count(), 1);
//!
//! assert_eq!(bus.process(), 1);
//! assert_eq!(seen.get(), 1);
//! assert_eq!(bus.get_count(), 0);
//! # Ok::<(), ringbus::BusError>(())
//! ```
mod clock;
mod config;
mod core;
mod error;
mod events;
mod subscribers;

#[cfg(test)]
mod testing;

// ---- Public re-exports ----

pub use clock::{Clock, SystemClock};
pub use config::BusConfig;
pub use crate::core::{Bus, BusBuilder, WeakBus};
pub use error::BusError;
pub use events::{Event, EventQueue, EventType, MAX_PAYLOAD_BYTES, Priority, priority};
pub use subscribers::{HandlerFn, HandlerRef, Registry, Subscribe};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
