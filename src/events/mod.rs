//! Events: the record type and the bounded queue that buffers them.
//!
//! ## Contents
//! - [`Event`] fixed-size record with inline payload
//! - [`EventQueue`] fixed-capacity FIFO ring buffer
//!
//! See `core/bus.rs` for how publish and process drive the queue.

mod event;
mod queue;

pub use event::{Event, EventType, MAX_PAYLOAD_BYTES, Priority, priority};
pub use queue::EventQueue;
