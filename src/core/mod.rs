//! Bus controller.
//!
//! The only public API from this module is [`Bus`] (plus its builder and weak
//! handle), which ties the event queue and the handler registry together.
//!
//! Internal modules:
//! - [`bus`]: publish / process / dispatch and registration front-end;
//! - [`builder`]: config + clock wiring.

mod builder;
mod bus;

pub use builder::BusBuilder;
pub use bus::{Bus, WeakBus};
