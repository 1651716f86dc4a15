//! # Event handlers and the registry that holds them.
//!
//! This module provides the [`Subscribe`] trait, the [`HandlerFn`] closure adapter,
//! and the fixed-capacity [`Registry`] the [`Bus`](crate::Bus) dispatches from.
//!
//! ## Architecture
//! ```text
//! Bus::process ── pop(Event) ──► Registry::snapshot(type_id)
//!                                      │
//!                     ┌────────────────┴────────────────┐
//!                     ▼                                 ▼
//!         subscribers[type_id] (slot order)    observers (slot order)
//!                     │                                 │
//!                     └──► Subscribe::on_event(&Event) ◄┘
//! ```
//!
//! ## Handler roles
//! - **Subscribers** - registered against one event type
//! - **Observers** - registered against all event types, run after subscribers

mod registry;
mod slots;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use registry::Registry;
pub use subscribe::{HandlerFn, HandlerRef, Subscribe};

#[cfg(feature = "logging")]
pub use log::LogWriter;
