//! # Core handler trait
//!
//! `Subscribe` is the extension point for plugging event handlers into a
//! [`Bus`](crate::Bus). The same trait serves both roles: a handler registered
//! with [`Bus::subscribe`](crate::Bus::subscribe) is a *subscriber* (one event
//! type), and one registered with [`Bus::register_observer`](crate::Bus::register_observer)
//! is an *observer* (every event type).
//!
//! ## Contract
//! - Handlers run synchronously inside [`Bus::process`](crate::Bus::process), on
//!   the caller's thread, one after another.
//! - Whatever a handler needs besides the event (a label, a counter, a bus
//!   handle) is captured by the handler value itself.
//! - A registration is identified by its handle: the same closure wrapped twice
//!   gives two handles that are registered and removed independently.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use ringbus::{Event, HandlerRef, Subscribe};
//!
//! struct Counter(Cell<u32>);
//!
//! impl Subscribe for Counter {
//!     fn on_event(&self, _event: &Event) {
//!         self.0.set(self.0.get() + 1);
//!     }
//!     fn name(&self) -> &str { "counter" }
//! }
//!
//! let handler: HandlerRef = Rc::new(Counter(Cell::new(0)));
//! assert_eq!(handler.name(), "counter");
//! ```

use std::borrow::Cow;
use std::rc::Rc;

use crate::events::Event;

/// Contract for event handlers.
pub trait Subscribe: 'static {
    /// Handle a single dispatched event.
    fn on_event(&self, event: &Event);

    /// Human-readable name (for diagnostics).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a handler; its identity is the registration identity.
pub type HandlerRef = Rc<dyn Subscribe>;

/// True if both handles refer to the same registration.
#[inline]
pub(crate) fn same_handler(a: &HandlerRef, b: &HandlerRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Closure-backed handler.
///
/// ## Example
/// ```rust
/// use ringbus::{Event, HandlerFn, HandlerRef};
///
/// let start_button = "start";
/// let h: HandlerRef = HandlerFn::rc("button", move |ev: &Event| {
///     println!("{start_button} pressed at {}ms", ev.timestamp);
/// });
/// assert_eq!(h.name(), "button");
/// ```
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F>
where
    F: Fn(&Event) + 'static,
{
    /// Wraps a closure as a handler.
    ///
    /// Prefer [`HandlerFn::rc`] when you immediately need a [`HandlerRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Wraps a closure and returns it as a shared handle.
    pub fn rc(name: impl Into<Cow<'static, str>>, f: F) -> HandlerRef {
        Rc::new(Self::new(name, f))
    }
}

impl<F> Subscribe for HandlerFn<F>
where
    F: Fn(&Event) + 'static,
{
    fn on_event(&self, event: &Event) {
        (self.f)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
