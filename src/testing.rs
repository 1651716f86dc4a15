//! Shared helpers for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::Clock;
use crate::events::{Event, EventType};
use crate::subscribers::{HandlerFn, HandlerRef};

/// Clock that returns whatever the test sets.
#[derive(Clone, Default)]
pub(crate) struct ManualClock(pub Rc<Cell<u32>>);

impl ManualClock {
    pub(crate) fn set(&self, ms: u32) {
        self.0.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

/// One recorded handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub handler: &'static str,
    pub type_id: EventType,
    pub payload: Vec<u8>,
}

/// Shared call log; every handler built from it appends to the same list.
#[derive(Clone, Default)]
pub(crate) struct Recorder(Rc<RefCell<Vec<Call>>>);

impl Recorder {
    pub(crate) fn handler(&self, name: &'static str) -> HandlerRef {
        let log = Rc::clone(&self.0);
        HandlerFn::rc(name, move |ev: &Event| {
            log.borrow_mut().push(Call {
                handler: name,
                type_id: ev.type_id,
                payload: ev.payload().to_vec(),
            });
        })
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    /// `(handler, type_id)` pairs in invocation order.
    pub(crate) fn trail(&self) -> Vec<(&'static str, EventType)> {
        self.0
            .borrow()
            .iter()
            .map(|c| (c.handler, c.type_id))
            .collect()
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.0.borrow().iter().filter(|c| c.handler == name).count()
    }
}
