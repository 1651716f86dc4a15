//! # Bus controller: publish, drain and dispatch.
//!
//! [`Bus`] owns one [`EventQueue`] and one [`Registry`] and is the only way to
//! mutate them. It starts uninitialized; every operation except
//! [`Bus::clear_queue`], [`Bus::get_count`] and [`Bus::process`] is rejected with
//! [`BusError::NotInitialized`] until [`Bus::init`] runs.
//!
//! ## Flow
//! ```text
//! publish(type, prio, payload)            process()
//!   ├─ NotInitialized?                      loop {
//!   ├─ InvalidType?                           ├─ pop() ── empty ─► return drained
//!   ├─ PayloadTooLarge?                       ├─ snapshot = registry.snapshot(type)
//!   ├─ Event { timestamp = clock.now_ms() }   ├─ for h in snapshot: h.on_event(&ev)
//!   └─ queue.push ── full ─► QueueFull        └─ drained += 1
//!                                           }
//! ```
//!
//! ## Rules
//! - **FIFO**: records are dispatched in publish order; priority never reorders.
//! - **Deferred dispatch**: `publish` only enqueues; handlers run inside `process`.
//! - **Fan-out order**: for one record, all subscribers of its type (slot order)
//!   run before any observer (slot order).
//! - **Snapshot per record**: the handler list is taken before the first handler
//!   runs, so registrations changed by a handler apply from the next record on.
//! - **Run to empty**: `process` drains until the queue is empty, including
//!   records published by handlers during the drain.
//!
//! ## Re-entrancy
//! No internal borrow is held while a handler runs. Handlers may call any bus
//! method. Calling [`Bus::process`] from a handler recurses; bounding that
//! recursion is the caller's responsibility. A handler that captures a [`Bus`]
//! forms a reference cycle until it is unregistered; capture a [`WeakBus`] instead
//! when that matters.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::clock::Clock;
use crate::config::BusConfig;
use crate::error::BusError;
use crate::events::{Event, EventQueue, EventType, Priority};
use crate::subscribers::{HandlerRef, Registry};

use super::builder::BusBuilder;

/// Emits a `tracing::debug!` record when the bus has tracing enabled.
macro_rules! bus_trace {
    ($inner:expr, $($arg:tt)+) => {
        if $inner.cfg.trace {
            tracing::debug!(target: "ringbus", $($arg)+);
        }
    };
}

pub(super) struct BusInner {
    cfg: BusConfig,
    clock: Box<dyn Clock>,
    initialized: Cell<bool>,
    queue: RefCell<EventQueue>,
    registry: RefCell<Registry>,
    scratch: RefCell<Vec<HandlerRef>>,
}

/// Single-threaded event bus.
///
/// Cheap to clone: clones share one queue and one registry. The handle is
/// `!Send` and `!Sync`; wrap it in your own synchronization if it must cross
/// threads.
#[derive(Clone)]
pub struct Bus {
    inner: Rc<BusInner>,
}

/// Non-owning handle to a [`Bus`], for handlers that publish back into it.
#[derive(Clone)]
pub struct WeakBus {
    inner: Weak<BusInner>,
}

impl WeakBus {
    /// Returns the bus if it is still alive.
    pub fn upgrade(&self) -> Option<Bus> {
        self.inner.upgrade().map(|inner| Bus { inner })
    }
}

impl Bus {
    /// Creates an uninitialized bus with the default [`SystemClock`](crate::SystemClock).
    pub fn new(cfg: BusConfig) -> Self {
        BusBuilder::new(cfg).build()
    }

    /// Returns a builder for customizing the clock.
    pub fn builder(cfg: BusConfig) -> BusBuilder {
        BusBuilder::new(cfg)
    }

    pub(super) fn from_parts(cfg: BusConfig, clock: Box<dyn Clock>) -> Self {
        let queue = EventQueue::new(cfg.queue_capacity_clamped());
        let registry = Registry::new(&cfg);
        let scratch = Vec::with_capacity(registry.fan_out_capacity());
        Self {
            inner: Rc::new(BusInner {
                cfg,
                clock,
                initialized: Cell::new(false),
                queue: RefCell::new(queue),
                registry: RefCell::new(registry),
                scratch: RefCell::new(scratch),
            }),
        }
    }

    /// Creates a non-owning handle.
    pub fn downgrade(&self) -> WeakBus {
        WeakBus {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Configuration this bus was built with.
    pub fn config(&self) -> &BusConfig {
        &self.inner.cfg
    }

    /// True once [`Bus::init`] has run.
    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.get()
    }

    /// Resets the queue and both handler tables and marks the bus initialized.
    ///
    /// Calling it again is a hard reset: queued events and all registrations
    /// are dropped.
    pub fn init(&self) -> Result<(), BusError> {
        self.inner.queue.borrow_mut().clear();
        self.inner.registry.borrow_mut().clear();
        self.inner.initialized.set(true);
        bus_trace!(self.inner, "event bus initialized");
        Ok(())
    }

    /// Registers `handler` for events of `type_id`.
    ///
    /// # Errors
    /// `NotInitialized`, `InvalidType`, `SubscribersFull`.
    pub fn subscribe(&self, type_id: EventType, handler: HandlerRef) -> Result<(), BusError> {
        self.ensure_initialized()?;
        let name = self.trace_name(&handler);
        self.inner
            .registry
            .borrow_mut()
            .subscribe(type_id, handler)?;
        bus_trace!(self.inner, type_id, handler = %name, "subscribed");
        Ok(())
    }

    /// Removes the first registration of `handler` for `type_id`.
    ///
    /// # Errors
    /// `NotInitialized`, `InvalidType`, `NotFound`.
    pub fn unsubscribe(&self, type_id: EventType, handler: &HandlerRef) -> Result<(), BusError> {
        self.ensure_initialized()?;
        self.inner
            .registry
            .borrow_mut()
            .unsubscribe(type_id, handler)?;
        bus_trace!(self.inner, type_id, handler = handler.name(), "unsubscribed");
        Ok(())
    }

    /// Registers `handler` for every event type.
    ///
    /// # Errors
    /// `NotInitialized`, `ObserversFull`.
    pub fn register_observer(&self, handler: HandlerRef) -> Result<(), BusError> {
        self.ensure_initialized()?;
        let name = self.trace_name(&handler);
        self.inner.registry.borrow_mut().register_observer(handler)?;
        bus_trace!(self.inner, handler = %name, "observer registered");
        Ok(())
    }

    /// Removes the first observer registration of `handler`.
    ///
    /// Matching is by handle identity, the same as [`Bus::unsubscribe`]: a handle
    /// carries its own context, so two observers built from one closure with
    /// different captured state are removed independently.
    ///
    /// # Errors
    /// `NotInitialized`, `NotFound`.
    pub fn unregister_observer(&self, handler: &HandlerRef) -> Result<(), BusError> {
        self.ensure_initialized()?;
        self.inner
            .registry
            .borrow_mut()
            .unregister_observer(handler)?;
        bus_trace!(self.inner, handler = handler.name(), "observer unregistered");
        Ok(())
    }

    /// Enqueues an event; dispatch happens in [`Bus::process`].
    ///
    /// `None` and an empty slice both publish an event without payload.
    ///
    /// # Errors
    /// `NotInitialized`, `InvalidType`, `PayloadTooLarge`, `QueueFull`. On
    /// `QueueFull` the event is dropped; nothing is buffered or retried.
    pub fn publish(
        &self,
        type_id: EventType,
        priority: Priority,
        payload: Option<&[u8]>,
    ) -> Result<(), BusError> {
        self.ensure_initialized()?;

        let max = self.inner.cfg.max_event_types_clamped();
        if usize::from(type_id) >= max {
            return Err(BusError::InvalidType { type_id, max });
        }
        let payload = payload.unwrap_or_default();
        let event = Event::new(type_id, priority, self.inner.clock.now_ms(), payload)?;
        if let Err(err) = self.inner.queue.borrow_mut().push(event) {
            bus_trace!(self.inner, type_id, "event dropped (queue full)");
            return Err(err);
        }
        bus_trace!(self.inner, type_id, priority, size = payload.len(), "event published");
        Ok(())
    }

    /// Drains the queue, dispatching each record to its handlers.
    ///
    /// Returns the number of records dequeued (not handler calls). Returns 0
    /// when the bus is uninitialized or the queue is empty.
    pub fn process(&self) -> u32 {
        if !self.is_initialized() {
            return 0;
        }

        let mut drained: u32 = 0;
        loop {
            let next = self.inner.queue.borrow_mut().pop();
            let Ok(event) = next else { break };
            self.dispatch(&event);
            drained = drained.saturating_add(1);
        }

        if drained > 0 {
            bus_trace!(self.inner, drained, "processed events");
        }
        drained
    }

    /// Drops every pending event without dispatching it. Registrations are kept.
    pub fn clear_queue(&self) -> Result<(), BusError> {
        self.inner.queue.borrow_mut().clear();
        bus_trace!(self.inner, "event queue cleared");
        Ok(())
    }

    /// Number of events currently queued.
    pub fn get_count(&self) -> u16 {
        // queue capacity is clamped to u16::MAX
        self.inner.queue.borrow().len() as u16
    }

    /// Active subscribers for `type_id` (0 if uninitialized or out of range).
    pub fn subscriber_count(&self, type_id: EventType) -> usize {
        self.inner.registry.borrow().subscriber_count(type_id)
    }

    /// Active observers (0 if uninitialized).
    pub fn observer_count(&self) -> usize {
        self.inner.registry.borrow().observer_count()
    }

    /// Runs every handler for `event` from a per-record snapshot.
    ///
    /// The snapshot lives in a buffer preallocated for the widest fan-out. A
    /// nested `process` from inside a handler finds the buffer taken and uses a
    /// fresh one for its own records.
    fn dispatch(&self, event: &Event) {
        let mut handlers = std::mem::take(&mut *self.inner.scratch.borrow_mut());
        self.inner
            .registry
            .borrow()
            .snapshot_into(event.type_id, &mut handlers);
        for handler in &handlers {
            handler.on_event(event);
        }
        handlers.clear();
        let mut scratch = self.inner.scratch.borrow_mut();
        if handlers.capacity() >= scratch.capacity() {
            *scratch = handlers;
        }
    }

    #[inline]
    fn ensure_initialized(&self) -> Result<(), BusError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(BusError::NotInitialized)
        }
    }

    fn trace_name(&self, handler: &HandlerRef) -> String {
        if self.inner.cfg.trace {
            handler.name().to_owned()
        } else {
            String::new()
        }
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("initialized", &self.is_initialized())
            .field("queued", &self.get_count())
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::events::{MAX_PAYLOAD_BYTES, priority};
    use crate::subscribers::HandlerFn;
    use crate::testing::{Call, ManualClock, Recorder};

    fn bus_with(cfg: BusConfig) -> Bus {
        let bus = Bus::new(cfg);
        bus.init().unwrap();
        bus
    }

    fn bus() -> Bus {
        bus_with(BusConfig::default())
    }

    #[test]
    fn test_operations_before_init_are_rejected() {
        let bus = Bus::new(BusConfig::default());
        let rec = Recorder::default();
        let h = rec.handler("a");

        assert!(!bus.is_initialized());
        assert_eq!(bus.publish(1, priority::LOW, None), Err(BusError::NotInitialized));
        assert_eq!(bus.subscribe(1, h.clone()), Err(BusError::NotInitialized));
        assert_eq!(bus.unsubscribe(1, &h), Err(BusError::NotInitialized));
        assert_eq!(bus.register_observer(h.clone()), Err(BusError::NotInitialized));
        assert_eq!(bus.unregister_observer(&h), Err(BusError::NotInitialized));
        assert_eq!(bus.process(), 0);
        assert_eq!(bus.get_count(), 0);
        assert_eq!(bus.clear_queue(), Ok(()));
    }

    #[test]
    fn test_scenario_subscriber_and_observer() {
        let bus = bus();
        let rec = Recorder::default();
        bus.subscribe(2, rec.handler("cbA")).unwrap();
        bus.register_observer(rec.handler("cbG")).unwrap();

        bus.publish(2, priority::HIGH, None).unwrap();
        assert_eq!(bus.get_count(), 1);
        assert!(rec.calls().is_empty(), "dispatch must wait for process()");

        assert_eq!(bus.process(), 1);
        assert_eq!(rec.trail(), [("cbA", 2), ("cbG", 2)]);
        assert_eq!(bus.get_count(), 0);
    }

    #[test]
    fn test_fifo_regardless_of_priority() {
        let bus = bus();
        let rec = Recorder::default();
        bus.register_observer(rec.handler("g")).unwrap();

        let prios = [priority::LOW, priority::HIGH, priority::NORMAL, priority::HIGH, priority::LOW];
        for (t, p) in prios.into_iter().enumerate() {
            bus.publish(t as u16, p, None).unwrap();
        }
        assert_eq!(bus.process(), 5);
        let order: Vec<u16> = rec.calls().iter().map(|c| c.type_id).collect();
        assert_eq!(order, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_queue_full_then_drain_frees_space() {
        let bus = bus_with(BusConfig {
            queue_capacity: 4,
            ..BusConfig::default()
        });
        for _ in 0..4 {
            bus.publish(1, priority::NORMAL, None).unwrap();
        }
        assert_eq!(bus.publish(1, priority::NORMAL, None), Err(BusError::QueueFull));
        assert_eq!(bus.get_count(), 4, "rejected publish must not change the queue");

        assert_eq!(bus.process(), 4);
        bus.publish(1, priority::NORMAL, None).unwrap();
        assert_eq!(bus.get_count(), 1);
    }

    #[test]
    fn test_default_capacity_is_sixty_four() {
        let bus = bus();
        for i in 0..64 {
            assert_eq!(bus.publish(0, priority::LOW, None), Ok(()), "publish #{i}");
        }
        assert_eq!(bus.publish(0, priority::LOW, None), Err(BusError::QueueFull));
    }

    #[test]
    fn test_fan_out_completeness() {
        let bus = bus();
        let rec = Recorder::default();
        for name in ["s1", "s2", "s3"] {
            bus.subscribe(7, rec.handler(name)).unwrap();
        }
        bus.subscribe(8, rec.handler("other")).unwrap();
        for name in ["g1", "g2"] {
            bus.register_observer(rec.handler(name)).unwrap();
        }

        bus.publish(7, priority::NORMAL, None).unwrap();
        assert_eq!(bus.process(), 1);

        let names: Vec<&str> = rec.calls().iter().map(|c| c.handler).collect();
        assert_eq!(names, ["s1", "s2", "s3", "g1", "g2"]);
        assert_eq!(rec.count("other"), 0);
    }

    #[test]
    fn test_freed_slot_changes_dispatch_order() {
        let bus = bus();
        let rec = Recorder::default();
        let a = rec.handler("a");
        bus.subscribe(1, a.clone()).unwrap();
        bus.subscribe(1, rec.handler("b")).unwrap();
        bus.unsubscribe(1, &a).unwrap();
        bus.subscribe(1, rec.handler("c")).unwrap();

        bus.publish(1, priority::NORMAL, None).unwrap();
        bus.process();
        // "c" reuses slot 0 ahead of "b"
        assert_eq!(rec.trail(), [("c", 1), ("b", 1)]);
    }

    #[test]
    fn test_unsubscribe_idempotence() {
        let bus = bus();
        let rec = Recorder::default();
        let a = rec.handler("a");
        bus.subscribe(3, a.clone()).unwrap();

        assert_eq!(bus.unsubscribe(3, &rec.handler("a")), Err(BusError::NotFound));
        assert_eq!(bus.subscriber_count(3), 1);
        assert_eq!(bus.unsubscribe(3, &a), Ok(()));
        assert_eq!(bus.unsubscribe(3, &a), Err(BusError::NotFound));
        assert_eq!(bus.subscriber_count(3), 0);
    }

    #[test]
    fn test_same_callback_under_two_contexts() {
        let bus = bus();
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let button = |label: &'static str| {
            let pressed = Rc::clone(&pressed);
            HandlerFn::rc("button", move |_ev: &Event| pressed.borrow_mut().push(label))
        };
        let start = button("start");
        let stop = button("stop");
        bus.subscribe(1, start.clone()).unwrap();
        bus.subscribe(1, stop.clone()).unwrap();

        bus.publish(1, priority::HIGH, None).unwrap();
        bus.process();
        assert_eq!(*pressed.borrow(), ["start", "stop"]);

        bus.unsubscribe(1, &start).unwrap();
        bus.publish(1, priority::HIGH, None).unwrap();
        bus.process();
        assert_eq!(*pressed.borrow(), ["start", "stop", "stop"]);
    }

    #[test]
    fn test_payload_round_trip() {
        let bus = bus();
        let rec = Recorder::default();
        bus.subscribe(2, rec.handler("sensor")).unwrap();

        bus.publish(2, priority::NORMAL, Some(&[0x01, 0x68])).unwrap();
        bus.process();
        assert_eq!(
            rec.calls(),
            [Call {
                handler: "sensor",
                type_id: 2,
                payload: vec![0x01, 0x68]
            }]
        );
    }

    #[test]
    fn test_payload_boundary() {
        let bus = bus();
        let max = [0x5A; MAX_PAYLOAD_BYTES];
        let over = [0x5A; MAX_PAYLOAD_BYTES + 1];
        assert_eq!(bus.publish(0, priority::LOW, Some(&max)), Ok(()));
        assert_eq!(
            bus.publish(0, priority::LOW, Some(&over)),
            Err(BusError::PayloadTooLarge {
                len: MAX_PAYLOAD_BYTES + 1,
                max: MAX_PAYLOAD_BYTES
            })
        );
        assert_eq!(bus.get_count(), 1);
    }

    #[test]
    fn test_check_order_type_before_payload() {
        let bus = bus();
        let over = [0u8; MAX_PAYLOAD_BYTES + 1];
        assert_eq!(
            bus.publish(32, priority::LOW, Some(&over)),
            Err(BusError::InvalidType { type_id: 32, max: 32 })
        );
        let err = bus.subscribe(32, Recorder::default().handler("x")).unwrap_err();
        assert_eq!(err.as_label(), "bus_invalid_type");
    }

    #[test]
    fn test_event_carries_priority_and_timestamp() {
        let clock = ManualClock::default();
        let bus = Bus::builder(BusConfig::default())
            .with_clock(clock.clone())
            .build();
        bus.init().unwrap();

        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        bus.register_observer(HandlerFn::rc("g", move |ev: &Event| {
            sink.set(Some((ev.priority, ev.timestamp)));
        }))
        .unwrap();

        clock.set(1_234);
        bus.publish(4, priority::HIGH, None).unwrap();
        clock.set(9_999);
        bus.process();
        assert_eq!(seen.get(), Some((priority::HIGH, 1_234)));
    }

    #[test]
    fn test_init_is_a_hard_reset() {
        let bus = bus();
        let rec = Recorder::default();
        bus.subscribe(1, rec.handler("a")).unwrap();
        bus.register_observer(rec.handler("g")).unwrap();
        bus.publish(1, priority::NORMAL, None).unwrap();

        bus.init().unwrap();
        assert_eq!(bus.get_count(), 0);
        assert_eq!(bus.process(), 0);

        bus.publish(1, priority::NORMAL, None).unwrap();
        assert_eq!(bus.process(), 1);
        assert!(rec.calls().is_empty(), "old registrations must not fire");
        assert_eq!(bus.observer_count(), 0);
    }

    #[test]
    fn test_clear_queue_keeps_registrations() {
        let bus = bus();
        let rec = Recorder::default();
        bus.subscribe(1, rec.handler("a")).unwrap();
        bus.publish(1, priority::NORMAL, None).unwrap();
        bus.publish(1, priority::NORMAL, None).unwrap();

        bus.clear_queue().unwrap();
        assert_eq!(bus.get_count(), 0);
        assert_eq!(bus.process(), 0);
        assert!(rec.calls().is_empty());

        bus.publish(1, priority::NORMAL, None).unwrap();
        assert_eq!(bus.process(), 1);
        assert_eq!(rec.count("a"), 1);
    }

    #[test]
    fn test_observer_table_full_and_unregister() {
        let bus = bus_with(BusConfig {
            max_observers: 1,
            ..BusConfig::default()
        });
        let rec = Recorder::default();
        let g = rec.handler("g");
        bus.register_observer(g.clone()).unwrap();
        assert_eq!(bus.register_observer(rec.handler("h")), Err(BusError::ObserversFull));

        assert_eq!(bus.unregister_observer(&g), Ok(()));
        assert_eq!(bus.unregister_observer(&g), Err(BusError::NotFound));
        bus.register_observer(rec.handler("h")).unwrap();
    }

    #[test]
    fn test_publish_from_handler_is_drained_in_same_process() {
        let bus = bus();
        let rec = Recorder::default();
        let weak = bus.downgrade();
        bus.subscribe(
            1,
            HandlerFn::rc("relay", move |ev: &Event| {
                if let Some(bus) = weak.upgrade() {
                    bus.publish(2, ev.priority, Some(ev.payload())).unwrap();
                }
            }),
        )
        .unwrap();
        bus.subscribe(2, rec.handler("tail")).unwrap();

        bus.publish(1, priority::NORMAL, Some(&[7])).unwrap();
        assert_eq!(bus.process(), 2);
        assert_eq!(rec.calls()[0].payload, [7]);
        assert_eq!(bus.get_count(), 0);
    }

    #[test]
    fn test_unregister_observer_matches_handle_not_callback() {
        let bus = bus();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let watcher = |label: &'static str| {
            let seen = Rc::clone(&seen);
            HandlerFn::rc("watcher", move |_ev: &Event| seen.borrow_mut().push(label))
        };
        let left = watcher("left");
        let right = watcher("right");
        bus.register_observer(left.clone()).unwrap();
        bus.register_observer(right.clone()).unwrap();

        bus.unregister_observer(&right).unwrap();
        bus.publish(5, priority::NORMAL, None).unwrap();
        bus.process();
        assert_eq!(*seen.borrow(), ["left"]);
        assert_eq!(bus.unregister_observer(&right), Err(BusError::NotFound));
        assert_eq!(bus.observer_count(), 1);
    }

    #[test]
    fn test_nested_process_keeps_outer_fan_out() {
        let bus = bus();
        let rec = Recorder::default();
        let weak = bus.downgrade();
        let inner_drained = Rc::new(Cell::new(0));
        let sink = Rc::clone(&inner_drained);
        bus.subscribe(
            1,
            HandlerFn::rc("relay", move |_ev: &Event| {
                let bus = weak.upgrade().unwrap();
                bus.publish(2, priority::LOW, None).unwrap();
                sink.set(bus.process());
            }),
        )
        .unwrap();
        bus.subscribe(1, rec.handler("after_relay")).unwrap();
        bus.subscribe(2, rec.handler("tail")).unwrap();
        bus.register_observer(rec.handler("g")).unwrap();

        bus.publish(1, priority::NORMAL, None).unwrap();
        assert_eq!(bus.process(), 1);
        assert_eq!(inner_drained.get(), 1);
        assert_eq!(
            rec.trail(),
            [("tail", 2), ("g", 2), ("after_relay", 1), ("g", 1)]
        );
    }

    #[test]
    fn test_registry_changes_apply_from_next_record() {
        let bus = bus();
        let rec = Recorder::default();
        let late = rec.handler("late");
        let victim = rec.handler("victim");

        let weak = bus.downgrade();
        let (late_c, victim_c) = (late.clone(), victim.clone());
        let armed = Cell::new(true);
        bus.subscribe(
            1,
            HandlerFn::rc("editor", move |_ev: &Event| {
                if armed.replace(false) {
                    let bus = weak.upgrade().unwrap();
                    bus.unsubscribe(1, &victim_c).unwrap();
                    bus.subscribe(1, late_c.clone()).unwrap();
                }
            }),
        )
        .unwrap();
        bus.subscribe(1, victim).unwrap();

        bus.publish(1, priority::NORMAL, None).unwrap();
        bus.publish(1, priority::NORMAL, None).unwrap();
        assert_eq!(bus.process(), 2);

        // record 1: snapshot still holds victim, not late
        // record 2: late took the freed slot, victim is gone
        assert_eq!(rec.trail(), [("victim", 1), ("late", 1)]);
    }

    #[test]
    fn test_trace_toggle_does_not_change_behavior() {
        let run = |trace: bool| {
            let bus = bus_with(BusConfig {
                queue_capacity: 2,
                trace,
                ..BusConfig::default()
            });
            let rec = Recorder::default();
            bus.subscribe(1, rec.handler("a")).unwrap();
            let results = [
                bus.publish(1, priority::LOW, Some(b"x")),
                bus.publish(1, priority::LOW, None),
                bus.publish(1, priority::LOW, None),
            ];
            (results, bus.process(), rec.calls())
        };
        assert_eq!(run(false), run(true));
    }

    #[test]
    fn test_clones_share_state() {
        let bus = bus();
        let other = bus.clone();
        other.publish(1, priority::LOW, None).unwrap();
        assert_eq!(bus.get_count(), 1);
        assert_eq!(bus.process(), 1);
        assert_eq!(other.get_count(), 0);
    }
}
