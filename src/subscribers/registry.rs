//! # Handler registry: per-type subscriber tables and the observer table.
//!
//! ## Architecture
//! ```text
//! subscribers[type_id] ─► SlotTable (max_subscribers_per_type slots)
//! observers            ─► SlotTable (max_observers slots, matches every type)
//! ```
//!
//! ## Rules
//! - Claiming is first-fit; a freed slot is reused by the next registration.
//! - Removal deactivates the first slot whose handle matches, nothing else.
//! - [`Registry::snapshot_into`] lists subscribers for one type (slot order) followed by
//!   all observers (slot order). Dispatch works from that list, so registry edits
//!   made by a running handler only affect later records.
//! - The list is written into a caller-owned buffer sized by
//!   [`Registry::fan_out_capacity`], so steady-state dispatch does not allocate.

use crate::config::BusConfig;
use crate::error::BusError;
use crate::events::EventType;

use super::slots::SlotTable;
use super::subscribe::HandlerRef;

/// Fixed-capacity tables of subscribers (per event type) and observers.
pub struct Registry {
    subscribers: Box<[SlotTable]>,
    observers: SlotTable,
}

impl Registry {
    /// Allocates empty tables sized from `cfg` (clamped).
    pub fn new(cfg: &BusConfig) -> Self {
        let per_type = cfg.max_subscribers_clamped();
        Self {
            subscribers: (0..cfg.max_event_types_clamped())
                .map(|_| SlotTable::new(per_type))
                .collect(),
            observers: SlotTable::new(cfg.max_observers_clamped()),
        }
    }

    /// Drops every subscriber and observer.
    pub fn clear(&mut self) {
        self.subscribers.iter_mut().for_each(SlotTable::clear);
        self.observers.clear();
    }

    /// Number of valid event types.
    #[inline]
    pub fn max_event_types(&self) -> usize {
        self.subscribers.len()
    }

    /// Observer slot capacity.
    #[inline]
    pub fn observer_capacity(&self) -> usize {
        self.observers.capacity()
    }

    /// Registers `handler` for events of `type_id`.
    pub fn subscribe(&mut self, type_id: EventType, handler: HandlerRef) -> Result<(), BusError> {
        self.table_mut(type_id)?
            .claim(handler)
            .map(drop)
            .ok_or(BusError::SubscribersFull { type_id })
    }

    /// Removes the first registration of `handler` for `type_id`.
    pub fn unsubscribe(&mut self, type_id: EventType, handler: &HandlerRef) -> Result<(), BusError> {
        self.table_mut(type_id)?
            .release(handler)
            .map(drop)
            .ok_or(BusError::NotFound)
    }

    /// Registers `handler` for every event type.
    pub fn register_observer(&mut self, handler: HandlerRef) -> Result<(), BusError> {
        self.observers
            .claim(handler)
            .map(drop)
            .ok_or(BusError::ObserversFull)
    }

    /// Removes the first observer registration of `handler`.
    pub fn unregister_observer(&mut self, handler: &HandlerRef) -> Result<(), BusError> {
        self.observers
            .release(handler)
            .map(drop)
            .ok_or(BusError::NotFound)
    }

    /// Active subscribers for `type_id`, or 0 for an invalid type.
    pub fn subscriber_count(&self, type_id: EventType) -> usize {
        self.subscribers
            .get(usize::from(type_id))
            .map_or(0, SlotTable::active_count)
    }

    /// Active observers.
    pub fn observer_count(&self) -> usize {
        self.observers.active_count()
    }

    /// Most handlers a single event can reach: one full subscriber table plus all observers.
    pub fn fan_out_capacity(&self) -> usize {
        self.subscribers.first().map_or(0, SlotTable::capacity) + self.observers.capacity()
    }

    /// Replaces the contents of `out` with the handlers that should see an event
    /// of `type_id`: subscribers, then observers.
    ///
    /// Out-of-range types yield only the observers. `out` keeps its capacity, so a
    /// buffer created with [`Registry::fan_out_capacity`] never reallocates.
    pub fn snapshot_into(&self, type_id: EventType, out: &mut Vec<HandlerRef>) {
        out.clear();
        let subs = self.subscribers.get(usize::from(type_id));
        out.extend(subs.into_iter().flat_map(SlotTable::active).cloned());
        out.extend(self.observers.active().cloned());
    }

    /// Same as [`Registry::snapshot_into`], returning a fresh list.
    pub fn snapshot(&self, type_id: EventType) -> Vec<HandlerRef> {
        let mut out = Vec::with_capacity(self.fan_out_capacity());
        self.snapshot_into(type_id, &mut out);
        out
    }

    fn table_mut(&mut self, type_id: EventType) -> Result<&mut SlotTable, BusError> {
        let max = self.subscribers.len();
        self.subscribers
            .get_mut(usize::from(type_id))
            .ok_or(BusError::InvalidType { type_id, max })
    }
}
