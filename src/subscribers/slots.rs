//! Fixed-capacity slot table of handler registrations.
//!
//! A slot is either free (`None`) or holds an active handle. Claiming scans for
//! the first free slot (first-fit) and releasing scans for the first slot whose
//! handle matches. Both are O(capacity); tables are small and never grow, and a
//! slot is only freed by an explicit release or [`SlotTable::clear`].

use super::subscribe::{HandlerRef, same_handler};

pub(crate) struct SlotTable {
    slots: Box<[Option<HandlerRef>]>,
}

impl SlotTable {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity.max(1)).map(|_| None).collect(),
        }
    }

    /// Stores `handler` in the first free slot; returns its index, or `None` if full.
    pub(crate) fn claim(&mut self, handler: HandlerRef) -> Option<usize> {
        let idx = self.slots.iter().position(Option::is_none)?;
        self.slots[idx] = Some(handler);
        Some(idx)
    }

    /// Frees the first slot holding `handler`; returns its index, or `None` if absent.
    pub(crate) fn release(&mut self, handler: &HandlerRef) -> Option<usize> {
        let idx = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|h| same_handler(h, handler)))?;
        self.slots[idx] = None;
        Some(idx)
    }

    /// Active handles in slot order.
    pub(crate) fn active(&self) -> impl Iterator<Item = &HandlerRef> {
        self.slots.iter().flatten()
    }

    pub(crate) fn active_count(&self) -> usize {
        self.active().count()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}
