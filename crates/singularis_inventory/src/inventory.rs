//! Inventory store
//!
//! A fixed-length row of [`InventorySlot`]s plus a selection cursor. Every
//! state change is pushed to the attached presenter and then broadcast as a
//! slot index on the store's notifier, before the mutating call returns.
//!
//! Nothing here fails loudly. Invalid indices and null items are rejected
//! with `false` or ignored; the caller decides whether to tell the player.
//!
//! A store with zero slots is permanently empty: it has no selection, and
//! every index-taking operation is rejected.

use std::fmt;

use singularis_event::{Notifier, SubscriberId};

use crate::item::ItemRef;
use crate::presentation::InventoryPresenter;
use crate::slot::InventorySlot;

/// Notifier carrying the index of the slot whose display should refresh
pub type SlotNotifier = Notifier<usize>;

/// Player inventory
pub struct Inventory {
    /// Fixed at construction
    slots: Vec<InventorySlot>,
    /// Always a valid index while `slots` is non-empty
    selected: usize,
    notifier: SlotNotifier,
    presenter: Option<Box<dyn InventoryPresenter>>,
}

impl Inventory {
    /// Create an inventory with `slot_count` empty slots, slot 0 selected
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![InventorySlot::new(); slot_count],
            selected: 0,
            notifier: SlotNotifier::new(),
            presenter: None,
        }
    }

    /// Start with a different slot selected. Out-of-range indices are ignored.
    pub fn with_selection(mut self, index: usize) -> Self {
        if index < self.slots.len() {
            self.selected = index;
        }
        self
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Selected slot, `None` only for a zero-slot inventory
    pub fn selected_index(&self) -> Option<usize> {
        (!self.slots.is_empty()).then_some(self.selected)
    }

    /// Number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// Number of empty slots
    pub fn free_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| !s.is_empty())
    }

    /// First empty slot in index order
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(InventorySlot::is_empty)
    }

    /// All slots in index order
    pub fn slots(&self) -> impl Iterator<Item = (usize, &InventorySlot)> {
        self.slots.iter().enumerate()
    }

    /// Put an item into the first empty slot
    ///
    /// Returns false for a null item or a full inventory; nothing changes in
    /// either case.
    pub fn try_add_item(&mut self, item: ItemRef) -> bool {
        if item.is_null() {
            log::debug!("Rejected null item");
            return false;
        }

        let Some(index) = self.find_empty_slot() else {
            log::debug!("No free slot for {:?}", item);
            return false;
        };

        self.slots[index].set_item(item);
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.set_slot_item(index, item);
        }
        self.notifier.broadcast(&index);
        true
    }

    /// Clear a slot
    ///
    /// Clearing an already-empty slot still succeeds and still notifies.
    /// Only an out-of-range index returns false.
    pub fn remove_item_by_index(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            log::trace!("remove_item_by_index: {} out of range", index);
            return false;
        };

        slot.clear();
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.clear_slot_item(index);
        }
        self.notifier.broadcast(&index);
        true
    }

    /// Exchange the contents of two slots
    ///
    /// Both slots change before anyone is told. Notifies `from` then `to`,
    /// including when they are the same slot.
    pub fn swap_slots(&mut self, from: usize, to: usize) {
        if from >= self.slots.len() || to >= self.slots.len() {
            log::trace!("swap_slots: ({}, {}) out of range", from, to);
            return;
        }

        self.slots.swap(from, to);
        self.present_slot(from);
        self.present_slot(to);
        self.notifier.broadcast(&from);
        self.notifier.broadcast(&to);
    }

    /// Check a slot for emptiness. Out-of-range slots count as empty.
    pub fn is_slot_empty(&self, index: usize) -> bool {
        self.slots.get(index).map_or(true, InventorySlot::is_empty)
    }

    /// Item in a slot, `None` when empty or out of range
    pub fn get_item_in_slot(&self, index: usize) -> Option<ItemRef> {
        self.slots.get(index)?.item()
    }

    /// Item in the selected slot
    pub fn get_selected_item(&self) -> Option<ItemRef> {
        self.get_item_in_slot(self.selected_index()?)
    }

    /// Move the selection cursor
    ///
    /// Out-of-range indices are rejected, not clamped. Reselecting the
    /// current slot is a no-op and does not notify.
    pub fn set_slot_select(&mut self, index: usize) {
        if index == self.selected || index >= self.slots.len() {
            return;
        }

        self.selected = index;
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.set_slot_select(index);
        }
        self.notifier.broadcast(&index);
    }

    /// Listen for slot updates
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&usize) + Send + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Stop listening. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Attach a presenter and push the full current state into it
    ///
    /// Returns the previously attached presenter, if any.
    pub fn attach_presenter(
        &mut self,
        mut presenter: Box<dyn InventoryPresenter>,
    ) -> Option<Box<dyn InventoryPresenter>> {
        presenter.set_slot_count(self.slots.len());
        if let Some(selected) = self.selected_index() {
            presenter.set_slot_select(selected);
        }
        for (index, slot) in self.slots.iter().enumerate() {
            match slot.item() {
                Some(item) => presenter.set_slot_item(index, item),
                None => presenter.clear_slot_item(index),
            }
        }
        self.presenter.replace(presenter)
    }

    /// Detach the current presenter
    pub fn detach_presenter(&mut self) -> Option<Box<dyn InventoryPresenter>> {
        self.presenter.take()
    }

    pub fn has_presenter(&self) -> bool {
        self.presenter.is_some()
    }

    /// Presenter access for visibility changes
    pub(crate) fn presenter_mut(&mut self) -> Option<&mut (dyn InventoryPresenter + 'static)> {
        self.presenter.as_deref_mut()
    }

    fn present_slot(&mut self, index: usize) {
        let item = self.slots[index].item();
        if let Some(presenter) = self.presenter.as_mut() {
            match item {
                Some(item) => presenter.set_slot_item(index, item),
                None => presenter.clear_slot_item(index),
            }
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(10)
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inventory")
            .field("slots", &self.slots)
            .field("selected", &self.selected_index())
            .field("listeners", &self.notifier.len())
            .field("presenter", &self.presenter.is_some())
            .finish()
    }
}
