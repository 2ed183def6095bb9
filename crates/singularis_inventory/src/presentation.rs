//! Presentation adapter
//!
//! The UI side of the inventory. The store pushes every state change into
//! the attached [`InventoryPresenter`]; the presenter never drives the store.
//! Presenters are infallible from the store's point of view.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::item::ItemRef;

/// UI surface mirroring an inventory
pub trait InventoryPresenter: Send {
    /// Number of slot widgets to show
    fn set_slot_count(&mut self, count: usize);

    /// Highlight a slot
    fn set_slot_select(&mut self, index: usize);

    /// Show an item in a slot
    fn set_slot_item(&mut self, index: usize, item: ItemRef);

    /// Show a slot as empty
    fn clear_slot_item(&mut self, index: usize);

    /// Show or hide the whole surface
    fn set_visible(&mut self, _visible: bool) {}
}

/// Presenter that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl InventoryPresenter for NullPresenter {
    fn set_slot_count(&mut self, _count: usize) {}
    fn set_slot_select(&mut self, _index: usize) {}
    fn set_slot_item(&mut self, _index: usize, _item: ItemRef) {}
    fn clear_slot_item(&mut self, _index: usize) {}
}

/// Headless copy of what a hotbar widget would display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotbarMirror {
    /// Per-slot displayed item
    pub slots: Vec<Option<ItemRef>>,
    /// Highlighted slot
    pub selected: Option<usize>,
    /// Whether the widget is on screen
    pub visible: bool,
}

impl HotbarMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item displayed in a slot
    pub fn item(&self, index: usize) -> Option<ItemRef> {
        self.slots.get(index).copied().flatten()
    }

    /// Render as a single line, e.g. `[1:A] 2:- 3:-`
    ///
    /// `label` names an item; the highlighted slot is bracketed. Slot numbers
    /// follow the hotkey row, so the tenth slot prints as `0`.
    pub fn render_line(&self, mut label: impl FnMut(ItemRef) -> String) -> String {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let key = (i + 1) % 10;
                let name = slot.map(&mut label).unwrap_or_else(|| "-".to_string());
                if self.selected == Some(i) {
                    format!("[{}:{}]", key, name)
                } else {
                    format!("{}:{}", key, name)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl InventoryPresenter for HotbarMirror {
    fn set_slot_count(&mut self, count: usize) {
        self.slots.resize(count, None);
        if self.selected.is_some_and(|s| s >= count) {
            self.selected = None;
        }
    }

    fn set_slot_select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    fn set_slot_item(&mut self, index: usize, item: ItemRef) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(item);
        }
    }

    fn clear_slot_item(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// A [`HotbarMirror`] shared between the inventory and the host
///
/// Clone it, hand one clone to the inventory as its presenter and keep the
/// other to read what should be on screen.
#[derive(Debug, Clone, Default)]
pub struct SharedMirror(Arc<Mutex<HotbarMirror>>);

impl SharedMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock for reading
    pub fn lock(&self) -> MutexGuard<'_, HotbarMirror> {
        self.0.lock()
    }

    /// Copy out the current state
    pub fn snapshot(&self) -> HotbarMirror {
        self.0.lock().clone()
    }
}

impl InventoryPresenter for SharedMirror {
    fn set_slot_count(&mut self, count: usize) {
        self.0.lock().set_slot_count(count);
    }

    fn set_slot_select(&mut self, index: usize) {
        self.0.lock().set_slot_select(index);
    }

    fn set_slot_item(&mut self, index: usize, item: ItemRef) {
        self.0.lock().set_slot_item(index, item);
    }

    fn clear_slot_item(&mut self, index: usize) {
        self.0.lock().clear_slot_item(index);
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.lock().set_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_tracks_calls() {
        let mut mirror = HotbarMirror::new();
        mirror.set_slot_count(3);
        mirror.set_slot_item(1, ItemRef::new(4, 0));
        mirror.set_slot_select(1);
        mirror.set_visible(true);

        assert_eq!(mirror.slots.len(), 3);
        assert_eq!(mirror.item(1), Some(ItemRef::new(4, 0)));
        assert_eq!(mirror.item(9), None);
        assert_eq!(mirror.selected, Some(1));
        assert!(mirror.visible);

        mirror.clear_slot_item(1);
        assert_eq!(mirror.item(1), None);
    }

    #[test]
    fn test_mirror_ignores_out_of_range_items() {
        let mut mirror = HotbarMirror::new();
        mirror.set_slot_count(1);
        mirror.set_slot_item(5, ItemRef::new(0, 0));
        assert_eq!(mirror.slots, vec![None]);
    }

    #[test]
    fn test_render_line() {
        let mut mirror = HotbarMirror::new();
        mirror.set_slot_count(10);
        mirror.set_slot_item(0, ItemRef::new(0, 0));
        mirror.set_slot_select(9);

        let line = mirror.render_line(|_| "Apple".to_string());
        assert!(line.starts_with("1:Apple 2:-"));
        assert!(line.ends_with("[0:-]"));
    }

    #[test]
    fn test_shared_mirror_sees_presenter_writes() {
        let host = SharedMirror::new();
        let mut presenter: Box<dyn InventoryPresenter> = Box::new(host.clone());

        presenter.set_slot_count(2);
        presenter.set_slot_select(1);

        let view = host.snapshot();
        assert_eq!(view.slots.len(), 2);
        assert_eq!(view.selected, Some(1));
    }
}
