//! Inventory slot

use crate::item::ItemRef;

/// A single addressable storage unit holding zero or one item
///
/// Emptiness is derived from the stored reference, so a slot can never
/// report itself empty while holding an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySlot {
    item: Option<ItemRef>,
}

impl InventorySlot {
    /// An empty slot
    pub const fn new() -> Self {
        Self { item: None }
    }

    /// Store an item. A null reference clears the slot.
    pub fn set_item(&mut self, item: ItemRef) {
        self.item = (!item.is_null()).then_some(item);
    }

    pub fn clear(&mut self) {
        self.item = None;
    }

    /// Held item, if any
    pub fn item(&self) -> Option<ItemRef> {
        self.item
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut slot = InventorySlot::new();
        assert!(slot.is_empty());

        let item = ItemRef::new(3, 0);
        slot.set_item(item);
        assert!(!slot.is_empty());
        assert_eq!(slot.item(), Some(item));

        slot.clear();
        assert!(slot.is_empty());
        assert_eq!(slot.item(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut slot = InventorySlot::new();
        slot.set_item(ItemRef::new(1, 0));
        slot.set_item(ItemRef::new(2, 0));
        assert_eq!(slot.item(), Some(ItemRef::new(2, 0)));
    }

    #[test]
    fn test_null_item_keeps_slot_empty() {
        let mut slot = InventorySlot::new();
        slot.set_item(ItemRef::new(1, 0));
        slot.set_item(ItemRef::null());
        assert!(slot.is_empty());
        assert_eq!(slot.item(), None);
    }
}
