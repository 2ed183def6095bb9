//! World item pickups

use crate::inventory::Inventory;
use crate::item::ItemRef;

/// An item lying in the world, waiting to be collected
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPickup {
    /// Item represented
    pub item: ItemRef,
    /// World position
    pub position: [f32; 3],
    /// Disabled once collected
    pub enabled: bool,
}

impl ItemPickup {
    /// Create a new pickup at the origin
    pub fn new(item: ItemRef) -> Self {
        Self {
            item,
            position: [0.0, 0.0, 0.0],
            enabled: true,
        }
    }

    /// Set position
    pub fn with_position(mut self, position: [f32; 3]) -> Self {
        self.position = position;
        self
    }

    /// Check if the pickup can still be collected
    pub fn can_collect(&self) -> bool {
        self.enabled && !self.item.is_null()
    }

    /// Move the item into an inventory
    ///
    /// On success the pickup is disabled. On failure (inventory full,
    /// pickup disabled, null item) nothing changes.
    pub fn try_collect(&mut self, inventory: &mut Inventory) -> bool {
        if !self.can_collect() || !inventory.try_add_item(self.item) {
            return false;
        }
        self.enabled = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        let mut inv = Inventory::new(1);
        let mut pickup = ItemPickup::new(ItemRef::new(0, 0)).with_position([1.0, 0.0, 2.0]);

        assert!(pickup.try_collect(&mut inv));
        assert!(!pickup.enabled);
        assert_eq!(inv.get_item_in_slot(0), Some(ItemRef::new(0, 0)));

        // Already collected
        assert!(!pickup.try_collect(&mut Inventory::new(1)));
    }

    #[test]
    fn test_collect_into_full_inventory() {
        let mut inv = Inventory::new(1);
        inv.try_add_item(ItemRef::new(9, 0));

        let mut pickup = ItemPickup::new(ItemRef::new(0, 0));
        assert!(!pickup.try_collect(&mut inv));
        assert!(pickup.enabled);
        assert_eq!(inv.get_item_in_slot(0), Some(ItemRef::new(9, 0)));
    }

    #[test]
    fn test_null_pickup() {
        let mut pickup = ItemPickup::new(ItemRef::null());
        assert!(!pickup.can_collect());
        assert!(!pickup.try_collect(&mut Inventory::new(1)));
    }
}
