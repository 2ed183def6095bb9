//! Singularis Inventory - Hotbar Inventory System
//!
//! This crate provides a fixed-size player inventory with a selection cursor.
//!
//! # Features
//!
//! - Fixed slot row with first-fit insertion, removal and swapping
//! - Selection cursor driven by ten number-row hotkeys
//! - Synchronous slot-update notifications
//! - Presentation adapter that keeps a hotbar widget in sync
//! - Owner validation gate for the component lifecycle
//! - Consumable item use and world pickups
//!
//! # Example
//!
//! ```
//! use singularis_inventory::prelude::*;
//!
//! let mut catalog = ItemCatalog::new();
//! let apple = catalog.register(Item::new(1, "Apple").consumable());
//!
//! let mut inventory = Inventory::new(10);
//! inventory.subscribe(|slot| println!("slot {} changed", slot));
//!
//! assert!(inventory.try_add_item(apple));
//! assert_eq!(inventory.get_selected_item(), Some(apple));
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod inventory;
pub mod item;
pub mod manager;
pub mod pickup;
pub mod presentation;
pub mod session;
pub mod slot;

pub mod prelude {
    pub use crate::config::{InputConfig, InventoryConfig, WidgetConfig};
    pub use crate::error::{InventoryError, Result};
    pub use crate::input::{InputAdapter, SlotKey, SLOT_KEYS};
    pub use crate::inventory::{Inventory, SlotNotifier};
    pub use crate::item::{Item, ItemCatalog, ItemRef};
    pub use crate::manager::{ComponentState, InventoryManager, ItemUse};
    pub use crate::pickup::ItemPickup;
    pub use crate::presentation::{HotbarMirror, InventoryPresenter, NullPresenter, SharedMirror};
    pub use crate::session::{Session, SessionHandle, SessionKind, SessionRegistry};
    pub use crate::slot::InventorySlot;
    pub use singularis_event::SubscriberId;
}

pub use prelude::*;
