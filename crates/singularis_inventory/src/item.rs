//! Item definitions and the catalog that owns them

use serde::{Deserialize, Serialize};
use singularis_core::{Handle, HandleMap};

use crate::error::Result;

/// Non-owning reference to an [`Item`] in an [`ItemCatalog`]
///
/// The null handle stands for "no item". A reference stays copyable after
/// its item is removed from the catalog; it simply stops resolving.
pub type ItemRef = Handle<Item>;

/// Item descriptor owned by gameplay/content code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Item ID. Expected to be unique, not enforced.
    pub id: u32,
    /// Display name
    pub display_name: String,
    /// Icon asset path (texture or material)
    pub icon: String,
    /// In-game value
    pub value: f32,
    /// Consumed (and removed from the inventory) when used
    pub consumable: bool,
    /// Can be worn/equipped
    pub equippable: bool,
    /// Actor class spawned when the item is placed in the world
    pub visual_actor: Option<String>,
}

impl Item {
    /// Create a new item
    pub fn new(id: u32, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    /// Set icon path
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set value
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Mark as consumable
    pub fn consumable(mut self) -> Self {
        self.consumable = true;
        self
    }

    /// Mark as equippable
    pub fn equippable(mut self) -> Self {
        self.equippable = true;
        self
    }

    /// Set world representation
    pub fn with_visual_actor(mut self, actor: impl Into<String>) -> Self {
        self.visual_actor = Some(actor.into());
        self
    }
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: 0,
            display_name: "Item".to_string(),
            icon: String::new(),
            value: 0.0,
            consumable: false,
            equippable: false,
            visual_actor: None,
        }
    }
}

/// Owning registry of item definitions
///
/// Inventories only ever hold [`ItemRef`]s into a catalog; creating and
/// destroying items happens here.
#[derive(Default)]
pub struct ItemCatalog {
    items: HandleMap<Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item and get a reference to it
    pub fn register(&mut self, item: Item) -> ItemRef {
        if self.find_by_id(item.id).is_some() {
            log::warn!("Item id {} registered more than once ('{}')", item.id, item.display_name);
        }
        self.items.insert(item)
    }

    /// Register every item in a JSON array of definitions
    pub fn load_json(&mut self, json: &str) -> Result<Vec<ItemRef>> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        let refs: Vec<ItemRef> = items.into_iter().map(|item| self.register(item)).collect();
        log::debug!("Loaded {} item definitions", refs.len());
        Ok(refs)
    }

    /// Remove an item. References to it stop resolving.
    pub fn remove(&mut self, item: ItemRef) -> Option<Item> {
        self.items.remove(item)
    }

    pub fn get(&self, item: ItemRef) -> Option<&Item> {
        self.items.get(item)
    }

    pub fn get_mut(&mut self, item: ItemRef) -> Option<&mut Item> {
        self.items.get_mut(item)
    }

    pub fn contains(&self, item: ItemRef) -> bool {
        self.items.contains(item)
    }

    /// First live item with the given ID
    pub fn find_by_id(&self, id: u32) -> Option<ItemRef> {
        self.items
            .iter()
            .find(|(_, item)| item.id == id)
            .map(|(handle, _)| handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemRef, &Item)> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
