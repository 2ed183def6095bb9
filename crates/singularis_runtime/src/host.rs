//! Console host
//!
//! Plays the engine's part for one local player: owns the session registry
//! and item catalog, drives the inventory component and renders its hotbar
//! mirror as text.

use std::time::Instant;

use singularis_inventory::prelude::*;

use crate::command::{Command, HELP};

/// Item definitions shipped with the runtime
const BUILTIN_ITEMS: &str = include_str!("../assets/items.json");

/// Result of running a command
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep going, optionally with a message for the user
    Continue(Option<String>),
    Quit,
}

/// Everything the inventory needs from a host, for one player
pub struct Host {
    sessions: SessionRegistry,
    catalog: ItemCatalog,
    manager: InventoryManager,
    mirror: SharedMirror,
    last_tick: Instant,
}

impl Host {
    /// Spawn a local player and start its inventory
    pub fn new(config: &InventoryConfig) -> Result<Self> {
        let mut catalog = ItemCatalog::new();
        catalog.load_json(BUILTIN_ITEMS)?;

        let mut sessions = SessionRegistry::new();
        let player = sessions.spawn(Session::local_player("player0"));

        let mut manager = InventoryManager::new(config)?;
        manager.on_register(&sessions, player)?;

        let mirror = SharedMirror::new();
        manager.begin_play(Box::new(mirror.clone()))?;
        manager.inventory_mut()?.subscribe(|slot| log::debug!("Slot {} updated", slot));
        manager.on_item_use(|usage| {
            log::info!("Item {} used from slot {} (consumed: {})", usage.item, usage.slot, usage.consumed)
        });

        log::info!(
            "Inventory ready: {} slots, {} item definitions",
            manager.inventory().capacity(),
            catalog.len()
        );

        Ok(Self {
            sessions,
            catalog,
            manager,
            mirror,
            last_tick: Instant::now(),
        })
    }

    /// Run one command
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let message = match command {
            Command::Key(key) => {
                (!self.manager.handle_input(&key)).then(|| format!("key '{}' selects no slot", key))
            }
            Command::Add(id) => match self.catalog.find_by_id(id) {
                None => Some(format!("no item with id {}", id)),
                Some(item) => (!self.manager.inventory_mut()?.try_add_item(item))
                    .then(|| "inventory is full".to_string()),
            },
            Command::Remove(slot) => (!self.manager.inventory_mut()?.remove_item_by_index(slot))
                .then(|| format!("no slot {}", slot)),
            Command::Swap(a, b) => {
                self.manager.inventory_mut()?.swap_slots(a, b);
                None
            }
            Command::Select(slot) => {
                self.manager.inventory_mut()?.set_slot_select(slot);
                None
            }
            Command::Use => Some(match self.manager.use_selected_item(&self.catalog)? {
                Some(usage) => format!("used {}", self.item_name(usage.item)),
                None => "nothing to use".to_string(),
            }),
            Command::Show => {
                self.manager.set_visible(true);
                None
            }
            Command::Hide => {
                self.manager.set_visible(false);
                None
            }
            Command::List => Some(self.list_items()),
            Command::Help => Some(HELP.to_string()),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(message))
    }

    /// Hotbar as one line of text, or a placeholder when hidden
    pub fn render(&self) -> String {
        let view = self.mirror.snapshot();
        if !view.visible {
            return "(hotbar hidden)".to_string();
        }
        view.render_line(|item| self.item_name(item))
    }

    /// Advance the component by the wall time since the last tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.manager.tick(now.duration_since(self.last_tick).as_secs_f32());
        self.last_tick = now;
    }

    /// End the session
    pub fn shutdown(&mut self) {
        self.manager.end_play();
        let owner = self.manager.owner();
        self.sessions.despawn(owner);
        log::info!("Session {} ended", owner);
    }

    fn item_name(&self, item: ItemRef) -> String {
        self.catalog
            .get(item)
            .map(|i| i.display_name.clone())
            .unwrap_or_else(|| "?".to_string())
    }

    fn list_items(&self) -> String {
        self.catalog
            .iter()
            .map(|(_, item)| {
                let mut tags = Vec::new();
                if item.consumable {
                    tags.push("consumable");
                }
                if item.equippable {
                    tags.push("equippable");
                }
                format!("{:>3}  {:<16} {:>6.1}  {}", item.id, item.display_name, item.value, tags.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
