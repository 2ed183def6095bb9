//! Inventory manager component
//!
//! Host-facing wrapper around an [`Inventory`]. The host drives it through
//! the usual component lifecycle:
//!
//! 1. [`InventoryManager::new`] with the configuration
//! 2. [`InventoryManager::on_register`] with the owning session. This is the
//!    one-time gate: anything other than a live local player controller
//!    disables the whole component.
//! 3. [`InventoryManager::begin_play`] with the hotbar widget
//! 4. [`InventoryManager::tick`] every frame, input through
//!    [`InventoryManager::handle_input`] / [`InventoryManager::handle_hotkey`]
//! 5. [`InventoryManager::end_play`]

use singularis_event::{Notifier, SubscriberId};

use crate::config::InventoryConfig;
use crate::error::{InventoryError, Result};
use crate::input::{InputAdapter, SlotKey};
use crate::inventory::Inventory;
use crate::item::{ItemCatalog, ItemRef};
use crate::presentation::InventoryPresenter;
use crate::session::{SessionHandle, SessionRegistry};

/// Component lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentState {
    /// Not yet attached to an owner
    Unregistered,
    /// Owner validated; fully functional
    Active,
    /// Owner gate failed; everything but read access is off
    Disabled,
}

/// Broadcast when the owner uses the selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUse {
    /// Item used
    pub item: ItemRef,
    /// Session that used it
    pub owner: SessionHandle,
    /// Slot it was used from
    pub slot: usize,
    /// Whether it was removed from the inventory
    pub consumed: bool,
}

/// Inventory component attached to a player controller
pub struct InventoryManager {
    inventory: Inventory,
    config: InventoryConfig,
    /// None when the configured bindings are invalid
    input: Option<InputAdapter>,
    hotkeys_bound: bool,
    owner: SessionHandle,
    state: ComponentState,
    tick_enabled: bool,
    item_use: Notifier<ItemUse>,
}

impl InventoryManager {
    /// Build the component and its inventory from configuration
    pub fn new(config: &InventoryConfig) -> Result<Self> {
        config.validate()?;

        let input = match InputAdapter::from_config(&config.input) {
            Ok(input) => Some(input),
            Err(e) => {
                log::warn!("Hotkeys disabled: {}", e);
                None
            }
        };

        Ok(Self {
            inventory: Inventory::new(config.slot_count).with_selection(config.initial_selection),
            config: config.clone(),
            input,
            hotkeys_bound: false,
            owner: SessionHandle::null(),
            state: ComponentState::Unregistered,
            tick_enabled: false,
            item_use: Notifier::new(),
        })
    }

    /// Attach to an owner and validate it
    ///
    /// Only runs once. On failure the component is disabled for good and the
    /// reason returned; any later call fails with [`InventoryError::Disabled`]
    /// and leaves the owner and state untouched.
    pub fn on_register(&mut self, sessions: &SessionRegistry, owner: SessionHandle) -> Result<()> {
        if self.state != ComponentState::Unregistered {
            log::warn!("Inventory already registered to session {}", self.owner);
            return Err(InventoryError::Disabled);
        }

        self.owner = owner;
        match Self::check_owner(sessions, owner) {
            Ok(()) => {
                self.state = ComponentState::Active;
                self.tick_enabled = true;
                log::info!("Inventory registered to session {}", owner);
                Ok(())
            }
            Err(e) => {
                self.state = ComponentState::Disabled;
                self.tick_enabled = false;
                self.hotkeys_bound = false;
                log::error!("Inventory component disabled: {}", e);
                Err(e)
            }
        }
    }

    fn check_owner(sessions: &SessionRegistry, owner: SessionHandle) -> Result<()> {
        if owner.is_null() {
            return Err(InventoryError::MissingOwner);
        }
        let session = sessions.get(owner).ok_or(InventoryError::StaleOwner(owner))?;
        if !session.is_player() {
            return Err(InventoryError::NotPlayerController {
                owner: format!("{} ({:?})", session.name, session.kind),
            });
        }
        if !session.is_local() {
            return Err(InventoryError::NotLocalController {
                owner: session.name.clone(),
            });
        }
        Ok(())
    }

    /// Attach the hotbar widget and bind hotkeys
    pub fn begin_play(&mut self, presenter: Box<dyn InventoryPresenter>) -> Result<()> {
        self.ensure_active()?;

        self.inventory.attach_presenter(presenter);
        self.set_visible(self.config.widget.visible_on_start);

        self.hotkeys_bound = self.input.is_some();
        if self.hotkeys_bound {
            log::debug!(
                "Bound {} slot hotkeys at priority {}",
                crate::input::SLOT_KEYS.len(),
                self.config.input.priority
            );
        }
        Ok(())
    }

    /// Detach the widget and unbind hotkeys
    pub fn end_play(&mut self) {
        if let Some(mut presenter) = self.inventory.detach_presenter() {
            presenter.set_visible(false);
        }
        self.hotkeys_bound = false;
    }

    /// Per-frame update. Reserved; the inventory has no time-based state.
    pub fn tick(&mut self, delta_time: f32) {
        if self.tick_enabled {
            log::trace!("Inventory tick ({:.4}s)", delta_time);
        }
    }

    /// Select the slot bound to a trigger
    ///
    /// Returns true when the key's slot is selected afterwards, including when
    /// it already was. False if the component is inactive, hotkeys are
    /// unbound, or the slot is past the inventory's capacity.
    pub fn handle_hotkey(&mut self, key: SlotKey) -> bool {
        if self.state != ComponentState::Active || !self.hotkeys_bound {
            return false;
        }
        let index = key.slot_index();
        self.inventory.set_slot_select(index);
        self.inventory.selected_index() == Some(index)
    }

    /// Translate a raw key and handle it. False for unbound keys, otherwise
    /// as [`handle_hotkey`](Self::handle_hotkey).
    pub fn handle_input(&mut self, label: &str) -> bool {
        match self.input.as_ref().and_then(|input| input.translate(label)) {
            Some(key) => self.handle_hotkey(key),
            None => false,
        }
    }

    /// Show or hide the widget
    pub fn set_visible(&mut self, visible: bool) {
        if let Some(presenter) = self.inventory.presenter_mut() {
            presenter.set_visible(visible);
        }
    }

    /// Use the selected item
    ///
    /// Consumable items are removed from their slot. Listeners registered with
    /// [`on_item_use`](Self::on_item_use) hear about every use. Returns `None`
    /// when nothing usable is selected or the item no longer exists.
    pub fn use_selected_item(&mut self, catalog: &ItemCatalog) -> Result<Option<ItemUse>> {
        self.ensure_active()?;

        let Some(slot) = self.inventory.selected_index() else {
            return Ok(None);
        };
        let Some(item) = self.inventory.get_item_in_slot(slot) else {
            return Ok(None);
        };
        let Some(definition) = catalog.get(item) else {
            log::debug!("Selected item {:?} no longer exists", item);
            return Ok(None);
        };

        let consumed = definition.consumable;
        log::debug!("Using '{}' from slot {}", definition.display_name, slot);
        if consumed {
            self.inventory.remove_item_by_index(slot);
        }

        let usage = ItemUse {
            item,
            owner: self.owner,
            slot,
            consumed,
        };
        self.item_use.broadcast(&usage);
        Ok(Some(usage))
    }

    /// Listen for item use
    pub fn on_item_use<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(&ItemUse) + Send + 'static,
    {
        self.item_use.subscribe(listener)
    }

    /// Stop listening for item use
    pub fn remove_item_use_listener(&mut self, id: SubscriberId) -> bool {
        self.item_use.unsubscribe(id)
    }

    /// Read access to the inventory, in any state
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Write access to the inventory; only while active
    pub fn inventory_mut(&mut self) -> Result<&mut Inventory> {
        self.ensure_active()?;
        Ok(&mut self.inventory)
    }

    /// Owning session handle (null before registration)
    pub fn owner(&self) -> SessionHandle {
        self.owner
    }

    /// Re-check that the owner still exists
    pub fn owner_is_valid(&self, sessions: &SessionRegistry) -> bool {
        !self.owner.is_null() && sessions.is_alive(self.owner)
    }

    pub fn state(&self) -> ComponentState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ComponentState::Active
    }

    pub fn is_tick_enabled(&self) -> bool {
        self.tick_enabled
    }

    pub fn hotkeys_bound(&self) -> bool {
        self.hotkeys_bound
    }

    /// Widget layer from config
    pub fn widget_z_order(&self) -> i32 {
        self.config.widget.z_order
    }

    /// Hotkey mapping priority, if hotkeys are configured
    pub fn input_priority(&self) -> Option<i32> {
        self.input.as_ref().map(InputAdapter::priority)
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    fn ensure_active(&self) -> Result<()> {
        match self.state {
            ComponentState::Active => Ok(()),
            _ => Err(InventoryError::Disabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::presentation::SharedMirror;
    use crate::session::{Session, SessionKind};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn active_manager(slots: usize) -> (InventoryManager, SessionRegistry, SharedMirror) {
        let mut sessions = SessionRegistry::new();
        let owner = sessions.spawn(Session::local_player("player"));
        let mut manager = InventoryManager::new(&InventoryConfig::with_slot_count(slots)).unwrap();
        manager.on_register(&sessions, owner).unwrap();
        let mirror = SharedMirror::new();
        manager.begin_play(Box::new(mirror.clone())).unwrap();
        (manager, sessions, mirror)
    }

    #[test]
    fn test_register_local_player() {
        let (manager, sessions, mirror) = active_manager(4);

        assert!(manager.is_active());
        assert!(manager.is_tick_enabled());
        assert!(manager.hotkeys_bound());
        assert!(manager.owner_is_valid(&sessions));

        let view = mirror.snapshot();
        assert_eq!(view.slots.len(), 4);
        assert_eq!(view.selected, Some(0));
        assert!(view.visible);
    }

    #[test]
    fn test_register_rejects_bad_owners() {
        let mut sessions = SessionRegistry::new();
        let npc = sessions.spawn(Session::new("npc", SessionKind::NonPlayer));
        let remote = sessions.spawn(Session::new("remote", SessionKind::RemotePlayer));
        let gone = sessions.spawn(Session::local_player("gone"));
        sessions.despawn(gone);

        let config = InventoryConfig::default();
        let cases: [(SessionHandle, fn(&InventoryError) -> bool); 4] = [
            (SessionHandle::null(), |e| matches!(e, InventoryError::MissingOwner)),
            (gone, |e| matches!(e, InventoryError::StaleOwner(_))),
            (npc, |e| matches!(e, InventoryError::NotPlayerController { .. })),
            (remote, |e| matches!(e, InventoryError::NotLocalController { .. })),
        ];

        for (owner, expected) in cases {
            let mut manager = InventoryManager::new(&config).unwrap();
            let err = manager.on_register(&sessions, owner).unwrap_err();
            assert!(expected(&err), "unexpected error {:?}", err);
            assert_eq!(manager.state(), ComponentState::Disabled);
            assert!(!manager.is_tick_enabled());
            assert!(matches!(manager.inventory_mut(), Err(InventoryError::Disabled)));
            assert!(manager.begin_play(Box::new(SharedMirror::new())).is_err());
            assert!(!manager.handle_hotkey(SlotKey::Two));
        }
    }

    #[test]
    fn test_failed_gate_is_final() {
        let mut sessions = SessionRegistry::new();
        let npc = sessions.spawn(Session::new("npc", SessionKind::NonPlayer));
        let player = sessions.spawn(Session::local_player("player"));

        let mut manager = InventoryManager::new(&InventoryConfig::default()).unwrap();
        assert!(manager.on_register(&sessions, npc).is_err());

        let err = manager.on_register(&sessions, player).unwrap_err();
        assert!(matches!(err, InventoryError::Disabled));
        assert_eq!(manager.state(), ComponentState::Disabled);
        assert_eq!(manager.owner(), npc);
        assert!(!manager.is_tick_enabled());
        assert!(manager.inventory_mut().is_err());
    }

    #[test]
    fn test_register_keeps_first_owner() {
        let (mut manager, mut sessions, _mirror) = active_manager(3);
        let first = manager.owner();
        let other = sessions.spawn(Session::local_player("other"));

        assert!(matches!(
            manager.on_register(&sessions, other),
            Err(InventoryError::Disabled)
        ));
        assert_eq!(manager.owner(), first);
        assert!(manager.is_active());
    }

    #[test]
    fn test_unregistered_is_inert() {
        let mut manager = InventoryManager::new(&InventoryConfig::default()).unwrap();
        assert_eq!(manager.state(), ComponentState::Unregistered);
        assert!(manager.inventory_mut().is_err());
        assert!(!manager.handle_input("3"));
        assert_eq!(manager.inventory().capacity(), 10);
    }

    #[test]
    fn test_hotkeys_select_slots() {
        let (mut manager, _sessions, mirror) = active_manager(10);

        assert!(manager.handle_input("3"));
        assert_eq!(manager.inventory().selected_index(), Some(2));
        assert!(manager.handle_hotkey(SlotKey::Zero));
        assert_eq!(manager.inventory().selected_index(), Some(9));
        assert_eq!(mirror.lock().selected, Some(9));
        assert!(!manager.handle_input("z"));
    }

    #[test]
    fn test_hotkey_beyond_capacity_is_ignored() {
        let (mut manager, _sessions, _mirror) = active_manager(3);
        assert!(!manager.handle_hotkey(SlotKey::Nine));
        assert!(!manager.handle_input("4"));
        assert_eq!(manager.inventory().selected_index(), Some(0));

        // Reselecting the current slot still reports it as selected
        assert!(manager.handle_hotkey(SlotKey::One));
    }

    #[test]
    fn test_invalid_bindings_disable_hotkeys_only() {
        let mut config = InventoryConfig::default();
        config.input.keys.truncate(9);

        let mut sessions = SessionRegistry::new();
        let owner = sessions.spawn(Session::local_player("player"));
        let mut manager = InventoryManager::new(&config).unwrap();
        manager.on_register(&sessions, owner).unwrap();
        manager.begin_play(Box::new(SharedMirror::new())).unwrap();

        assert!(manager.is_active());
        assert!(!manager.hotkeys_bound());
        assert_eq!(manager.input_priority(), None);
        assert!(!manager.handle_input("2"));
        assert!(manager.inventory_mut().is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = InventoryConfig::with_slot_count(2);
        config.initial_selection = 5;
        assert!(InventoryManager::new(&config).is_err());
    }

    #[test]
    fn test_initial_selection() {
        let mut config = InventoryConfig::with_slot_count(4);
        config.initial_selection = 2;
        let manager = InventoryManager::new(&config).unwrap();
        assert_eq!(manager.inventory().selected_index(), Some(2));
    }

    #[test]
    fn test_use_consumable() {
        let (mut manager, _sessions, mirror) = active_manager(3);
        let mut catalog = ItemCatalog::new();
        let apple = catalog.register(Item::new(1, "Apple").consumable());

        let uses = Arc::new(Mutex::new(Vec::new()));
        let sink = uses.clone();
        manager.on_item_use(move |u| sink.lock().push(*u));

        manager.inventory_mut().unwrap().try_add_item(apple);
        let usage = manager.use_selected_item(&catalog).unwrap().unwrap();

        assert!(usage.consumed);
        assert_eq!(usage.item, apple);
        assert_eq!(usage.owner, manager.owner());
        assert!(manager.inventory().is_slot_empty(0));
        assert_eq!(mirror.lock().item(0), None);
        assert_eq!(*uses.lock(), vec![usage]);
    }

    #[test]
    fn test_use_non_consumable_keeps_item() {
        let (mut manager, _sessions, _mirror) = active_manager(3);
        let mut catalog = ItemCatalog::new();
        let sword = catalog.register(Item::new(2, "Sword").equippable());
        manager.inventory_mut().unwrap().try_add_item(sword);

        let usage = manager.use_selected_item(&catalog).unwrap().unwrap();
        assert!(!usage.consumed);
        assert_eq!(manager.inventory().get_selected_item(), Some(sword));
    }

    #[test]
    fn test_use_nothing_or_stale() {
        let (mut manager, _sessions, _mirror) = active_manager(3);
        let mut catalog = ItemCatalog::new();
        assert_eq!(manager.use_selected_item(&catalog).unwrap(), None);

        let ghost = catalog.register(Item::new(3, "Ghost"));
        manager.inventory_mut().unwrap().try_add_item(ghost);
        catalog.remove(ghost);
        assert_eq!(manager.use_selected_item(&catalog).unwrap(), None);
    }

    #[test]
    fn test_end_play_hides_widget() {
        let (mut manager, mut sessions, mirror) = active_manager(3);
        manager.end_play();

        assert!(!mirror.lock().visible);
        assert!(!manager.hotkeys_bound());
        assert!(!manager.inventory().has_presenter());

        sessions.despawn(manager.owner());
        assert!(!manager.owner_is_valid(&sessions));
    }
}
