//! Inventory errors
//!
//! Store operations never return these; they report rejection through
//! `bool` results or silent no-ops. Errors here cover setup: configuration,
//! the owner gate in [`InventoryManager::on_register`], and content loading.
//!
//! [`InventoryManager::on_register`]: crate::manager::InventoryManager::on_register

use singularis_core::Handle;
use thiserror::Error;

use crate::session::Session;

/// Setup and lifecycle errors
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Component registered without an owner
    #[error("inventory component must be attached to an owner")]
    MissingOwner,
    /// Owner handle no longer resolves
    #[error("owner session {0} no longer exists")]
    StaleOwner(Handle<Session>),
    /// Owner is not a player controller
    #[error("inventory component must be attached to a player controller, got '{owner}'")]
    NotPlayerController { owner: String },
    /// Owner is a player controller but not a local one
    #[error("inventory component can only be used by a local controller, got '{owner}'")]
    NotLocalController { owner: String },
    /// Component failed its owner gate or was never registered
    #[error("inventory component is disabled")]
    Disabled,
    /// Hotkey table is not ten distinct keys
    #[error("invalid hotkey bindings: {0}")]
    InvalidBindings(String),
    /// Configuration value out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, InventoryError>;
