//! Inventory configuration
//!
//! Plain data read once when an [`InventoryManager`] is built. Every field
//! has a default, so a config file only needs the values it changes.
//!
//! # Example Config File
//!
//! ```toml
//! slot_count = 10
//! initial_selection = 0
//!
//! [input]
//! priority = 0
//! keys = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"]
//!
//! [widget]
//! z_order = 10
//! visible_on_start = true
//! ```
//!
//! [`InventoryManager`]: crate::manager::InventoryManager

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};
use crate::input::SLOT_KEYS;

/// Hotkey configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Input mapping priority relative to other consumers
    pub priority: i32,
    /// Raw key labels; the i-th label triggers the i-th slot key (1..9, 0)
    pub keys: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            priority: 0,
            keys: SLOT_KEYS
                .iter()
                .map(|(key, _)| key.label().to_string())
                .collect(),
        }
    }
}

/// Hotbar widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Viewport layer
    pub z_order: i32,
    /// Show the widget as soon as play begins
    pub visible_on_start: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            z_order: 10,
            visible_on_start: true,
        }
    }
}

/// Complete inventory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of slots, fixed for the life of the inventory
    pub slot_count: usize,
    /// Slot selected at start
    pub initial_selection: usize,
    /// Hotkeys
    pub input: InputConfig,
    /// Widget
    pub widget: WidgetConfig,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            slot_count: 10,
            initial_selection: 0,
            input: InputConfig::default(),
            widget: WidgetConfig::default(),
        }
    }
}

impl InventoryConfig {
    /// Config with a given slot count and defaults elsewhere
    pub fn with_slot_count(slot_count: usize) -> Self {
        Self {
            slot_count,
            ..Default::default()
        }
    }

    /// Parse and validate TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded inventory config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check values that cannot be expressed in the types
    ///
    /// Hotkey labels are not checked here; bad bindings only disable hotkeys.
    pub fn validate(&self) -> Result<()> {
        if self.slot_count > 0 && self.initial_selection >= self.slot_count {
            return Err(InventoryError::InvalidConfig(format!(
                "initial_selection {} is outside 0..{}",
                self.initial_selection, self.slot_count
            )));
        }
        if self.slot_count == 0 && self.initial_selection != 0 {
            return Err(InventoryError::InvalidConfig(
                "initial_selection must be 0 when slot_count is 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InventoryConfig::default();
        assert_eq!(config.slot_count, 10);
        assert_eq!(config.input.keys.len(), 10);
        assert_eq!(config.input.keys[0], "1");
        assert_eq!(config.input.keys[9], "0");
        assert_eq!(config.widget.z_order, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = InventoryConfig::from_toml_str(
            r#"
            slot_count = 4

            [widget]
            visible_on_start = false
            "#,
        )
        .unwrap();

        assert_eq!(config.slot_count, 4);
        assert_eq!(config.initial_selection, 0);
        assert!(!config.widget.visible_on_start);
        assert_eq!(config.widget.z_order, 10);
        assert_eq!(config.input, InputConfig::default());
    }

    #[test]
    fn test_rejects_bad_selection() {
        let err = InventoryConfig::from_toml_str("slot_count = 3\ninitial_selection = 3").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidConfig(_)));

        let err = InventoryConfig::from_toml_str("slot_count = 0\ninitial_selection = 1").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = InventoryConfig::from_toml_str("slot_count = \"ten\"").unwrap_err();
        assert!(matches!(err, InventoryError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = InventoryConfig::load_from_file("/nonexistent/inventory.toml").unwrap_err();
        assert!(matches!(err, InventoryError::Io(_)));
    }
}
