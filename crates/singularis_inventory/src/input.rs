//! Hotkey input
//!
//! Ten number-row triggers select slots 0-9 (keys 1-9, then 0). The trigger
//! to slot mapping is the fixed [`SLOT_KEYS`] table; only which raw key
//! fires which trigger is configurable, through [`InputAdapter`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::InputConfig;
use crate::error::{InventoryError, Result};

/// One of the ten slot-selection triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKey {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Zero,
}

/// Trigger to slot index
pub const SLOT_KEYS: [(SlotKey, usize); 10] = [
    (SlotKey::One, 0),
    (SlotKey::Two, 1),
    (SlotKey::Three, 2),
    (SlotKey::Four, 3),
    (SlotKey::Five, 4),
    (SlotKey::Six, 5),
    (SlotKey::Seven, 6),
    (SlotKey::Eight, 7),
    (SlotKey::Nine, 8),
    (SlotKey::Zero, 9),
];

impl SlotKey {
    /// Slot this trigger selects
    pub const fn slot_index(self) -> usize {
        SLOT_KEYS[self as usize].1
    }

    /// Default number-row label
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Zero => "0",
        }
    }

    /// Name of the input action asset bound to this trigger
    pub const fn action_name(self) -> &'static str {
        match self {
            Self::One => "IA_ONE",
            Self::Two => "IA_TWO",
            Self::Three => "IA_THREE",
            Self::Four => "IA_FOUR",
            Self::Five => "IA_FIVE",
            Self::Six => "IA_SIX",
            Self::Seven => "IA_SEVEN",
            Self::Eight => "IA_EIGHT",
            Self::Nine => "IA_NINE",
            Self::Zero => "IA_ZERO",
        }
    }
}

/// Translates raw key labels into slot triggers
#[derive(Debug, Clone)]
pub struct InputAdapter {
    bindings: HashMap<String, SlotKey>,
    priority: i32,
}

impl InputAdapter {
    /// Bind the i-th label to the i-th trigger in [`SLOT_KEYS`]
    ///
    /// All ten triggers must be bound, each to a distinct non-empty label.
    pub fn new<S: AsRef<str>>(labels: &[S], priority: i32) -> Result<Self> {
        if labels.len() != SLOT_KEYS.len() {
            return Err(InventoryError::InvalidBindings(format!(
                "expected {} keys, got {}",
                SLOT_KEYS.len(),
                labels.len()
            )));
        }

        let mut bindings = HashMap::with_capacity(labels.len());
        for (label, (key, _)) in labels.iter().zip(SLOT_KEYS) {
            let label = label.as_ref().trim();
            if label.is_empty() {
                return Err(InventoryError::InvalidBindings(format!(
                    "{} has an empty key",
                    key.action_name()
                )));
            }
            if let Some(previous) = bindings.insert(label.to_string(), key) {
                return Err(InventoryError::InvalidBindings(format!(
                    "key '{}' bound to both {} and {}",
                    label,
                    previous.action_name(),
                    key.action_name()
                )));
            }
        }

        Ok(Self { bindings, priority })
    }

    /// Build from config
    pub fn from_config(config: &InputConfig) -> Result<Self> {
        Self::new(&config.keys, config.priority)
    }

    /// Trigger bound to a raw key
    pub fn translate(&self, label: &str) -> Option<SlotKey> {
        self.bindings.get(label.trim()).copied()
    }

    /// Mapping priority
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        let bindings = SLOT_KEYS
            .iter()
            .map(|&(key, _)| (key.label().to_string(), key))
            .collect();
        Self {
            bindings,
            priority: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_indices() {
        assert_eq!(SlotKey::One.slot_index(), 0);
        assert_eq!(SlotKey::Nine.slot_index(), 8);
        assert_eq!(SlotKey::Zero.slot_index(), 9);
        for (i, (key, index)) in SLOT_KEYS.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(key.slot_index(), i);
        }
    }

    #[test]
    fn test_default_bindings() {
        let input = InputAdapter::default();
        assert_eq!(input.translate("1"), Some(SlotKey::One));
        assert_eq!(input.translate("0"), Some(SlotKey::Zero));
        assert_eq!(input.translate("x"), None);
    }

    #[test]
    fn test_from_default_config_matches_default() {
        let input = InputAdapter::from_config(&InputConfig::default()).unwrap();
        for (key, _) in SLOT_KEYS {
            assert_eq!(input.translate(key.label()), Some(key));
        }
    }

    #[test]
    fn test_remapped_keys() {
        let labels = ["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"];
        let input = InputAdapter::new(&labels, 5).unwrap();

        assert_eq!(input.translate("p"), Some(SlotKey::Zero));
        assert_eq!(input.translate("1"), None);
        assert_eq!(input.priority(), 5);
    }

    #[test]
    fn test_rejects_incomplete_bindings() {
        let err = InputAdapter::new(&["1", "2"], 0).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidBindings(_)));
    }

    #[test]
    fn test_rejects_duplicate_and_empty_keys() {
        let dup = ["1", "1", "3", "4", "5", "6", "7", "8", "9", "0"];
        assert!(InputAdapter::new(&dup, 0).is_err());

        let empty = ["1", " ", "3", "4", "5", "6", "7", "8", "9", "0"];
        assert!(InputAdapter::new(&empty, 0).is_err());
    }
}
