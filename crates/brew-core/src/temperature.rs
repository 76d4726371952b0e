//! # Temperature Presets
//!
//! The fixed list of temperatures a beverage can be served at. The list is
//! compiled into the binary; it is never read from or written to the store.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Labels of the built-in presets, in display order.
///
/// The first entry is the default temperature of a fresh mug.
pub const PRESET_LABELS: &[&str] = &["Hot", "Iced"];

/// A serving temperature such as "Hot" or "Iced".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct TemperaturePreset(String);

impl TemperaturePreset {
    /// Wraps a label.
    pub fn new(label: impl Into<String>) -> Self {
        TemperaturePreset(label.into())
    }

    /// Returns the display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemperaturePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the built-in presets in display order.
pub fn presets() -> Vec<TemperaturePreset> {
    PRESET_LABELS.iter().map(|l| TemperaturePreset::new(*l)).collect()
}

/// Returns the preset a fresh mug starts with.
pub fn default_preset() -> Option<TemperaturePreset> {
    PRESET_LABELS.first().map(|l| TemperaturePreset::new(*l))
}

/// Looks up a preset by label (exact match).
pub fn find_preset(label: &str) -> Option<TemperaturePreset> {
    PRESET_LABELS
        .iter()
        .find(|l| **l == label)
        .map(|l| TemperaturePreset::new(*l))
}
