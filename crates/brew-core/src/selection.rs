//! # Selection ("the mug")
//!
//! The in-progress composition a user edits through the pickers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Lifecycle                                  │
//! │                                                                         │
//! │  init ──────► first item of each catalog, first temperature            │
//! │                                                                         │
//! │  pickers ───► base / syrup / creamer / temperature / name edited       │
//! │                                                                         │
//! │  compose ───► Beverage (name defaulted)  ──► store write               │
//! │                                                                         │
//! │  load_saved ► every field overwritten from a SavedBeverage             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::temperature::{self, TemperaturePreset};
use crate::types::{Base, Beverage, Creamer, SavedBeverage, Syrup};
use crate::validation::{
    missing_selections, resolve_beverage_name, validate_selection, ValidationResult,
};

/// The current mug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Selection {
    /// Free-text name typed by the user. Empty until set.
    pub name: String,
    pub temperature: Option<TemperaturePreset>,
    pub base: Option<Base>,
    pub syrup: Option<Syrup>,
    pub creamer: Option<Creamer>,
    /// Saved beverage currently shown in the mug, if any.
    pub viewing: Option<SavedBeverage>,
}

impl Selection {
    /// Creates an empty mug served at the default temperature.
    pub fn new() -> Self {
        Selection {
            temperature: temperature::default_preset(),
            ..Selection::default()
        }
    }

    /// Builds the beverage this mug would be saved as.
    ///
    /// ## Errors
    /// `MissingSelections` when base, creamer or syrup is not chosen.
    pub fn compose(&self) -> ValidationResult<Beverage> {
        let (Some(base), Some(syrup), Some(creamer)) = (&self.base, &self.syrup, &self.creamer)
        else {
            return Err(ValidationError::MissingSelections {
                missing: missing_selections(self),
            });
        };

        Ok(Beverage {
            name: resolve_beverage_name(&self.name),
            temperature: self.temperature.clone(),
            base: base.clone(),
            syrup: syrup.clone(),
            creamer: creamer.clone(),
        })
    }

    /// Overwrites every field from a saved beverage.
    ///
    /// The embedded base, syrup and creamer are used as stored; they are
    /// not looked up in the live catalogs.
    pub fn load_saved(&mut self, saved: SavedBeverage) {
        let beverage = &saved.beverage;
        self.name = beverage.name.clone();
        self.temperature = beverage.temperature.clone();
        self.base = Some(beverage.base.clone());
        self.creamer = Some(beverage.creamer.clone());
        self.syrup = Some(beverage.syrup.clone());
        self.viewing = Some(saved);
    }

    /// Returns true when base, syrup and creamer are all chosen.
    pub fn is_complete(&self) -> bool {
        validate_selection(self).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_mug() -> Selection {
        Selection {
            base: Some(Base::new("b1", "Espresso")),
            syrup: Some(Syrup::new("s1", "Vanilla")),
            creamer: Some(Creamer::new("c1", "Oat")),
            ..Selection::new()
        }
    }

    #[test]
    fn test_new_starts_hot() {
        let mug = Selection::new();
        assert_eq!(mug.temperature, Some(TemperaturePreset::new("Hot")));
        assert!(mug.name.is_empty());
        assert!(!mug.is_complete());
    }

    #[test]
    fn test_compose_defaults_name() {
        let beverage = full_mug().compose().unwrap();
        assert_eq!(beverage.name, "Unnamed Beverage");
        assert_eq!(beverage.base.id, "b1");
        assert_eq!(beverage.temperature.unwrap().label(), "Hot");
    }

    #[test]
    fn test_compose_keeps_given_name() {
        let mut mug = full_mug();
        mug.name = "Night Owl".to_string();
        assert_eq!(mug.compose().unwrap().name, "Night Owl");
    }

    #[test]
    fn test_compose_rejects_incomplete_mug() {
        let mut mug = full_mug();
        mug.creamer = None;

        let err = mug.compose().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingSelections {
                missing: vec!["creamer".to_string()],
            }
        );
    }

    #[test]
    fn test_load_saved_overwrites_everything() {
        let mut mug = full_mug();
        let saved = SavedBeverage::new(
            "bev-7",
            Beverage {
                name: "Iced Mocha".to_string(),
                temperature: Some(TemperaturePreset::new("Iced")),
                base: Base::new("b2", "Cold Brew"),
                syrup: Syrup::new("s2", "Mocha"),
                creamer: Creamer::new("c2", "Whole Milk"),
            },
        );

        mug.load_saved(saved.clone());

        assert_eq!(mug.name, "Iced Mocha");
        assert_eq!(mug.temperature, Some(TemperaturePreset::new("Iced")));
        assert_eq!(mug.base.as_ref().unwrap().id, "b2");
        assert_eq!(mug.syrup.as_ref().unwrap().id, "s2");
        assert_eq!(mug.creamer.as_ref().unwrap().id, "c2");
        assert_eq!(mug.viewing, Some(saved));
    }
}
