//! # Domain Types
//!
//! Records used throughout Brew Mug.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog items (read-only for the session, fetched in bulk)            │
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐                   │
//! │  │    Base     │   │    Syrup    │   │   Creamer   │                   │
//! │  │  id (store) │   │  id (store) │   │  id (store) │                   │
//! │  │  name       │   │  name       │   │  name       │                   │
//! │  │  color?     │   │  color?     │   │  color?     │                   │
//! │  └─────────────┘   └─────────────┘   └─────────────┘                   │
//! │                                                                         │
//! │  ┌─────────────────────────────┐   ┌─────────────────────────────┐     │
//! │  │         Beverage            │   │       SavedBeverage         │     │
//! │  │  name, temp, base,          │──►│  id (store-assigned)        │     │
//! │  │  syrup, creamer (no id)     │   │  + every Beverage field     │     │
//! │  └─────────────────────────────┘   └─────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every `id` is the key the document store assigned. Nothing in this
//! workspace invents one.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::temperature::TemperaturePreset;
use crate::{BASES_COLLECTION, CREAMERS_COLLECTION, SYRUPS_COLLECTION};

// =============================================================================
// Catalog Item Trait
// =============================================================================

/// A named, store-identified option the user can pick for the mug.
///
/// Implemented by [`Base`], [`Syrup`] and [`Creamer`]. The associated
/// constants tie each record type to its collection so repositories can be
/// written once.
pub trait CatalogItem:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection the items are read from.
    const COLLECTION: &'static str;

    /// Singular name used in diagnostics ("base", "syrup", ...).
    const KIND: &'static str;

    /// Store-assigned identifier.
    fn id(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;
}

macro_rules! catalog_item {
    ($ty:ident, $collection:expr, $kind:literal) => {
        impl $ty {
            /// Creates an item with a known store key.
            pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
                $ty {
                    id: id.into(),
                    name: name.into(),
                    color: None,
                }
            }

            /// Sets the display color.
            pub fn with_color(mut self, color: impl Into<String>) -> Self {
                self.color = Some(color.into());
                self
            }
        }

        impl CatalogItem for $ty {
            const COLLECTION: &'static str = $collection;
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

// =============================================================================
// Base
// =============================================================================

/// The drink a mug starts from (coffee, tea, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Base {
    /// Store-assigned key.
    pub id: String,

    /// Display name shown in the picker.
    pub name: String,

    /// Color used to paint the mug preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color: Option<String>,
}

catalog_item!(Base, BASES_COLLECTION, "base");

// =============================================================================
// Syrup
// =============================================================================

/// A flavoring added on top of the base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Syrup {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color: Option<String>,
}

catalog_item!(Syrup, SYRUPS_COLLECTION, "syrup");

// =============================================================================
// Creamer
// =============================================================================

/// A dairy or non-dairy creamer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Creamer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color: Option<String>,
}

catalog_item!(Creamer, CREAMERS_COLLECTION, "creamer");

// =============================================================================
// Beverage
// =============================================================================

/// A composed beverage, before the store has assigned it an id.
///
/// Catalog items are embedded by value (snapshot), so a saved beverage still
/// renders after its base, syrup or creamer leaves the live catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Beverage {
    pub name: String,
    #[serde(rename = "temp")]
    pub temperature: Option<TemperaturePreset>,
    pub base: Base,
    pub syrup: Syrup,
    pub creamer: Creamer,
}

// =============================================================================
// Saved Beverage
// =============================================================================

/// A beverage read back from, or just written to, the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedBeverage {
    /// Store-assigned key.
    pub id: String,

    #[serde(flatten)]
    pub beverage: Beverage,
}

impl SavedBeverage {
    /// Pairs a beverage with the key the store returned for it.
    pub fn new(id: impl Into<String>, beverage: Beverage) -> Self {
        SavedBeverage {
            id: id.into(),
            beverage,
        }
    }

    /// Display name of the saved beverage.
    #[inline]
    pub fn name(&self) -> &str {
        &self.beverage.name
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
