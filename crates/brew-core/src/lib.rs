//! # brew-core: Pure Domain Model for Brew Mug
//!
//! This crate holds the records a user composes a beverage from and the
//! rules for turning a selection into a storable beverage. It has zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Brew Mug Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI (pickers, mug preview)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               brew-session (BeverageState)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ brew-core (THIS CRATE) ★                        │   │
//! │  │   types (Base, Syrup, Creamer, Beverage)                        │   │
//! │  │   selection (the mug)   validation   temperature presets        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                brew-db (Document Store Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog items, beverages and the [`CatalogItem`] trait
//! - [`selection`] - The in-progress composition ("the mug")
//! - [`temperature`] - Build-time temperature presets
//! - [`validation`] - Composition checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use brew_core::{Base, Creamer, Selection, Syrup, DEFAULT_BEVERAGE_NAME};
//!
//! let mut mug = Selection::default();
//! mug.base = Some(Base::new("b1", "Espresso"));
//! mug.syrup = Some(Syrup::new("s1", "Vanilla"));
//! mug.creamer = Some(Creamer::new("c1", "Oat"));
//!
//! let beverage = mug.compose().unwrap();
//! assert_eq!(beverage.name, DEFAULT_BEVERAGE_NAME);
//! ```

pub mod error;
pub mod selection;
pub mod temperature;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use selection::Selection;
pub use temperature::TemperaturePreset;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name given to a beverage saved without one.
pub const DEFAULT_BEVERAGE_NAME: &str = "Unnamed Beverage";

/// Collection holding saved beverages.
pub const BEVERAGES_COLLECTION: &str = "beverages";

/// Collection holding base catalog items.
pub const BASES_COLLECTION: &str = "bases";

/// Collection holding syrup catalog items.
pub const SYRUPS_COLLECTION: &str = "syrups";

/// Collection holding creamer catalog items.
pub const CREAMERS_COLLECTION: &str = "creamers";
