//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brew-core errors (this file)                                          │
//! │  ├── CoreError        - Selection against catalogs / presets           │
//! │  └── ValidationError  - A composition that cannot be saved             │
//! │                                                                         │
//! │  brew-db errors (separate crate)                                       │
//! │  └── DbError          - Document store failures                        │
//! │                                                                         │
//! │  brew-session errors                                                   │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised while editing the selection.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item id that is not present in the live catalog.
    ///
    /// ## When This Occurs
    /// - The UI sends a stale id after the catalog was reloaded
    /// - The id was typed by hand or came from another session
    #[error("{collection} has no item with id {id}")]
    NotInCatalog { collection: String, id: String },

    /// A temperature label that is not one of the embedded presets.
    #[error("Unknown temperature preset: {0}")]
    UnknownTemperature(String),

    /// No saved beverage carries the given id.
    #[error("Saved beverage not found: {0}")]
    SavedBeverageNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotInCatalog error for a collection and id.
    pub fn not_in_catalog(collection: impl Into<String>, id: impl Into<String>) -> Self {
        CoreError::NotInCatalog {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Composition and record validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of base, syrup, creamer is not selected.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Make Beverage"
    ///      │
    ///      ▼
    /// Check selection: base ✓  syrup ✗  creamer ✓
    ///      │
    ///      ▼
    /// MissingSelections { missing: ["syrup"] }
    ///      │
    ///      ▼
    /// Nothing is written, the mug stays as it was
    /// ```
    #[error("Missing selections: {}", missing.join(", "))]
    MissingSelections { missing: Vec<String> },

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a document that does not fit its record).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
