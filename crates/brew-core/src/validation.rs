//! # Validation Module
//!
//! Checks run before a composition is written and when documents are mapped
//! into records.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI                                                           │
//! │  └── Pickers only offer catalog items                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── validate_selection: base, creamer, syrup all chosen               │
//! │  └── validate_document_key: store keys are never empty                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Document store                                               │
//! │  └── Assigns the key, persists the JSON fields                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::selection::Selection;
use crate::DEFAULT_BEVERAGE_NAME;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that base, creamer and syrup are all selected.
///
/// ## Returns
/// * `Ok(())` - The mug can be saved
/// * `Err(MissingSelections)` - Lists every missing selection, in the order
///   base, creamer, syrup
///
/// ## Example
/// ```rust
/// use brew_core::validation::validate_selection;
/// use brew_core::Selection;
///
/// let err = validate_selection(&Selection::default()).unwrap_err();
/// assert_eq!(err.to_string(), "Missing selections: base, creamer, syrup");
/// ```
pub fn validate_selection(selection: &Selection) -> ValidationResult<()> {
    let missing = missing_selections(selection);

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingSelections { missing })
    }
}

/// Names the required selections that are not chosen yet.
pub fn missing_selections(selection: &Selection) -> Vec<String> {
    let mut missing = Vec::new();

    if selection.base.is_none() {
        missing.push("base".to_string());
    }
    if selection.creamer.is_none() {
        missing.push("creamer".to_string());
    }
    if selection.syrup.is_none() {
        missing.push("syrup".to_string());
    }

    missing
}

/// Returns the name a beverage is saved under.
///
/// An empty name becomes [`DEFAULT_BEVERAGE_NAME`]; anything else is kept
/// verbatim.
pub fn resolve_beverage_name(name: &str) -> String {
    if name.is_empty() {
        DEFAULT_BEVERAGE_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Validates a document key handed back by the store.
pub fn validate_document_key(key: &str) -> ValidationResult<()> {
    if key.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Base, Creamer, Syrup};

    #[test]
    fn test_validate_selection_complete() {
        let selection = Selection {
            base: Some(Base::new("b1", "Espresso")),
            syrup: Some(Syrup::new("s1", "Vanilla")),
            creamer: Some(Creamer::new("c1", "Oat")),
            ..Selection::default()
        };
        assert!(validate_selection(&selection).is_ok());
    }

    #[test]
    fn test_validate_selection_reports_each_missing_field() {
        let selection = Selection {
            base: Some(Base::new("b1", "Espresso")),
            ..Selection::default()
        };

        let err = validate_selection(&selection).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingSelections {
                missing: vec!["creamer".to_string(), "syrup".to_string()],
            }
        );
    }

    #[test]
    fn test_resolve_beverage_name() {
        assert_eq!(resolve_beverage_name(""), "Unnamed Beverage");
        assert_eq!(resolve_beverage_name("Night Owl"), "Night Owl");
        assert_eq!(resolve_beverage_name(" "), " ");
    }

    #[test]
    fn test_validate_document_key() {
        assert!(validate_document_key("abc").is_ok());
        assert!(validate_document_key("").is_err());
        assert!(validate_document_key("   ").is_err());
    }
}
