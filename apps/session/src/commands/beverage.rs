//! # Beverage Commands
//!
//! ## Save and Recall
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Make Beverage" ─► make_beverage ─► { saved, selection }              │
//! │                          │                                              │
//! │                          ├── missing parts → saved: null, nothing      │
//! │                          │                   written (selection.missing)│
//! │                          ├── save running  → SAVE_IN_FLIGHT            │
//! │                          ├── lock held     → SESSION_BUSY              │
//! │                          └── write failed  → DATABASE_ERROR            │
//! │                                                                         │
//! │  Saved list ─────► list_saved                                          │
//! │                                                                         │
//! │  Click entry ────► show_beverage(id) ─► selection loaded from entry    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use brew_core::SavedBeverage;

use crate::commands::selection::SelectionResponse;
use crate::error::ApiError;
use crate::state::{MakeOutcome, SessionState};

/// Result of pressing "Make Beverage".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeBeverageResponse {
    /// The stored beverage, or `None` when the mug was incomplete and
    /// nothing was written.
    pub saved: Option<SavedBeverage>,

    /// The mug afterwards: name cleared on a save, untouched otherwise.
    /// `missing` lists what kept an incomplete mug from being saved.
    pub selection: SelectionResponse,
}

/// Saves the current mug.
///
/// An incomplete mug is not an error: the state logs it and the response
/// comes back with `saved: None`.
pub async fn make_beverage(session: &SessionState) -> Result<MakeBeverageResponse, ApiError> {
    debug!("make_beverage command");

    let saved = match session.make_beverage().await? {
        MakeOutcome::Saved(saved) => Some(saved),
        MakeOutcome::Rejected(_) => None,
    };

    let selection = session.with_state(|s| SelectionResponse::from(s)).await;
    Ok(MakeBeverageResponse { saved, selection })
}

/// Lists saved beverages in the order they were made.
pub async fn list_saved(session: &SessionState) -> Vec<SavedBeverage> {
    session.with_state(|s| s.saved_beverages().to_vec()).await
}

/// Loads a saved beverage into the mug.
pub async fn show_beverage(
    session: &SessionState,
    id: &str,
) -> Result<SelectionResponse, ApiError> {
    debug!(id = %id, "show_beverage command");
    session
        .with_state_mut(|s| -> Result<SelectionResponse, ApiError> {
            s.show_saved(id)?;
            Ok(SelectionResponse::from(&*s))
        })
        .await
}
