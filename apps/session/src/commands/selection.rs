//! # Selection Commands
//!
//! Picker bindings. Each command edits the mug and returns it whole, so
//! the UI can re-render from a single response.

use serde::{Deserialize, Serialize};
use tracing::debug;

use brew_core::validation::missing_selections;
use brew_core::Selection;

use crate::error::ApiError;
use crate::state::{BeverageState, SessionState};

/// The current mug plus whether it can be saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub selection: Selection,

    /// Unselected parts, in the order they are reported (base, creamer, syrup).
    pub missing: Vec<String>,
}

impl SelectionResponse {
    pub fn can_make(&self) -> bool {
        self.missing.is_empty()
    }
}

impl From<&BeverageState> for SelectionResponse {
    fn from(state: &BeverageState) -> Self {
        SelectionResponse {
            selection: state.selection().clone(),
            missing: missing_selections(state.selection()),
        }
    }
}

/// Returns the current mug.
pub async fn get_selection(session: &SessionState) -> SelectionResponse {
    session.with_state(|s| SelectionResponse::from(s)).await
}

/// Sets the beverage name.
pub async fn set_name(session: &SessionState, name: String) -> SelectionResponse {
    debug!(name = %name, "set_name command");
    session
        .with_state_mut(|s| {
            s.set_name(name);
            SelectionResponse::from(&*s)
        })
        .await
}

/// Picks a temperature preset by label.
pub async fn select_temperature(
    session: &SessionState,
    label: &str,
) -> Result<SelectionResponse, ApiError> {
    debug!(label = %label, "select_temperature command");
    session
        .with_state_mut(|s| -> Result<SelectionResponse, ApiError> {
            s.select_temperature(label)?;
            Ok(SelectionResponse::from(&*s))
        })
        .await
}

/// Picks a base by id, or clears it with `None`.
pub async fn select_base(
    session: &SessionState,
    id: Option<&str>,
) -> Result<SelectionResponse, ApiError> {
    debug!(id = ?id, "select_base command");
    session
        .with_state_mut(|s| -> Result<SelectionResponse, ApiError> {
            match id {
                Some(id) => s.select_base(id)?,
                None => s.clear_base(),
            }
            Ok(SelectionResponse::from(&*s))
        })
        .await
}

/// Picks a syrup by id, or clears it with `None`.
pub async fn select_syrup(
    session: &SessionState,
    id: Option<&str>,
) -> Result<SelectionResponse, ApiError> {
    debug!(id = ?id, "select_syrup command");
    session
        .with_state_mut(|s| -> Result<SelectionResponse, ApiError> {
            match id {
                Some(id) => s.select_syrup(id)?,
                None => s.clear_syrup(),
            }
            Ok(SelectionResponse::from(&*s))
        })
        .await
}

/// Picks a creamer by id, or clears it with `None`.
pub async fn select_creamer(
    session: &SessionState,
    id: Option<&str>,
) -> Result<SelectionResponse, ApiError> {
    debug!(id = ?id, "select_creamer command");
    session
        .with_state_mut(|s| -> Result<SelectionResponse, ApiError> {
            match id {
                Some(id) => s.select_creamer(id)?,
                None => s.clear_creamer(),
            }
            Ok(SelectionResponse::from(&*s))
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::catalog::init_session;
    use crate::error::ErrorCode;
    use brew_db::{Document, MemoryStore};
    use serde_json::json;
    use std::sync::Arc;

    fn doc(key: &str, name: &str) -> Document {
        Document::new(key, json!({ "name": name }).as_object().cloned().unwrap())
    }

    async fn session() -> SessionState {
        let store = MemoryStore::new()
            .with_documents("bases", vec![doc("b1", "Espresso"), doc("b2", "Chai")])
            .with_documents("syrups", vec![doc("s1", "Vanilla")])
            .with_documents("creamers", vec![doc("c1", "Oat")]);
        let session = SessionState::with_store(Arc::new(store));
        init_session(&session).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_initial_selection_is_complete() {
        let response = get_selection(&session().await).await;

        assert!(response.can_make());
        assert_eq!(response.selection.name, "");
    }

    #[tokio::test]
    async fn test_clearing_reports_missing() {
        let session = session().await;

        select_base(&session, None).await.unwrap();
        let response = select_syrup(&session, None).await.unwrap();

        assert!(!response.can_make());
        assert_eq!(response.missing, vec!["base", "syrup"]);
    }

    #[tokio::test]
    async fn test_select_and_name() {
        let session = session().await;

        select_base(&session, Some("b2")).await.unwrap();
        select_temperature(&session, "Iced").await.unwrap();
        let response = set_name(&session, "Chai Latte".to_string()).await;

        assert_eq!(response.selection.base.unwrap().id, "b2");
        assert_eq!(response.selection.temperature.unwrap().label(), "Iced");
        assert_eq!(response.selection.name, "Chai Latte");
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        let session = session().await;

        let err = select_creamer(&session, Some("c9")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = select_temperature(&session, "Boiling").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
