//! # Session Error Types
//!
//! Two layers:
//! - [`SessionError`]: what the session state returns to Rust callers
//! - [`ApiError`]: what a command hands to the UI (`code` + `message`)
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Brew Mug                               │
//! │                                                                         │
//! │  ValidationError ─► CoreError ─┐                                       │
//! │                                ├─► SessionError ─► ApiError ─► UI      │
//! │  sqlx / serde ────► DbError ───┘                                       │
//! │                                                                         │
//! │  UI receives:                                                          │
//! │  { "code": "NOT_FOUND", "message": "bases item not found: b9" }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are logged in full here and reach the UI with a generic
//! message.

use serde::Serialize;
use thiserror::Error;

use brew_core::{CoreError, ValidationError};
use brew_db::DbError;

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `make_beverage` was called while the session was busy.
    #[error("A beverage is already being saved")]
    SaveInFlight,

    /// `make_beverage` was called while another operation (such as `init`)
    /// held the session.
    #[error("The session is busy")]
    SessionBusy,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Missing selections: syrup"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown catalog item, preset or saved beverage
    NotFound,

    /// Input or selection validation failed
    ValidationError,

    /// Store operation failed
    DatabaseError,

    /// A save is already running for this session
    SaveInFlight,

    /// Another session operation is still running
    SessionBusy,

    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Store connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Serialization(e) => {
                tracing::error!("Document serialization failed: {}", e);
                ApiError::internal("Could not encode beverage")
            }
            other => {
                tracing::error!("Store operation failed: {}", other);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotInCatalog { collection, id } => {
                ApiError::not_found(&format!("{} item", collection), &id)
            }
            CoreError::UnknownTemperature(label) => ApiError::not_found("Temperature", &label),
            CoreError::SavedBeverageNotFound(id) => ApiError::not_found("Saved beverage", &id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::SaveInFlight => ApiError::new(
                ErrorCode::SaveInFlight,
                "A beverage is already being saved",
            ),
            SessionError::SessionBusy => {
                ApiError::new(ErrorCode::SessionBusy, "The session is busy")
            }
            SessionError::Core(e) => e.into(),
            SessionError::Db(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_in_catalog_maps_to_not_found() {
        let err: ApiError = CoreError::not_in_catalog("bases", "b9").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "bases item not found: b9");
    }

    #[test]
    fn test_missing_selections_maps_to_validation() {
        let err: ApiError = ValidationError::MissingSelections {
            missing: vec!["base".to_string(), "syrup".to_string()],
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Missing selections: base, syrup");
    }

    #[test]
    fn test_store_errors_hide_details() {
        let err: ApiError = DbError::QueryFailed("near \"SELEC\": syntax error".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_save_in_flight_serializes_code() {
        let err: ApiError = SessionError::SaveInFlight.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SAVE_IN_FLIGHT");
    }

    #[test]
    fn test_session_busy_has_its_own_code() {
        let err: ApiError = SessionError::SessionBusy.into();
        assert_eq!(err.code, ErrorCode::SessionBusy);
        assert_eq!(err.message, "The session is busy");

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SESSION_BUSY");
    }
}
