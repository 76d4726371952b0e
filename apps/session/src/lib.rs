//! # Brew Session
//!
//! Session layer of the Brew Mug beverage composer: owns the beverage
//! state and exposes it to a UI as commands.
//!
//! ## Module Organization
//! ```text
//! brew_session/
//! ├── lib.rs            ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── beverage.rs   ◄─── BeverageState: init / make / show
//! │   ├── session.rs    ◄─── SessionState: shared handle
//! │   └── config.rs     ◄─── SessionConfig
//! ├── commands/
//! │   ├── catalog.rs    ◄─── init_session, get_catalogs
//! │   ├── selection.rs  ◄─── picker bindings
//! │   └── beverage.rs   ◄─── make / list / show
//! └── error.rs          ◄─── SessionError, ApiError
//! ```
//!
//! ## Startup
//! ```rust,ignore
//! brew_session::init_tracing();
//! let session = brew_session::start_session(&SessionConfig::from_env()).await?;
//! let catalogs = commands::catalog::get_catalogs(&session).await;
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use brew_db::{Database, DbError, DocumentStore, MemoryStore};

pub use error::{ApiError, ErrorCode, SessionError};
pub use state::{BeverageState, MakeOutcome, SessionConfig, SessionState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=brew=trace` - Show trace for brew crates only
/// - Default: `info,brew=debug,sqlx=warn`
///
/// A second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,brew=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Opens the document store described by `config`.
///
/// ## Startup Sequence
/// 1. In-memory flag set → empty [`MemoryStore`]
/// 2. Otherwise resolve the database path (creating its directory)
/// 3. Connect and run migrations
pub async fn open_store(config: &SessionConfig) -> Result<Arc<dyn DocumentStore>, DbError> {
    if config.in_memory {
        info!("Using in-memory document store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let path = config
        .resolve_database_path()
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;
    info!(?path, "Database path determined");

    let db = Database::new(config.db_config(path)).await?;
    info!("Database connected and migrations applied");

    Ok(Arc::new(db))
}

/// Opens the store and loads the session.
pub async fn start_session(config: &SessionConfig) -> Result<SessionState, SessionError> {
    info!("Starting Brew Mug session");

    let store = open_store(config).await?;
    let session = SessionState::with_store(store);
    session.init().await?;

    info!("Session ready");
    Ok(session)
}
