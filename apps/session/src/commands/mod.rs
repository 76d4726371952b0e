//! # Commands Module
//!
//! The surface a UI binds to. Every command takes the [`SessionState`]
//! handle, returns a serializable response and fails with [`ApiError`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── catalog.rs    ◄─── init_session, get_catalogs
//! ├── selection.rs  ◄─── get_selection, set_name, select_*
//! └── beverage.rs   ◄─── make_beverage, list_saved, show_beverage
//! ```
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI event                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  commands::beverage::make_beverage(&session)                           │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  SessionState ──► BeverageState ──► DocumentStore                      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Result<MakeBeverageResponse, ApiError>  (JSON to the UI)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`SessionState`]: crate::state::SessionState
//! [`ApiError`]: crate::error::ApiError

pub mod beverage;
pub mod catalog;
pub mod selection;
