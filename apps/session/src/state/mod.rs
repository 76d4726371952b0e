//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  SessionConfig ──► open_store() ──► Arc<dyn DocumentStore>             │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                    SessionState (Arc<tokio Mutex<BeverageState>>)      │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                    BeverageState                                       │
//! │                    temperatures / bases / syrups / creamers            │
//! │                    saved_beverages / selection                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod beverage;
mod config;
mod session;

pub use beverage::{BeverageState, MakeOutcome};
pub use config::SessionConfig;
pub use session::SessionState;
