//! # Session State
//!
//! Shared handle over one [`BeverageState`].
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Access Rules                                 │
//! │                                                                         │
//! │  read / edit ─────► lock().await        waits its turn                 │
//! │                                                                         │
//! │  init ────────────► lock().await        held across the store reads    │
//! │                                                                         │
//! │  make_beverage ───► try_lock()          saving → SaveInFlight          │
//! │                                          other  → SessionBusy           │
//! │                                          (a second click never writes  │
//! │                                           a duplicate)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is a `tokio::sync::Mutex` because it is held across store I/O.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use brew_db::DocumentStore;

use crate::error::SessionError;
use crate::state::beverage::{BeverageState, MakeOutcome};

/// Cloneable handle to the session's beverage state.
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<Mutex<BeverageState>>,
    /// Set while `make_beverage` holds the lock.
    saving: Arc<AtomicBool>,
}

/// Clears the saving flag when the save finishes or is dropped.
struct SavingGuard<'a>(&'a AtomicBool);

impl<'a> SavingGuard<'a> {
    fn set(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        SavingGuard(flag)
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SessionState {
    /// Wraps an existing state.
    pub fn new(state: BeverageState) -> Self {
        SessionState {
            inner: Arc::new(Mutex::new(state)),
            saving: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates an uninitialized session over a store.
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        SessionState::new(BeverageState::new(store))
    }

    /// Runs a closure with read access to the state.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = session.with_state(|s| s.saved_beverages().len()).await;
    /// ```
    pub async fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BeverageState) -> R,
    {
        let state = self.inner.lock().await;
        f(&state)
    }

    /// Runs a closure with write access to the state.
    pub async fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BeverageState) -> R,
    {
        let mut state = self.inner.lock().await;
        f(&mut state)
    }

    /// Loads catalogs and saved beverages.
    pub async fn init(&self) -> Result<(), SessionError> {
        let mut state = self.inner.lock().await;
        state.init().await?;
        Ok(())
    }

    /// Saves the current mug unless another session operation is running.
    ///
    /// ## Errors
    /// - `SaveInFlight` when an earlier save has not finished
    /// - `SessionBusy` when anything else holds the state (an `init` still
    ///   reading, for instance)
    /// - `Db` when the store write fails
    pub async fn make_beverage(&self) -> Result<MakeOutcome, SessionError> {
        let mut state = self.inner.try_lock().map_err(|_| {
            if self.saving.load(Ordering::SeqCst) {
                debug!("make_beverage refused: save in flight");
                SessionError::SaveInFlight
            } else {
                debug!("make_beverage refused: session busy");
                SessionError::SessionBusy
            }
        })?;

        let _saving = SavingGuard::set(&self.saving);
        Ok(state.make_beverage().await?)
    }
}
