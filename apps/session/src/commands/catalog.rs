//! # Catalog Commands
//!
//! Startup loading and the option lists behind the pickers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use brew_core::{Base, Creamer, Syrup, TemperaturePreset};

use crate::error::ApiError;
use crate::state::{BeverageState, SessionState};

/// Everything a picker can offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogsResponse {
    pub temperatures: Vec<TemperaturePreset>,
    pub bases: Vec<Base>,
    pub syrups: Vec<Syrup>,
    pub creamers: Vec<Creamer>,
}

impl From<&BeverageState> for CatalogsResponse {
    fn from(state: &BeverageState) -> Self {
        CatalogsResponse {
            temperatures: state.temperatures().to_vec(),
            bases: state.bases().to_vec(),
            syrups: state.syrups().to_vec(),
            creamers: state.creamers().to_vec(),
        }
    }
}

/// Loads catalogs and saved beverages, then returns the catalogs.
///
/// Safe to call again; every list is re-read and the first item of each
/// catalog becomes selected again.
pub async fn init_session(session: &SessionState) -> Result<CatalogsResponse, ApiError> {
    debug!("init_session command");
    session.init().await?;
    Ok(session.with_state(|s| CatalogsResponse::from(s)).await)
}

/// Returns the catalogs as currently loaded.
pub async fn get_catalogs(session: &SessionState) -> CatalogsResponse {
    debug!("get_catalogs command");
    session.with_state(|s| CatalogsResponse::from(s)).await
}
