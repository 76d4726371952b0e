//! # Beverage State
//!
//! The session's catalogs, saved beverages and current mug, plus the three
//! operations the UI drives: `init`, `make_beverage`, `show_beverage`.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Beverage State Operations                            │
//! │                                                                         │
//! │  UI Action              Operation            State Change               │
//! │  ─────────              ─────────            ────────────               │
//! │                                                                         │
//! │  App start ───────────► init() ────────────► catalogs + saved loaded,  │
//! │                          (4 store reads)      first item of each       │
//! │                                               catalog selected         │
//! │                                                                         │
//! │  Pickers ─────────────► select_*/set_name ─► selection edited          │
//! │                                                                         │
//! │  "Make Beverage" ─────► make_beverage() ───► store insert, appended    │
//! │                          (1 store write)      to saved, name cleared   │
//! │                                                                         │
//! │  Click saved entry ───► show_beverage() ───► selection overwritten     │
//! │                          (no store access)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation takes `&mut self`, so one owner can never run two of them
//! at once. Sharing across tasks goes through [`super::SessionState`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use brew_core::temperature::{self, TemperaturePreset};
use brew_core::{
    Base, CatalogItem, CoreError, CoreResult, Creamer, SavedBeverage, Selection, Syrup,
    ValidationError,
};
use brew_db::{BeverageRepository, CatalogRepository, DbResult, DocumentStore};

/// Result of [`BeverageState::make_beverage`].
#[derive(Debug, Clone, PartialEq)]
pub enum MakeOutcome {
    /// Written to the store and appended to the saved list.
    Saved(SavedBeverage),

    /// Base, creamer or syrup was missing. Nothing was written and the
    /// state is unchanged.
    Rejected(ValidationError),
}

impl MakeOutcome {
    /// Returns the saved beverage, if the save happened.
    pub fn saved(&self) -> Option<&SavedBeverage> {
        match self {
            MakeOutcome::Saved(saved) => Some(saved),
            MakeOutcome::Rejected(_) => None,
        }
    }
}

/// Session-scoped beverage state.
pub struct BeverageState {
    store: Arc<dyn DocumentStore>,
    temperatures: Vec<TemperaturePreset>,
    bases: Vec<Base>,
    syrups: Vec<Syrup>,
    creamers: Vec<Creamer>,
    saved_beverages: Vec<SavedBeverage>,
    selection: Selection,
}

impl std::fmt::Debug for BeverageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeverageState")
            .field("bases", &self.bases.len())
            .field("syrups", &self.syrups.len())
            .field("creamers", &self.creamers.len())
            .field("saved_beverages", &self.saved_beverages.len())
            .field("selection", &self.selection)
            .finish()
    }
}

impl BeverageState {
    /// Creates an empty state over a store.
    ///
    /// Temperatures are loaded from the built-in presets right away and the
    /// mug starts at the first one. Catalogs stay empty until [`init`].
    ///
    /// [`init`]: BeverageState::init
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        BeverageState {
            store,
            temperatures: temperature::presets(),
            bases: Vec::new(),
            syrups: Vec::new(),
            creamers: Vec::new(),
            saved_beverages: Vec::new(),
            selection: Selection::new(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Loads catalogs and saved beverages from the store.
    ///
    /// ## Sequence
    /// 1. bases, creamers, syrups are read (in that order)
    /// 2. the first item of each freshly read catalog becomes the current
    ///    selection, or none when the catalog is empty
    /// 3. saved beverages are read
    ///
    /// ## Errors
    /// The first failing read is returned as-is. Fields assigned before the
    /// failure keep their new values; nothing is rolled back or retried.
    pub async fn init(&mut self) -> DbResult<()> {
        info!("Loading beverage catalogs");

        self.bases = self.catalog::<Base>().list().await?;
        self.creamers = self.catalog::<Creamer>().list().await?;
        self.syrups = self.catalog::<Syrup>().list().await?;

        self.selection.base = self.bases.first().cloned();
        self.selection.creamer = self.creamers.first().cloned();
        self.selection.syrup = self.syrups.first().cloned();

        self.saved_beverages = self.beverages().list().await?;

        info!(
            bases = self.bases.len(),
            syrups = self.syrups.len(),
            creamers = self.creamers.len(),
            saved = self.saved_beverages.len(),
            "Beverage state initialized"
        );
        Ok(())
    }

    /// Saves the current mug as a new beverage.
    ///
    /// ## Behavior
    /// - Missing base, creamer or syrup: logs a warning, writes nothing,
    ///   returns [`MakeOutcome::Rejected`]
    /// - Otherwise: inserts into `beverages`, appends the stored record to
    ///   the saved list and clears the name. Base, syrup, creamer and
    ///   temperature stay selected for the next beverage.
    ///
    /// ## Errors
    /// A failed store write is returned unchanged and the state is left
    /// untouched.
    pub async fn make_beverage(&mut self) -> DbResult<MakeOutcome> {
        let beverage = match self.selection.compose() {
            Ok(beverage) => beverage,
            Err(e) => {
                warn!(error = %e, "Cannot make beverage");
                return Ok(MakeOutcome::Rejected(e));
            }
        };

        let saved = self.beverages().insert(&beverage).await?;

        self.saved_beverages.push(saved.clone());
        self.selection.name.clear();

        debug!(id = %saved.id, total = self.saved_beverages.len(), "Beverage appended");
        Ok(MakeOutcome::Saved(saved))
    }

    /// Loads a saved beverage into the mug.
    ///
    /// Name, temperature, base, creamer and syrup are overwritten from
    /// `saved` as stored, even when those options have since left the live
    /// catalogs. The saved list is not touched.
    pub fn show_beverage(&mut self, saved: SavedBeverage) {
        debug!(id = %saved.id, "Showing saved beverage");
        self.selection.load_saved(saved);
    }

    /// Looks up a saved beverage by store id and shows it.
    pub fn show_saved(&mut self, id: &str) -> CoreResult<()> {
        let saved = self
            .find_saved(id)
            .cloned()
            .ok_or_else(|| CoreError::SavedBeverageNotFound(id.to_string()))?;
        self.show_beverage(saved);
        Ok(())
    }

    // =========================================================================
    // Selection editing (UI bindings)
    // =========================================================================

    /// Sets the free-text name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.selection.name = name.into();
    }

    /// Picks a temperature preset by label.
    pub fn select_temperature(&mut self, label: &str) -> CoreResult<()> {
        let preset = temperature::find_preset(label)
            .ok_or_else(|| CoreError::UnknownTemperature(label.to_string()))?;
        self.selection.temperature = Some(preset);
        Ok(())
    }

    /// Picks a base from the live catalog.
    pub fn select_base(&mut self, id: &str) -> CoreResult<()> {
        self.selection.base = Some(pick(&self.bases, id)?);
        Ok(())
    }

    /// Picks a syrup from the live catalog.
    pub fn select_syrup(&mut self, id: &str) -> CoreResult<()> {
        self.selection.syrup = Some(pick(&self.syrups, id)?);
        Ok(())
    }

    /// Picks a creamer from the live catalog.
    pub fn select_creamer(&mut self, id: &str) -> CoreResult<()> {
        self.selection.creamer = Some(pick(&self.creamers, id)?);
        Ok(())
    }

    /// Deselects the base.
    pub fn clear_base(&mut self) {
        self.selection.base = None;
    }

    /// Deselects the syrup.
    pub fn clear_syrup(&mut self) {
        self.selection.syrup = None;
    }

    /// Deselects the creamer.
    pub fn clear_creamer(&mut self) {
        self.selection.creamer = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn temperatures(&self) -> &[TemperaturePreset] {
        &self.temperatures
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn syrups(&self) -> &[Syrup] {
        &self.syrups
    }

    pub fn creamers(&self) -> &[Creamer] {
        &self.creamers
    }

    /// Saved beverages in insertion order.
    pub fn saved_beverages(&self) -> &[SavedBeverage] {
        &self.saved_beverages
    }

    /// Finds a saved beverage by its store id.
    pub fn find_saved(&self, id: &str) -> Option<&SavedBeverage> {
        self.saved_beverages.iter().find(|b| b.id == id)
    }

    /// The whole current mug.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn current_name(&self) -> &str {
        &self.selection.name
    }

    pub fn current_temperature(&self) -> Option<&TemperaturePreset> {
        self.selection.temperature.as_ref()
    }

    pub fn current_base(&self) -> Option<&Base> {
        self.selection.base.as_ref()
    }

    pub fn current_syrup(&self) -> Option<&Syrup> {
        self.selection.syrup.as_ref()
    }

    pub fn current_creamer(&self) -> Option<&Creamer> {
        self.selection.creamer.as_ref()
    }

    pub fn current_saved_beverage(&self) -> Option<&SavedBeverage> {
        self.selection.viewing.as_ref()
    }

    fn catalog<T: CatalogItem>(&self) -> CatalogRepository<T> {
        CatalogRepository::new(Arc::clone(&self.store))
    }

    fn beverages(&self) -> BeverageRepository {
        BeverageRepository::new(Arc::clone(&self.store))
    }
}

/// Finds a catalog item by id.
fn pick<T: CatalogItem>(items: &[T], id: &str) -> CoreResult<T> {
    let item = items
        .iter()
        .find(|item| item.id() == id)
        .cloned()
        .ok_or_else(|| CoreError::not_in_catalog(T::COLLECTION, id))?;

    debug!(kind = T::KIND, id, name = item.name(), "Selected");
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brew_db::{DbError, Document, Fields, MemoryStore};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap_or_default()
    }

    fn doc(key: &str, name: &str) -> Document {
        Document::new(key, fields(json!({ "name": name })))
    }

    /// bases [b1 Espresso], syrups [s1 Vanilla], creamers [c1 Oat]
    fn cafe_store() -> Arc<MemoryStore> {
        Arc::new(
            MemoryStore::new()
                .with_documents("bases", vec![doc("b1", "Espresso"), doc("b2", "Chai")])
                .with_documents("syrups", vec![doc("s1", "Vanilla"), doc("s2", "Caramel")])
                .with_documents("creamers", vec![doc("c1", "Oat"), doc("c2", "Whole Milk")]),
        )
    }

    async fn ready_state(store: Arc<MemoryStore>) -> BeverageState {
        let mut state = BeverageState::new(store);
        state.init().await.unwrap();
        state
    }

    /// Store whose reads fail for one collection and whose writes always fail.
    struct FailingStore {
        inner: MemoryStore,
        failing_collection: &'static str,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn list_collection(&self, collection: &str) -> DbResult<Vec<Document>> {
            if collection == self.failing_collection {
                return Err(DbError::QueryFailed(format!("{} unavailable", collection)));
            }
            self.inner.list_collection(collection).await
        }

        async fn insert_document(&self, _collection: &str, _fields: Fields) -> DbResult<String> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Err(DbError::ConnectionFailed("store offline".to_string()))
        }
    }

    // -------------------------------------------------------------------------
    // init
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_init_selects_first_of_each_catalog() {
        let state = ready_state(cafe_store()).await;

        assert_eq!(state.bases().len(), 2);
        assert_eq!(state.current_base().unwrap().id, "b1");
        assert_eq!(state.current_syrup().unwrap().id, "s1");
        assert_eq!(state.current_creamer().unwrap().id, "c1");
        assert_eq!(state.current_temperature().unwrap().label(), "Hot");
        assert!(state.saved_beverages().is_empty());
    }

    #[tokio::test]
    async fn test_init_with_empty_catalogs_selects_nothing() {
        let state = ready_state(Arc::new(MemoryStore::new())).await;

        assert!(state.current_base().is_none());
        assert!(state.current_syrup().is_none());
        assert!(state.current_creamer().is_none());
    }

    #[tokio::test]
    async fn test_init_loads_saved_beverages() {
        let store = Arc::new(MemoryStore::new().with_documents(
            "beverages",
            vec![Document::new(
                "bev-1",
                fields(json!({
                    "name": "Yesterday",
                    "temp": "Iced",
                    "base": {"id": "b1", "name": "Espresso"},
                    "syrup": {"id": "s1", "name": "Vanilla"},
                    "creamer": {"id": "c1", "name": "Oat"},
                })),
            )],
        ));

        let state = ready_state(store).await;
        assert_eq!(state.saved_beverages().len(), 1);
        assert_eq!(state.saved_beverages()[0].name(), "Yesterday");
    }

    #[tokio::test]
    async fn test_init_failure_leaves_partial_state() {
        let store = FailingStore {
            inner: MemoryStore::new()
                .with_documents("bases", vec![doc("b1", "Espresso")])
                .with_documents("creamers", vec![doc("c1", "Oat")]),
            failing_collection: "syrups",
            writes: AtomicUsize::new(0),
        };
        let mut state = BeverageState::new(Arc::new(store));

        let err = state.init().await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));

        // bases and creamers were read before the failure
        assert_eq!(state.bases().len(), 1);
        assert_eq!(state.creamers().len(), 1);
        // defaults are assigned after all three catalog reads
        assert!(state.current_base().is_none());
    }

    // -------------------------------------------------------------------------
    // make_beverage
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_make_beverage_scenario() {
        let store = cafe_store();
        let mut state = ready_state(store.clone()).await;

        let outcome = state.make_beverage().await.unwrap();
        let saved = outcome.saved().cloned().unwrap();

        assert_eq!(saved.name(), "Unnamed Beverage");
        assert_eq!(saved.beverage.temperature.as_ref().unwrap().label(), "Hot");
        assert_eq!(saved.beverage.base.id, "b1");
        assert_eq!(saved.beverage.syrup.id, "s1");
        assert_eq!(saved.beverage.creamer.id, "c1");
        assert_eq!(state.saved_beverages().len(), 1);

        let stored = store.list_collection("beverages").await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].key, saved.id);
        assert_eq!(stored[0].fields["name"], json!("Unnamed Beverage"));
        assert_eq!(stored[0].fields["temp"], json!("Hot"));
        assert_eq!(stored[0].fields["base"]["id"], json!("b1"));
    }

    #[tokio::test]
    async fn test_make_beverage_resets_only_the_name() {
        let mut state = ready_state(cafe_store()).await;
        state.set_name("Night Owl");
        state.select_base("b2").unwrap();
        state.select_temperature("Iced").unwrap();

        let outcome = state.make_beverage().await.unwrap();
        assert_eq!(outcome.saved().unwrap().name(), "Night Owl");

        assert_eq!(state.current_name(), "");
        assert_eq!(state.current_base().unwrap().id, "b2");
        assert_eq!(state.current_temperature().unwrap().label(), "Iced");
        assert_eq!(state.current_syrup().unwrap().id, "s1");
    }

    #[tokio::test]
    async fn test_make_beverage_appends_in_order() {
        let mut state = ready_state(cafe_store()).await;

        state.set_name("First");
        let first = state.make_beverage().await.unwrap().saved().cloned().unwrap();
        state.set_name("Second");
        let second = state.make_beverage().await.unwrap().saved().cloned().unwrap();

        assert_ne!(first.id, second.id);
        let names: Vec<&str> = state.saved_beverages().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_make_beverage_rejects_missing_selection() {
        let store = cafe_store();
        let mut state = ready_state(store.clone()).await;
        state.set_name("Half-made");
        state.clear_syrup();
        let before = state.selection().clone();

        let outcome = state.make_beverage().await.unwrap();

        assert_eq!(
            outcome,
            MakeOutcome::Rejected(ValidationError::MissingSelections {
                missing: vec!["syrup".to_string()],
            })
        );
        assert_eq!(store.insert_count(), 0);
        assert!(state.saved_beverages().is_empty());
        assert_eq!(state.selection(), &before);
    }

    #[tokio::test]
    async fn test_make_beverage_before_init_is_rejected() {
        let store = cafe_store();
        let mut state = BeverageState::new(store.clone());

        let outcome = state.make_beverage().await.unwrap();

        assert!(matches!(outcome, MakeOutcome::Rejected(_)));
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_make_beverage_write_failure_propagates() {
        let store = Arc::new(FailingStore {
            inner: MemoryStore::new()
                .with_documents("bases", vec![doc("b1", "Espresso")])
                .with_documents("syrups", vec![doc("s1", "Vanilla")])
                .with_documents("creamers", vec![doc("c1", "Oat")]),
            failing_collection: "none",
            writes: AtomicUsize::new(0),
        });
        let mut state = BeverageState::new(store.clone());
        state.init().await.unwrap();
        state.set_name("Lost");

        let err = state.make_beverage().await.unwrap_err();

        assert!(matches!(err, DbError::ConnectionFailed(_)));
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
        assert!(state.saved_beverages().is_empty());
        assert_eq!(state.current_name(), "Lost");
    }

    // -------------------------------------------------------------------------
    // show_beverage
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_round_trip_restores_selection() {
        let mut state = ready_state(cafe_store()).await;
        state.set_name("Keeper");
        state.select_base("b2").unwrap();
        state.select_creamer("c2").unwrap();
        state.select_temperature("Iced").unwrap();
        let before_save = state.selection().clone();

        let id = state.make_beverage().await.unwrap().saved().unwrap().id.clone();

        // scramble the mug
        state.select_base("b1").unwrap();
        state.select_syrup("s2").unwrap();
        state.select_temperature("Hot").unwrap();

        let saved = state.find_saved(&id).cloned().unwrap();
        state.show_beverage(saved.clone());

        assert_eq!(state.current_name(), before_save.name);
        assert_eq!(state.current_temperature(), before_save.temperature.as_ref());
        assert_eq!(state.current_base(), before_save.base.as_ref());
        assert_eq!(state.current_syrup(), before_save.syrup.as_ref());
        assert_eq!(state.current_creamer(), before_save.creamer.as_ref());
        assert_eq!(state.current_saved_beverage(), Some(&saved));
        assert_eq!(state.saved_beverages().len(), 1);
    }

    #[tokio::test]
    async fn test_show_beverage_does_not_resolve_against_catalog() {
        let mut state = ready_state(cafe_store()).await;
        let retired = SavedBeverage::new(
            "bev-old",
            brew_core::Beverage {
                name: "Retro".to_string(),
                temperature: None,
                base: Base::new("gone", "Discontinued Roast"),
                syrup: Syrup::new("s1", "Vanilla"),
                creamer: Creamer::new("c1", "Oat"),
            },
        );

        state.show_beverage(retired);

        assert_eq!(state.current_base().unwrap().id, "gone");
        assert!(state.current_temperature().is_none());
        assert!(state.saved_beverages().is_empty());
    }

    #[tokio::test]
    async fn test_show_saved_unknown_id() {
        let mut state = ready_state(cafe_store()).await;
        assert!(matches!(
            state.show_saved("nope"),
            Err(CoreError::SavedBeverageNotFound(_))
        ));
    }

    // -------------------------------------------------------------------------
    // selection editing
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_select_rejects_unknown_ids() {
        let mut state = ready_state(cafe_store()).await;

        assert!(matches!(
            state.select_base("b9"),
            Err(CoreError::NotInCatalog { .. })
        ));
        assert!(matches!(
            state.select_temperature("Lukewarm"),
            Err(CoreError::UnknownTemperature(_))
        ));
        assert_eq!(state.current_base().unwrap().id, "b1");
    }

    #[tokio::test]
    async fn test_select_temperature_matches_built_in_presets() {
        let mut state = ready_state(cafe_store()).await;

        for preset in state.temperatures().to_vec() {
            state.select_temperature(preset.label()).unwrap();
            assert_eq!(state.current_temperature(), Some(&preset));
        }

        // labels match exactly
        assert!(state.select_temperature("iced").is_err());
        assert_eq!(state.current_temperature().unwrap().label(), "Iced");
    }
}
