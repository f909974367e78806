//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::controller::{FlowStatus, StateCell};
use crate::error::CatalogResult;
use crate::models::Beer;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached collection, selection and review buffer
    pub catalog: Catalog,
    /// Initial load / reload
    pub load: FlowStatus,
    /// Description save
    pub description_save: FlowStatus,
    /// Review submit
    pub review_submit: FlowStatus,
    /// Content of the description textarea
    pub description_draft: String,
    /// Content of the review input
    pub review_draft: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection and show its first beer
    pub fn load_beers(&mut self, beers: Vec<Beer>) -> CatalogResult<()> {
        let result = self.catalog.load(beers);
        self.sync_description_draft();
        result
    }

    /// Show a beer picked from the side list
    pub fn select(&mut self, beer: Beer) {
        log::info!("selected beer {} ({})", beer.id, beer.name);
        self.catalog.select(beer);
        for status in [&mut self.description_save, &mut self.review_submit] {
            if !status.is_in_flight() {
                *status = FlowStatus::Idle;
            }
        }
        self.sync_description_draft();
    }

    /// Show the backend's copy of a patched beer.
    ///
    /// An unsaved description edit survives as long as the same beer stays selected.
    pub fn apply_update(&mut self, beer: Beer) {
        let same_beer = self.catalog.selected_id() == Some(beer.id);
        self.catalog.apply_update(beer);
        if !same_beer {
            self.sync_description_draft();
        }
    }

    /// Reset the description draft to the selected beer's description
    pub fn sync_description_draft(&mut self) {
        self.description_draft = self
            .catalog
            .selected()
            .map(|beer| beer.description.clone())
            .unwrap_or_default();
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl StateCell for AppStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}
