//! View Flows
//!
//! The three user-visible flows: initial load, description save and review
//! submit. Each one records its progress in a [`FlowStatus`] of the app state
//! and re-renders through the store.
//!
//! Flows never hold the state across an await, so a response that arrives
//! late simply overwrites whatever is selected at that moment.

use crate::api::BeerGateway;
use crate::error::{CatalogError, CatalogResult};
use crate::store::AppState;

/// Progress of one flow
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FlowStatus {
    #[default]
    Idle,
    InFlight,
    Done,
    Failed(CatalogError),
}

impl FlowStatus {
    pub fn finished<T>(result: &CatalogResult<T>) -> Self {
        match result {
            Ok(_) => FlowStatus::Done,
            Err(err) => FlowStatus::Failed(err.clone()),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, FlowStatus::InFlight)
    }
}

/// Synchronous access to the application state
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

/// Fetch the collection and show its first beer
pub async fn load_catalog(gateway: &impl BeerGateway, state: &impl StateCell) -> CatalogResult<()> {
    state.with_state(|s| s.load = FlowStatus::InFlight);

    let result = match gateway.list_all().await {
        Ok(beers) => {
            let count = beers.len();
            state.with_state(|s| s.load_beers(beers)).map(|()| count)
        }
        Err(err) => Err(err),
    };

    match &result {
        Ok(count) => log::info!("loaded {} beers", count),
        Err(err) => log::error!("catalog load failed: {}", err),
    }
    state.with_state(|s| s.load = FlowStatus::finished(&result));
    result.map(|_| ())
}

/// Send the description draft of the selected beer
pub async fn save_description(gateway: &impl BeerGateway, state: &impl StateCell) -> CatalogResult<()> {
    let target = state.with_state(|s| {
        s.description_save = FlowStatus::InFlight;
        s.catalog.selected_id().map(|id| (id, s.description_draft.clone()))
    });

    let result = async move {
        let (id, text) = target.ok_or(CatalogError::NoSelection)?;
        let updated = gateway.update_description(id, &text).await?;
        log::info!("description of beer {} updated", updated.id);
        state.with_state(|s| {
            s.apply_update(updated);
            s.sync_description_draft();
        });
        Ok::<(), CatalogError>(())
    }
    .await;

    if let Err(err) = &result {
        log::error!("description save failed: {}", err);
    }
    state.with_state(|s| s.description_save = FlowStatus::finished(&result));
    result
}

/// Stage the review draft in front of the buffer and send the whole buffer.
///
/// The draft is cleared and the buffer keeps the staged review even when
/// the request fails.
pub async fn submit_review(gateway: &impl BeerGateway, state: &impl StateCell) -> CatalogResult<()> {
    let submission = state.with_state(|s| {
        s.review_submit = FlowStatus::InFlight;
        let text = std::mem::take(&mut s.review_draft);
        if s.catalog.is_loaded() {
            s.catalog.add_review_locally(text);
        }
        s.catalog.review_submission()
    });

    let result = async move {
        let (id, reviews) = submission?;
        let updated = gateway.update_reviews(id, &reviews).await?;
        log::info!("beer {} now has {} reviews", updated.id, updated.reviews.len());
        state.with_state(|s| s.apply_update(updated));
        Ok::<(), CatalogError>(())
    }
    .await;

    if let Err(err) = &result {
        log::error!("review submit failed: {}", err);
    }
    state.with_state(|s| s.review_submit = FlowStatus::finished(&result));
    result
}
