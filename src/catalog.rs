//! Catalog Cache
//!
//! Client-side copy of the backend collection, the selected beer and the
//! review buffer staged for the next submit.

use crate::error::{CatalogError, CatalogResult};
use crate::models::Beer;
use crate::render::{self, ListEntry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    beers: Vec<Beer>,
    selected: Option<Beer>,
    pending_reviews: Vec<String>,
}

impl Catalog {
    /// Replace the collection and select its first beer.
    ///
    /// An empty collection clears the selection and is reported as
    /// [`CatalogError::EmptyCollection`].
    pub fn load(&mut self, beers: Vec<Beer>) -> CatalogResult<()> {
        self.beers = beers;
        match self.beers.first().cloned() {
            Some(first) => {
                self.select(first);
                Ok(())
            }
            None => {
                self.selected = None;
                self.pending_reviews.clear();
                Err(CatalogError::EmptyCollection)
            }
        }
    }

    pub fn select(&mut self, beer: Beer) {
        self.pending_reviews = beer.reviews.clone();
        self.selected = Some(beer);
    }

    /// Stage a review in front of the buffer without contacting the backend
    pub fn add_review_locally(&mut self, text: impl Into<String>) {
        self.pending_reviews.insert(0, text.into());
    }

    /// Show the backend's copy of a patched beer.
    ///
    /// The collection entry is left as it was: the side list keeps the
    /// pre-update data until the next full load.
    pub fn apply_update(&mut self, updated: Beer) {
        self.select(updated);
    }

    /// Id and full review buffer to send for the selected beer
    pub fn review_submission(&self) -> CatalogResult<(u32, Vec<String>)> {
        let id = self.selected_id().ok_or(CatalogError::NoSelection)?;
        Ok((id, self.pending_reviews().to_vec()))
    }

    pub fn beers(&self) -> &[Beer] {
        &self.beers
    }

    /// Collection entry with the given id
    pub fn beer(&self, id: u32) -> Option<&Beer> {
        self.beers.iter().find(|beer| beer.id == id)
    }

    pub fn selected(&self) -> Option<&Beer> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected.as_ref().map(|beer| beer.id)
    }

    pub fn pending_reviews(&self) -> &[String] {
        &self.pending_reviews
    }

    pub fn is_loaded(&self) -> bool {
        self.selected.is_some()
    }

    pub fn side_list(&self) -> Vec<ListEntry> {
        render::side_list(&self.beers)
    }
}
