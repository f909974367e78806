//! View Models
//!
//! Pure builders for what the side list and review list display.
//! Components turn these into DOM nodes; all text ends up in text nodes,
//! so names and reviews are escaped by the renderer and never parsed as markup.

use crate::ident::dom_id;
use crate::models::Beer;

/// One entry of the side list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListEntry {
    /// Beer shown when the entry is clicked
    pub beer_id: u32,
    /// Element id of the `<li>`
    pub dom_id: String,
    /// Visible anchor text
    pub label: String,
}

/// One entry of the review list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewLine {
    pub position: usize,
    pub text: String,
}

pub fn list_entry(beer: &Beer) -> ListEntry {
    ListEntry {
        beer_id: beer.id,
        dom_id: dom_id(beer),
        label: beer.name.clone(),
    }
}

/// Side list entries in collection order
pub fn side_list(beers: &[Beer]) -> Vec<ListEntry> {
    beers.iter().map(list_entry).collect()
}

pub fn review_line(position: usize, text: &str) -> ReviewLine {
    ReviewLine { position, text: text.to_string() }
}

pub fn review_lines(reviews: &[String]) -> Vec<ReviewLine> {
    reviews
        .iter()
        .enumerate()
        .map(|(position, text)| review_line(position, text))
        .collect()
}
