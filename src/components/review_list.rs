//! Review List Component

use leptos::prelude::*;

use crate::render::{review_lines, ReviewLine};
use crate::store::{use_app_store, AppStateStoreFields};

/// Reviews of the selected beer, newest first
#[component]
pub fn ReviewList() -> impl IntoView {
    let store = use_app_store();

    let lines = move || {
        store
            .catalog()
            .read()
            .selected()
            .map(|beer| review_lines(&beer.reviews))
            .unwrap_or_default()
    };

    view! {
        <ul class="reviews">
            <For
                each=lines
                key=|line: &ReviewLine| (line.position, line.text.clone())
                children=|line| view! { <li>{line.text}</li> }
            />
        </ul>
    }
}
