//! Beer Detail Component
//!
//! Detail pane of the selected beer.

use leptos::prelude::*;

use crate::components::{DescriptionEditor, ReviewForm, ReviewList};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BeerDetail() -> impl IntoView {
    let store = use_app_store();

    let name = move || {
        store.catalog().read().selected().map(|beer| beer.name.clone()).unwrap_or_default()
    };
    let image_url = move || {
        store.catalog().read().selected().map(|beer| beer.image_url.clone()).unwrap_or_default()
    };

    view! {
        <Show when=move || store.catalog().read().is_loaded()>
            <section class="beer-details">
                <h2>{name}</h2>
                <img id="image" src=image_url alt=name />
                <DescriptionEditor />
                <h3>"Reviews"</h3>
                <ReviewForm />
                <ReviewList />
            </section>
        </Show>
    }
}
