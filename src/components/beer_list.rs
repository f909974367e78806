//! Beer List Component
//!
//! Side list of the fetched collection. Clicking an entry shows that beer
//! without a network round-trip.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::StateCell;
use crate::render::list_entry;
use crate::store::{use_app_store, AppStateStoreFields};

/// Side list with a reload control
#[component]
pub fn BeerList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let loading = move || store.load().read().is_in_flight();

    view! {
        <aside class="side-list">
            <div class="side-list-header">
                <h3>"Beers"</h3>
                <button
                    class="reload-btn"
                    disabled=loading
                    on:click=move |_| ctx.reload()
                >
                    "Reload"
                </button>
            </div>
            <ul id="list-of-beers">
                <For
                    each=move || store.catalog().read().side_list()
                    key=|entry| entry.beer_id
                    children=move |entry| view! { <BeerListEntry beer_id=entry.beer_id /> }
                />
            </ul>
            <p class="item-count">{move || format!("{} beers", store.catalog().read().beers().len())}</p>
        </aside>
    }
}

/// A single `<li>` of the side list, following the collection entry with its id
#[component]
fn BeerListEntry(beer_id: u32) -> impl IntoView {
    let store = use_app_store();

    let entry = move || store.catalog().read().beer(beer_id).map(list_entry);
    let dom_id = move || entry().map(|e| e.dom_id).unwrap_or_default();
    let label = move || entry().map(|e| e.label).unwrap_or_default();
    let is_selected = move || store.catalog().read().selected_id() == Some(beer_id);

    view! {
        <li
            id=dom_id
            class=move || if is_selected() { "beer-entry selected" } else { "beer-entry" }
        >
            <a
                href="#"
                on:click=move |ev| {
                    ev.prevent_default();
                    let beer = store.catalog().read().beer(beer_id).cloned();
                    if let Some(beer) = beer {
                        store.with_state(|s| s.select(beer));
                    }
                }
            >
                {label}
            </a>
        </li>
    }
}
