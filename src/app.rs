//! Beer Catalog App
//!
//! Root component: side list on the left, detail pane of the selected beer on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{BeerDetail, BeerList, FlowStatusLine};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let store = Store::new(AppState::new());
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Fetch the collection on mount and on every reload
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading catalog, trigger={}", trigger);
        spawn_local(async move {
            let gateway = ctx.gateway();
            let _ = controller::load_catalog(&gateway, &store).await;
        });
    });

    view! {
        <div class="app-layout">
            <BeerList />
            <main class="main-content">
                <FlowStatusLine
                    status=Signal::derive(move || store.load().get())
                    pending="Loading beers..."
                    done=""
                />
                <BeerDetail />
            </main>
        </div>
    }
}
