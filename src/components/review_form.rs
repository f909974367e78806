//! Review Form Component
//!
//! Input for a new review; the review is staged locally and the full list is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FlowStatusLine;
use crate::context::use_app_context;
use crate::controller;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ReviewForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let submitting = move || store.review_submit().read().is_in_flight();

    let submit = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let gateway = ctx.gateway();
            let _ = controller::submit_review(&gateway, &store).await;
        });
    };

    view! {
        <form class="review-form">
            <textarea
                placeholder="Add your review"
                prop:value=move || store.review_draft().get()
                on:input=move |ev| store.review_draft().set(event_target_value(&ev))
            ></textarea>
            <button id="submit" type="button" disabled=submitting on:click=submit>"Submit"</button>
            <FlowStatusLine
                status=Signal::derive(move || store.review_submit().get())
                pending="Submitting..."
                done=""
            />
        </form>
    }
}
