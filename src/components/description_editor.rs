//! Description Editor Component
//!
//! Textarea bound to the description draft, saved with a PATCH.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::FlowStatusLine;
use crate::context::use_app_context;
use crate::controller;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DescriptionEditor() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let saving = move || store.description_save().read().is_in_flight();

    let save = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let gateway = ctx.gateway();
            let _ = controller::save_description(&gateway, &store).await;
        });
    };

    view! {
        <form class="description">
            <textarea
                prop:value=move || store.description_draft().get()
                on:input=move |ev| {
                    let Some(textarea) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) else {
                        return;
                    };
                    store.description_draft().set(textarea.value());
                }
            ></textarea>
            <button type="button" disabled=saving on:click=save>"Update Description"</button>
            <FlowStatusLine
                status=Signal::derive(move || store.description_save().get())
                pending="Saving..."
                done="Description updated"
            />
        </form>
    }
}
