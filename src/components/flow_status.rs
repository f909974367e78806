//! Flow Status Line
//!
//! Inline feedback for one flow: progress, confirmation or error.

use leptos::prelude::*;

use crate::controller::FlowStatus;

#[component]
pub fn FlowStatusLine(
    status: Signal<FlowStatus>,
    /// Shown while the request is pending
    pending: &'static str,
    /// Shown on success; empty for none
    done: &'static str,
) -> impl IntoView {
    let line = move || {
        let (class, text) = match status.get() {
            FlowStatus::Idle => return None,
            FlowStatus::InFlight => ("flow-status pending", pending.to_string()),
            FlowStatus::Done if done.is_empty() => return None,
            FlowStatus::Done => ("flow-status done", done.to_string()),
            FlowStatus::Failed(err) => ("flow-status error", err.to_string()),
        };
        Some(view! { <p class=class>{text}</p> })
    };

    view! { {line} }
}
