//! Backend health status pill.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the result of the `GET /health` probe run at startup.
#[component]
pub fn HealthBadge() -> Element {
    let state = use_context::<AppState>();

    let (class, label) = match (state.backend_healthy)() {
        None => ("pill", "API: checking..."),
        Some(true) => ("pill good", "API: healthy"),
        Some(false) => ("pill bad", "API: unreachable"),
    };

    rsx! {
        span { class: "{class}", "{label}" }
    }
}
