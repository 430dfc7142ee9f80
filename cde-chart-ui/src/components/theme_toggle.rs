//! Dark/light theme toggle.

use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;

/// Toggles between the dark and light palette and persists the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let label = match (state.theme)() {
        theme::Theme::Dark => "☀ Light",
        theme::Theme::Light => "☾ Dark",
    };

    rsx! {
        button {
            id: "theme-toggle",
            class: "btn",
            title: "Switch color theme",
            onclick: move |_| {
                let next = (state.theme)().toggled();
                state.theme.set(next);
                theme::apply(next);
            },
            "{label}"
        }
    }
}
