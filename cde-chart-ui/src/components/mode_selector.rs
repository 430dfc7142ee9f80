//! Visualization mode selector with sigma overlay toggle.

use crate::state::AppState;
use cde_utils::filters::VizMode;
use dioxus::prelude::*;

/// Monthly/annual mode selector. The sigma checkbox is disabled in
/// monthly mode; `FilterState` enforces the actual rule.
#[component]
pub fn ModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let filters = (state.filters)();
    let monthly = filters.mode == VizMode::Monthly;

    rsx! {
        div {
            id: "mode-selector",
            p { class: "section-title", "View" }
            div {
                class: "field-row",
                label {
                    input {
                        r#type: "radio",
                        name: "viz-mode",
                        checked: !monthly,
                        onchange: move |_| {
                            let mut filters = (state.filters)();
                            filters.set_mode(VizMode::Annual);
                            state.filters.set(filters);
                            state.announce("Annual view");
                        },
                    }
                    "Annual"
                }
                label {
                    input {
                        r#type: "radio",
                        name: "viz-mode",
                        checked: monthly,
                        onchange: move |_| {
                            let mut filters = (state.filters)();
                            filters.set_mode(VizMode::Monthly);
                            state.filters.set(filters);
                            state.announce("Monthly view");
                        },
                    }
                    "Monthly"
                }
            }
            div {
                class: "field-row",
                label {
                    input {
                        r#type: "checkbox",
                        checked: filters.show_sigma,
                        disabled: monthly,
                        onchange: move |_| {
                            let mut filters = (state.filters)();
                            filters.toggle_sigma();
                            state.filters.set(filters);
                        },
                    }
                    "±1σ overlay"
                }
            }
            if monthly {
                p { class: "field-hint", "The σ band is only available in annual view" }
            }
        }
    }
}
