//! Zoom controls: center year and window size.

use crate::state::AppState;
use cde_utils::filters::ZoomWindow;
use dioxus::prelude::*;

/// Zoom window editor. Applying sets `FilterState::zoom`; the conversion
/// to a clamped `[from, to]` range happens in `ZoomWindow::to_range`.
#[component]
pub fn ZoomControls() -> Element {
    let mut state = use_context::<AppState>();
    let filters = (state.filters)();
    let range = filters.range;

    let mut center = use_signal(move || (range.from + range.to) / 2);
    let mut window = use_signal(|| 20u32);

    let effective = filters.effective_range();
    let zoom_hint = format!("Showing {}\u{2013}{}", effective.from, effective.to);

    rsx! {
        div {
            id: "zoom-controls",
            p { class: "section-title", "Zoom" }
            div {
                class: "field-row",
                label {
                    "Center: "
                    input {
                        r#type: "number",
                        value: "{center}",
                        onchange: move |evt| {
                            if let Ok(year) = evt.value().parse::<i32>() {
                                center.set(year);
                            }
                        },
                    }
                }
                label {
                    "Years: "
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{window}",
                        onchange: move |evt| {
                            if let Ok(size) = evt.value().parse::<u32>() {
                                window.set(size.max(1));
                            }
                        },
                    }
                }
            }
            div {
                class: "field-row",
                button {
                    class: "btn",
                    onclick: move |_| {
                        let mut filters = (state.filters)();
                        filters.zoom = Some(ZoomWindow::new(center(), window()));
                        let effective = filters.effective_range();
                        state.filters.set(filters);
                        state.announce(format!("Zoomed to {}–{}", effective.from, effective.to));
                    },
                    "Apply"
                }
                button {
                    class: "btn ghost",
                    disabled: filters.zoom.is_none(),
                    onclick: move |_| {
                        let mut filters = (state.filters)();
                        filters.zoom = None;
                        state.filters.set(filters);
                        state.announce("Zoom cleared");
                    },
                    "Clear"
                }
            }
            if filters.zoom.is_some() {
                p { class: "field-hint", "{zoom_hint}" }
            }
        }
    }
}
