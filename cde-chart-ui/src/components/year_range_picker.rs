//! Year range picker with from/to inputs and inline validation.

use crate::state::AppState;
use cde_utils::filters::YearRange;
use dioxus::prelude::*;

/// Year range picker for filtering chart data.
///
/// Edits land in a draft range first; only a valid draft (from ≤ to,
/// non-negative) is clamped to the dataset bounds and pushed into the
/// active filters. Invalid input shows an inline message and leaves the
/// last valid range in effect.
#[component]
pub fn YearRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let bounds = (state.dataset_bounds)();
    let initial = (state.filters)().range;

    let mut draft = use_signal(move || initial);
    let error = draft().validation_error();

    // Follow external range changes (e.g. the reset shortcut)
    use_effect(move || {
        let committed = (state.filters)().range;
        if draft.peek().is_valid() && *draft.peek() != committed {
            draft.set(committed);
        }
    });

    rsx! {
        div {
            id: "year-range-picker",
            p { class: "section-title", "Year range" }
            div {
                class: "field-row",
                label {
                    "From: "
                    input {
                        r#type: "number",
                        min: "{bounds.from}",
                        max: "{bounds.to}",
                        value: "{draft().from}",
                        onchange: move |evt| {
                            if let Ok(year) = evt.value().parse::<i32>() {
                                let range = YearRange::new(year, draft().to);
                                draft.set(range);
                                if range.is_valid() {
                                    let mut filters = (state.filters)();
                                    filters.range = range.clamp_to(bounds);
                                    state.filters.set(filters);
                                }
                            }
                        },
                    }
                }
                label {
                    "To: "
                    input {
                        r#type: "number",
                        min: "{bounds.from}",
                        max: "{bounds.to}",
                        value: "{draft().to}",
                        onchange: move |evt| {
                            if let Ok(year) = evt.value().parse::<i32>() {
                                let range = YearRange::new(draft().from, year);
                                draft.set(range);
                                if range.is_valid() {
                                    let mut filters = (state.filters)();
                                    filters.range = range.clamp_to(bounds);
                                    state.filters.set(filters);
                                }
                            }
                        },
                    }
                }
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            } else {
                p {
                    class: "field-hint",
                    "Data available {bounds.from}–{bounds.to}"
                }
            }
        }
    }
}
