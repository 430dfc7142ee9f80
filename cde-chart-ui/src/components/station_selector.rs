//! Multi-select station list.

use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox list of available stations.
/// Reads the station list from AppState and toggles IDs in `selected_stations`.
#[component]
pub fn StationSelector() -> Element {
    let state = use_context::<AppState>();
    let stations = state.stations.read().clone().unwrap_or_default();
    let selected = state.selected_stations.read().clone();
    let selected_count = selected.len();

    let rows = stations.into_iter().map(move |station| {
        let mut state = state;
        let is_selected = selected.contains(&station.id);
        let station_id = station.id.clone();
        let station_name = station.name.clone();
        rsx! {
            label {
                key: "{station.id}",
                class: if is_selected { "station-row selected" } else { "station-row" },
                input {
                    r#type: "checkbox",
                    checked: is_selected,
                    onchange: move |_| {
                        let mut ids = state.selected_stations.read().clone();
                        if let Some(pos) = ids.iter().position(|id| *id == station_id) {
                            ids.remove(pos);
                            state.announce(format!("Deselected {}", station_name));
                        } else {
                            ids.push(station_id.clone());
                            state.announce(format!("Selected {}", station_name));
                        }
                        state.selected_stations.set(ids);
                    },
                }
                "{station.name}"
            }
        }
    });

    rsx! {
        div {
            id: "station-selector",
            p { class: "section-title", "Stations" }
            div {
                class: "station-list",
                role: "listbox",
                aria_multiselectable: "true",
                {rows}
            }
            p {
                class: "field-hint",
                "{selected_count} selected"
            }
        }
    }
}
