//! CSV export button for the fetched series.

use crate::js_bridge;
use crate::state::AppState;
use cde_utils::export;
use cde_utils::filters::VizMode;
use chrono::Utc;
use dioxus::prelude::*;

/// Downloads the currently displayed series as CSV.
///
/// Serializes the already-fetched data for the active mode; no refetch.
#[component]
pub fn ExportButton() -> Element {
    let mut state = use_context::<AppState>();
    let mode = (state.filters)().mode;
    let has_data = match mode {
        VizMode::Monthly => state.monthly_data.read().is_some(),
        VizMode::Annual => state.annual_data.read().is_some(),
    };

    rsx! {
        button {
            id: "export-button",
            class: "btn",
            disabled: !has_data,
            title: "Download the displayed data as CSV",
            onclick: move |_| {
                let today = Utc::now().date_naive();
                match (state.filters)().mode {
                    VizMode::Monthly => {
                        if let Some(data) = state.monthly_data.read().as_ref() {
                            let csv = export::monthly_csv(&data.stations);
                            js_bridge::download_csv(&export::export_filename("monthly", today), &csv);
                        }
                    }
                    VizMode::Annual => {
                        if let Some(data) = state.annual_data.read().as_ref() {
                            let csv = export::annual_csv(&data.stations);
                            js_bridge::download_csv(&export::export_filename("annual", today), &csv);
                        }
                    }
                }
                state.announce("CSV download started");
            },
            "Export CSV"
        }
    }
}
