//! Summary statistics panel.

use crate::state::AppState;
use dioxus::prelude::*;

/// Month number to short name, for the record min/max rows.
fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "?",
    }
}

/// Per-station summary statistics table fed by `GET /analytics`.
#[component]
pub fn AnalyticsPanel() -> Element {
    let state = use_context::<AppState>();
    let analytics = state.analytics.read().clone();

    let Some(analytics) = analytics else {
        return rsx! {
            div {
                id: "analytics-panel",
                p { class: "section-title", "Statistics" }
                p { class: "field-hint", "Select stations to see statistics" }
            }
        };
    };

    let cards = analytics.stations.into_iter().map(|stats| {
        rsx! {
            div {
                key: "{stats.station_id}",
                style: "margin-bottom: 12px;",
                p {
                    style: "margin: 0 0 4px 0; font-weight: 600; font-size: 13px;",
                    "{stats.station_name}"
                }
                table {
                    class: "stats-table",
                    tbody {
                        tr {
                            td { "Record low" }
                            td {
                                {format!("{:.1}°C ({} {})", stats.min_temp,
                                    month_name(stats.min_temp_month), stats.min_temp_year)}
                            }
                        }
                        tr {
                            td { "Record high" }
                            td {
                                {format!("{:.1}°C ({} {})", stats.max_temp,
                                    month_name(stats.max_temp_month), stats.max_temp_year)}
                            }
                        }
                        tr {
                            td { "Mean ± σ" }
                            td { {format!("{:.1} ± {:.1}°C", stats.mean_temp, stats.std_temp)} }
                        }
                        tr {
                            td { "Coldest year" }
                            td { {format!("{} ({:.1}°C)", stats.coldest_year, stats.coldest_year_temp)} }
                        }
                        tr {
                            td { "Hottest year" }
                            td { {format!("{} ({:.1}°C)", stats.hottest_year, stats.hottest_year_temp)} }
                        }
                        tr {
                            td { "Coverage" }
                            td { {format!("{:.1}%", stats.data_coverage)} }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div {
            id: "analytics-panel",
            p { class: "section-title", "Statistics" }
            p {
                class: "field-hint",
                style: "margin-bottom: 8px;",
                "Dataset covers {analytics.year_range.0}–{analytics.year_range.1}"
            }
            {cards}
        }
    }
}
