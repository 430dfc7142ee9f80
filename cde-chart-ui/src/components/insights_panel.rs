//! AI insights panel: generate button plus typed insight cards.

use crate::state::AppState;
use cde_api::models::InsightType;
use dioxus::prelude::*;

fn badge_class(insight_type: InsightType) -> &'static str {
    match insight_type {
        InsightType::Anomaly => "pill warn",
        InsightType::Prediction => "pill bad",
        _ => "pill good",
    }
}

/// AI-generated narrative insights for the current selection.
///
/// The panel itself is presentation-only: the generate click is handed to
/// the app via `on_generate`, which runs the `POST /ai/insights` call and
/// fills the signals this component reads.
#[component]
pub fn InsightsPanel(on_generate: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let insights = state.insights.read().clone();
    let loading = (state.insights_loading)();
    let error = (state.insights_error)();
    let no_selection = state.selected_stations.read().is_empty();

    let cards = insights.into_iter().enumerate().map(|(i, insight)| {
        let related = insight.related_stations.join(", ");
        rsx! {
            div {
                key: "{i}",
                class: "insight-card",
                div {
                    class: "insight-head",
                    span { class: "insight-title", "{insight.title}" }
                    span {
                        class: badge_class(insight.insight_type),
                        "{insight.insight_type.label()}"
                    }
                }
                p { class: "insight-desc", "{insight.description}" }
                div {
                    class: "insight-meta",
                    span {
                        class: "pill",
                        {format!("{:.0}% confidence", insight.confidence * 100.0)}
                    }
                    if !related.is_empty() {
                        span { class: "pill", "Stations: {related}" }
                    }
                }
            }
        }
    });

    rsx! {
        div {
            id: "insights-panel",
            style: "display: flex; flex-direction: column; gap: 8px;",
            p { class: "section-title", "AI insights" }
            button {
                class: "btn primary",
                disabled: loading || no_selection,
                onclick: move |_| on_generate.call(()),
                if loading { "Generating..." } else { "Generate insights" }
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
            {cards}
        }
    }
}
