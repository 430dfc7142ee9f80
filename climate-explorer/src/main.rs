//! Climate Data Explorer
//!
//! Browser dashboard for historical station temperature data. The user
//! picks weather stations, filters by year range, switches between
//! monthly and annual chart modes (with an optional ±1σ band in annual
//! view), and reads summary statistics and AI-generated narrative
//! insights about the selection.
//!
//! Data flow:
//! 1. On mount, the station list and a `/health` probe load from the
//!    backend API; the first station is selected by default.
//! 2. Whenever the selection, year range, zoom, or mode changes, the
//!    matching series endpoint is queried and the D3.js chart re-renders.
//! 3. AI insights and chat answers come from `POST /ai/insights` and
//!    `POST /ai/ask` on demand.

use cde_api::models::{AskRequest, ChatMessage, ChatRole, InsightsRequest};
use cde_api::ApiClient;
use cde_chart_ui::components::{
    AnalyticsPanel, ChartContainer, ChartHeader, ChatSidebar, ErrorDisplay, ExportButton,
    HealthBadge, InsightsPanel, LoadingSpinner, ModeSelector, StationSelector, ThemeToggle, Tour,
    YearRangePicker, ZoomControls,
};
use cde_chart_ui::js_bridge;
use cde_chart_ui::state::AppState;
use cde_chart_ui::theme;
use cde_utils::filters::{VizMode, YearRange};
use cde_utils::shortcuts::{self, KeyContext, ShortcutAction};
use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "temperature-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("climate-explorer-root"))
        .launch(App);
}

/// True when the `?tour=` URL parameter asks for the onboarding tour.
fn tour_requested() -> bool {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    match web_sys::UrlSearchParams::new_with_str(&search) {
        Ok(params) => params
            .get("tour")
            .map(|v| v != "0" && v != "false")
            .unwrap_or(false),
        Err(_) => false,
    }
}

/// Apply a dispatched keyboard shortcut to the app state.
fn apply_shortcut(mut state: AppState, action: ShortcutAction) {
    match action {
        ShortcutAction::ToggleMode => {
            let mut filters = (state.filters)();
            filters.toggle_mode();
            state.filters.set(filters);
            let label = match filters.mode {
                VizMode::Monthly => "Monthly view",
                VizMode::Annual => "Annual view",
            };
            state.announce(label);
        }
        ShortcutAction::ToggleSigma => {
            let mut filters = (state.filters)();
            filters.toggle_sigma();
            state.filters.set(filters);
            state.announce(if filters.show_sigma {
                "Sigma overlay on"
            } else {
                "Sigma overlay off"
            });
        }
        ShortcutAction::ToggleChat => {
            let open = (state.chat_open)();
            state.chat_open.set(!open);
        }
        ShortcutAction::ResetFilters => {
            let bounds = (state.dataset_bounds)();
            let mut filters = (state.filters)();
            filters.reset(bounds);
            state.filters.set(filters);
            state.announce("Year range and zoom reset");
        }
        ShortcutAction::ShowTour => {
            state.tour_step.set(Some(0));
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let client = use_hook(ApiClient::new);

    // One-time setup: stylesheet, theme, charts, tour, health, stations
    let setup_client = client.clone();
    use_effect(move || {
        js_bridge::inject_stylesheet(theme::GLOBAL_CSS);
        let saved_theme = theme::load_saved().unwrap_or_default();
        state.theme.set(saved_theme);
        theme::apply(saved_theme);
        js_bridge::init_charts();

        if tour_requested() {
            state.tour_step.set(Some(0));
        }

        let client = setup_client.clone();
        spawn(async move {
            match client.health().await {
                Ok(health) => state.backend_healthy.set(Some(health.is_healthy())),
                Err(e) => {
                    log::warn!("Health probe failed: {}", e);
                    state.backend_healthy.set(Some(false));
                }
            }
        });

        let client = setup_client.clone();
        spawn(async move {
            match client.stations().await {
                Ok(stations) => {
                    if let Some(first) = stations.first() {
                        state.selected_stations.set(vec![first.id.clone()]);
                    }
                    state.stations.set(Some(stations));
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load stations: {}", e);
                    state
                        .error_msg
                        .set(Some("Failed to load stations".to_string()));
                    state.loading.set(false);
                }
            }
        });
    });

    // Document-level keyboard shortcuts
    use_effect(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                let in_text_input = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
                    .unwrap_or(false);
                let ctx = KeyContext {
                    in_text_input,
                    ctrl: event.ctrl_key(),
                    alt: event.alt_key(),
                    meta: event.meta_key(),
                };
                if let Some(action) = shortcuts::dispatch(&event.key(), ctx) {
                    event.prevent_default();
                    apply_shortcut(state, action);
                }
            },
        );
        if let Err(e) =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to register keydown listener: {:?}", e);
        }
        // Listener lives for the app's lifetime
        closure.forget();
    });

    // Dataset bounds come from the selected stations' full coverage, so
    // this query is unfiltered and only re-runs when the selection changes
    let bounds_client = client.clone();
    use_effect(move || {
        let selected = state.selected_stations.read().clone();
        if selected.is_empty() {
            return;
        }
        let client = bounds_client.clone();
        spawn(async move {
            match client.analytics(&selected, None, None).await {
                Ok(response) => {
                    let (min_year, max_year) = response.year_range;
                    let bounds = YearRange::new(min_year, max_year);
                    state.dataset_bounds.set(bounds);
                    let mut filters = (state.filters)();
                    let clamped = filters.range.clamp_to(bounds);
                    if clamped != filters.range {
                        filters.range = clamped;
                        state.filters.set(filters);
                    }
                }
                Err(e) => {
                    log::warn!("Coverage lookup failed: {}", e);
                }
            }
        });
    });

    // Re-fetch series + analytics and re-render the chart whenever the
    // selection or filters change
    let data_client = client.clone();
    use_effect(move || {
        let selected = state.selected_stations.read().clone();
        let filters = (state.filters)();
        if (state.loading)() {
            return;
        }

        if selected.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            state.monthly_data.set(None);
            state.annual_data.set(None);
            state.analytics.set(None);
            return;
        }
        if !filters.range.is_valid() {
            return;
        }
        let range = filters.effective_range();

        let client = data_client.clone();
        spawn(async move {
            state.data_loading.set(true);

            match filters.mode {
                VizMode::Annual => {
                    match client
                        .annual(&selected, Some(range.from), Some(range.to))
                        .await
                    {
                        Ok(response) => {
                            let data_json =
                                serde_json::to_string(&response.stations).unwrap_or_default();
                            let config_json = serde_json::json!({
                                "title": "Annual mean temperature",
                                "yAxisLabel": "Temperature (°C)",
                                "showSigmaBand": filters.show_sigma,
                            })
                            .to_string();
                            log::info!(
                                "Rendering annual chart: {} stations, {} years",
                                response.stations.len(),
                                response.total_years
                            );
                            state.annual_data.set(Some(response));
                            state.error_msg.set(None);
                            js_bridge::render_annual_chart(CHART_ID, &data_json, &config_json);
                        }
                        Err(e) => {
                            log::error!("Annual data fetch failed: {}", e);
                            state
                                .error_msg
                                .set(Some("Failed to load annual data".to_string()));
                        }
                    }
                }
                VizMode::Monthly => {
                    match client
                        .monthly(&selected, Some(range.from), Some(range.to))
                        .await
                    {
                        Ok(response) => {
                            let data_json =
                                serde_json::to_string(&response.stations).unwrap_or_default();
                            let config_json = serde_json::json!({
                                "title": "Monthly temperature",
                                "yAxisLabel": "Temperature (°C)",
                            })
                            .to_string();
                            log::info!(
                                "Rendering monthly chart: {} stations, {} points",
                                response.stations.len(),
                                response.total_points
                            );
                            state.monthly_data.set(Some(response));
                            state.error_msg.set(None);
                            js_bridge::render_monthly_chart(CHART_ID, &data_json, &config_json);
                        }
                        Err(e) => {
                            log::error!("Monthly data fetch failed: {}", e);
                            state
                                .error_msg
                                .set(Some("Failed to load monthly data".to_string()));
                        }
                    }
                }
            }

            match client
                .analytics(&selected, Some(range.from), Some(range.to))
                .await
            {
                Ok(response) => {
                    state.analytics.set(Some(response));
                }
                Err(e) => {
                    // Chart stays up; statistics are merely unavailable
                    log::warn!("Analytics fetch failed: {}", e);
                }
            }

            state.data_loading.set(false);
        });
    });

    let insights_client = client.clone();
    let on_generate_insights = move |_| {
        let selected = state.selected_stations.read().clone();
        let range = (state.filters)().range;
        let client = insights_client.clone();
        spawn(async move {
            state.insights_loading.set(true);
            state.insights_error.set(None);
            let request = InsightsRequest {
                station_ids: selected,
                year_from: Some(range.from),
                year_to: Some(range.to),
            };
            match client.insights(&request).await {
                Ok(response) => {
                    log::info!(
                        "Received {} insights from {}",
                        response.insights.len(),
                        response.model
                    );
                    state.insights.set(response.insights);
                }
                Err(e) => {
                    log::error!("Insights request failed: {}", e);
                    state
                        .insights_error
                        .set(Some("Failed to generate insights".to_string()));
                }
            }
            state.insights_loading.set(false);
        });
    };

    let ask_client = client.clone();
    let on_ask = move |question: String| {
        let selected = state.selected_stations.read().clone();
        let range = (state.filters)().range;
        let history = state.chat_messages.read().clone();
        let client = ask_client.clone();
        spawn(async move {
            let mut messages = history.clone();
            messages.push(ChatMessage {
                role: ChatRole::User,
                content: question.clone(),
            });
            state.chat_messages.set(messages.clone());
            state.chat_pending.set(true);
            state.chat_error.set(None);

            let request = AskRequest {
                question,
                station_ids: selected,
                year_from: Some(range.from),
                year_to: Some(range.to),
                conversation_history: history,
            };
            match client.ask(&request).await {
                Ok(response) => {
                    messages.push(ChatMessage {
                        role: ChatRole::Assistant,
                        content: response.answer,
                    });
                    state.chat_messages.set(messages);
                }
                Err(e) => {
                    log::error!("Ask request failed: {}", e);
                    state
                        .chat_error
                        .set(Some("Failed to get an answer".to_string()));
                }
            }
            state.chat_pending.set(false);
        });
    };

    let filters = (state.filters)();
    let chart_title = match filters.mode {
        VizMode::Monthly => "Monthly temperature",
        VizMode::Annual => "Annual mean temperature",
    };
    let shell_class = if (state.sidebar_collapsed)() {
        "app-shell sidebar-collapsed"
    } else {
        "app-shell"
    };
    let no_selection = state.selected_stations.read().is_empty();

    rsx! {
        div {
            class: "{shell_class}",

            div {
                class: "sr-only",
                aria_live: "polite",
                "{state.announcement}"
            }

            header {
                class: "topbar panel",
                div { class: "brand", "Climate Data Explorer" }
                div {
                    class: "topbar-actions",
                    HealthBadge {}
                    ExportButton {}
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let open = (state.chat_open)();
                            state.chat_open.set(!open);
                        },
                        "Ask AI"
                    }
                    ThemeToggle {}
                    button {
                        class: "btn",
                        title: "Show/hide controls",
                        onclick: move |_| {
                            let collapsed = (state.sidebar_collapsed)();
                            state.sidebar_collapsed.set(!collapsed);
                        },
                        "☰"
                    }
                    button {
                        class: "btn ghost",
                        title: "Guided tour",
                        onclick: move |_| state.tour_step.set(Some(0)),
                        "?"
                    }
                }
            }

            if (state.loading)() {
                div {
                    class: "main panel",
                    LoadingSpinner {}
                }
            } else {
                aside {
                    class: "sidebar panel",
                    StationSelector {}
                    YearRangePicker {}
                    ModeSelector {}
                    ZoomControls {}
                }

                section {
                    class: "main panel",
                    ChartHeader {
                        title: chart_title.to_string(),
                        unit_description: "Temperature (°C)".to_string(),
                    }
                    if let Some(err) = (state.error_msg)() {
                        ErrorDisplay { message: err }
                    }
                    if no_selection {
                        p {
                            class: "field-hint",
                            "Select at least one station to draw the chart"
                        }
                    }
                    ChartContainer {
                        id: CHART_ID.to_string(),
                        loading: (state.data_loading)(),
                        min_height: 440,
                    }
                }

                aside {
                    class: "rightbar panel",
                    AnalyticsPanel {}
                    InsightsPanel { on_generate: on_generate_insights }
                }
            }

            ChatSidebar { on_ask: on_ask }
            Tour {}
        }
    }
}
