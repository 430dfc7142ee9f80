//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cde_api::models::{
    AnalyticsResponse, AnnualDataResponse, ChatMessage, Insight, MonthlyDataResponse, Station,
};
use cde_utils::filters::{FilterState, YearRange};
use dioxus::prelude::*;

use crate::theme::Theme;

/// Year bounds used until the analytics response reports the real dataset range.
pub const FALLBACK_BOUNDS: YearRange = YearRange { from: 1850, to: 2025 };

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Available stations (None until the list has loaded)
    pub stations: Signal<Option<Vec<Station>>>,
    /// Currently selected station IDs
    pub selected_stations: Signal<Vec<String>>,
    /// Mode, year range, sigma overlay, zoom
    pub filters: Signal<FilterState>,
    /// Min/max year available in the dataset
    pub dataset_bounds: Signal<YearRange>,

    /// Whether the initial station/analytics load is still running
    pub loading: Signal<bool>,
    /// Whether a series fetch is in flight
    pub data_loading: Signal<bool>,
    /// Top-level error message if something went wrong
    pub error_msg: Signal<Option<String>>,

    /// Latest fetched monthly series (kept for CSV export)
    pub monthly_data: Signal<Option<MonthlyDataResponse>>,
    /// Latest fetched annual series (kept for CSV export)
    pub annual_data: Signal<Option<AnnualDataResponse>>,
    /// Summary statistics for the current selection
    pub analytics: Signal<Option<AnalyticsResponse>>,

    /// AI-generated insights for the current selection
    pub insights: Signal<Vec<Insight>>,
    pub insights_loading: Signal<bool>,
    pub insights_error: Signal<Option<String>>,

    /// Chat conversation, oldest message first
    pub chat_messages: Signal<Vec<ChatMessage>>,
    pub chat_open: Signal<bool>,
    /// An answer is being awaited
    pub chat_pending: Signal<bool>,
    pub chat_error: Signal<Option<String>>,

    /// Left controls sidebar collapsed (mobile)
    pub sidebar_collapsed: Signal<bool>,
    pub theme: Signal<Theme>,
    /// Current onboarding tour step, None when the tour is closed
    pub tour_step: Signal<Option<usize>>,
    /// Text for the screen-reader live region
    pub announcement: Signal<String>,
    /// Backend health probe result (None while the probe is in flight)
    pub backend_healthy: Signal<Option<bool>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            stations: Signal::new(None),
            selected_stations: Signal::new(Vec::new()),
            filters: Signal::new(FilterState::new(FALLBACK_BOUNDS)),
            dataset_bounds: Signal::new(FALLBACK_BOUNDS),
            loading: Signal::new(true),
            data_loading: Signal::new(false),
            error_msg: Signal::new(None),
            monthly_data: Signal::new(None),
            annual_data: Signal::new(None),
            analytics: Signal::new(None),
            insights: Signal::new(Vec::new()),
            insights_loading: Signal::new(false),
            insights_error: Signal::new(None),
            chat_messages: Signal::new(Vec::new()),
            chat_open: Signal::new(false),
            chat_pending: Signal::new(false),
            chat_error: Signal::new(None),
            sidebar_collapsed: Signal::new(false),
            theme: Signal::new(Theme::Dark),
            tour_step: Signal::new(None),
            announcement: Signal::new(String::new()),
            backend_healthy: Signal::new(None),
        }
    }

    /// Post a message to the live region so screen readers announce it.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.announcement.set(message.into());
    }
}
