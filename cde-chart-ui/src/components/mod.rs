//! Reusable Dioxus RSX components for the Climate Data Explorer.

mod analytics_panel;
mod chart_container;
mod chart_header;
mod chat_sidebar;
mod error_display;
mod export_button;
mod health_badge;
mod insights_panel;
mod loading_spinner;
mod mode_selector;
mod station_selector;
mod theme_toggle;
mod tour;
mod year_range_picker;
mod zoom_controls;

pub use analytics_panel::AnalyticsPanel;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chat_sidebar::ChatSidebar;
pub use error_display::ErrorDisplay;
pub use export_button::ExportButton;
pub use health_badge::HealthBadge;
pub use insights_panel::InsightsPanel;
pub use loading_spinner::LoadingSpinner;
pub use mode_selector::ModeSelector;
pub use station_selector::StationSelector;
pub use theme_toggle::ThemeToggle;
pub use tour::{tour_steps, Tour};
pub use year_range_picker::YearRangePicker;
pub use zoom_controls::ZoomControls;
