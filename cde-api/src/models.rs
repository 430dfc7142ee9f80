//! Value objects for the backend JSON contract.
//!
//! All structs derive `Deserialize` for decoding API responses and
//! `Serialize` so chart data can be handed to D3.js as JSON from the
//! Dioxus WASM frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weather observation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station identifier (e.g. "66062").
    pub id: String,
    /// Station display name.
    pub name: String,
}

/// Single monthly temperature reading.
///
/// `temperature` is `None` where the station has a gap in its record;
/// charts break the line at such points instead of interpolating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyDataPoint {
    pub year: i32,
    /// Month 1-12.
    pub month: u32,
    /// Temperature in °C, `None` if missing.
    pub temperature: Option<f64>,
}

/// Monthly series for a single station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMonthlyData {
    pub station_id: String,
    pub station_name: String,
    pub data: Vec<MonthlyDataPoint>,
}

/// Response of `GET /data/monthly`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyDataResponse {
    pub stations: Vec<StationMonthlyData>,
    /// Total number of data points across all stations.
    pub total_points: usize,
}

/// Aggregated temperature statistics for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualDataPoint {
    pub year: i32,
    /// Mean of the monthly temperatures.
    pub mean: f64,
    /// Standard deviation of the monthly temperatures.
    pub std: f64,
    /// Coldest monthly temperature of the year.
    pub min_temp: f64,
    /// Warmest monthly temperature of the year.
    pub max_temp: f64,
    /// Mean + 1σ, precomputed for the sigma overlay band.
    pub upper_bound: f64,
    /// Mean - 1σ.
    pub lower_bound: f64,
}

/// Annual series for a single station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationAnnualData {
    pub station_id: String,
    pub station_name: String,
    pub data: Vec<AnnualDataPoint>,
}

/// Response of `GET /data/annual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualDataResponse {
    pub stations: Vec<StationAnnualData>,
    /// Number of distinct years with data.
    pub total_years: usize,
}

/// Summary statistics for a single station over the requested window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationAnalytics {
    pub station_id: String,
    pub station_name: String,
    pub min_temp: f64,
    pub min_temp_year: i32,
    pub min_temp_month: u32,
    pub max_temp: f64,
    pub max_temp_year: i32,
    pub max_temp_month: u32,
    pub mean_temp: f64,
    pub std_temp: f64,
    pub coldest_year: i32,
    pub coldest_year_temp: f64,
    pub hottest_year: i32,
    pub hottest_year_temp: f64,
    /// Percentage (0-100) of non-null data points.
    pub data_coverage: f64,
}

/// Response of `GET /analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub stations: Vec<StationAnalytics>,
    /// `(min_year, max_year)` available in the dataset.
    pub year_range: (i32, i32),
    pub total_stations: usize,
}

/// Classification of an AI-generated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Trend,
    Anomaly,
    Comparison,
    Summary,
    Prediction,
}

impl InsightType {
    /// Short label for badge display.
    pub fn label(&self) -> &'static str {
        match self {
            InsightType::Trend => "Trend",
            InsightType::Anomaly => "Anomaly",
            InsightType::Comparison => "Comparison",
            InsightType::Summary => "Summary",
            InsightType::Prediction => "Prediction",
        }
    }
}

/// One AI-generated narrative insight about the selected data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    /// Model confidence, 0.0-1.0.
    pub confidence: f64,
    /// Station IDs this insight relates to.
    #[serde(default)]
    pub related_stations: Vec<String>,
}

/// Body of `POST /ai/insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsRequest {
    pub station_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,
}

/// Response of `POST /ai/insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
    pub generated_at: DateTime<Utc>,
    /// AI model that produced the insights.
    pub model: String,
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the Q&A conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Body of `POST /ai/ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub station_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,
    /// Prior turns, oldest first, for conversational context.
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

/// Response of `POST /ai/ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub model: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_response_decodes_with_null_temperature() {
        let json = r#"{
            "stations": [{
                "station_id": "66062",
                "station_name": "Station 66062",
                "data": [
                    {"year": 1950, "month": 1, "temperature": -3.2},
                    {"year": 1950, "month": 2, "temperature": null}
                ]
            }],
            "total_points": 2
        }"#;
        let resp: MonthlyDataResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_points, 2);
        let data = &resp.stations[0].data;
        assert_eq!(data[0].temperature, Some(-3.2));
        assert_eq!(data[1].temperature, None);
    }

    #[test]
    fn annual_response_decodes_sigma_bounds() {
        let json = r#"{
            "stations": [{
                "station_id": "101234",
                "station_name": "Station 101234",
                "data": [{
                    "year": 2000, "mean": 9.5, "std": 7.1,
                    "min_temp": -4.0, "max_temp": 21.3,
                    "upper_bound": 16.6, "lower_bound": 2.4
                }]
            }],
            "total_years": 1
        }"#;
        let resp: AnnualDataResponse = serde_json::from_str(json).unwrap();
        let point = &resp.stations[0].data[0];
        assert_eq!(point.upper_bound, 16.6);
        assert_eq!(point.lower_bound, 2.4);
    }

    #[test]
    fn analytics_year_range_is_a_tuple() {
        let json = r#"{
            "stations": [],
            "year_range": [1859, 2019],
            "total_stations": 0
        }"#;
        let resp: AnalyticsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.year_range, (1859, 2019));
    }

    #[test]
    fn insight_type_uses_lowercase_wire_names() {
        let insight: Insight = serde_json::from_str(
            r#"{
                "type": "anomaly",
                "title": "1998 outlier",
                "description": "Unusually warm winter.",
                "confidence": 0.92,
                "related_stations": ["66062"]
            }"#,
        )
        .unwrap();
        assert_eq!(insight.insight_type, InsightType::Anomaly);
        assert_eq!(insight.insight_type.label(), "Anomaly");
    }

    #[test]
    fn ask_request_serializes_conversation_history() {
        let req = AskRequest {
            question: "Which station is warmest?".to_string(),
            station_ids: vec!["66062".to_string()],
            year_from: Some(1900),
            year_to: None,
            conversation_history: vec![ChatMessage {
                role: ChatRole::User,
                content: "hi".to_string(),
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["conversation_history"][0]["role"], "user");
        assert_eq!(json["year_from"], 1900);
        // year_to is omitted entirely when unset
        assert!(json.get("year_to").is_none());
    }

    #[test]
    fn health_status_check() {
        let ok: HealthResponse = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
        assert!(ok.is_healthy());
        let bad = HealthResponse {
            status: "degraded".to_string(),
        };
        assert!(!bad.is_healthy());
    }
}
