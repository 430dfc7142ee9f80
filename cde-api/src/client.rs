//! Thin async client over the backend REST contract.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::QueryCache;
use crate::error::{ApiError, Result};
use crate::models::{
    AnalyticsResponse, AnnualDataResponse, AskRequest, AskResponse, HealthResponse,
    InsightsRequest, InsightsResponse, MonthlyDataResponse, Station,
};

/// Base URL baked in at compile time via the `API_URL` environment
/// variable, matching the backend's `API_V1_STR` prefix by default.
const DEFAULT_BASE_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api/v1",
};

/// Client for the Climate Data Explorer backend.
///
/// Cheaply cloneable; GET responses pass through a shared stale-time
/// [`QueryCache`]. On wasm32, requests go through the browser fetch API
/// with its default abort/retry behavior.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: QueryCache,
}

impl ApiClient {
    /// Client against the compile-time configured base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: QueryCache::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /stations` - full station list.
    pub async fn stations(&self) -> Result<Vec<Station>> {
        self.get_cached("/stations").await
    }

    /// `GET /data/monthly` - monthly series for the selected stations.
    pub async fn monthly(
        &self,
        station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<MonthlyDataResponse> {
        let path = format!(
            "/data/monthly?{}",
            series_query(station_ids, year_from, year_to)
        );
        self.get_cached(&path).await
    }

    /// `GET /data/annual` - yearly aggregates for the selected stations.
    pub async fn annual(
        &self,
        station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<AnnualDataResponse> {
        let path = format!(
            "/data/annual?{}",
            series_query(station_ids, year_from, year_to)
        );
        self.get_cached(&path).await
    }

    /// `GET /analytics` - summary statistics for the selected stations.
    pub async fn analytics(
        &self,
        station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<AnalyticsResponse> {
        let path = format!(
            "/analytics?{}",
            series_query(station_ids, year_from, year_to)
        );
        self.get_cached(&path).await
    }

    /// `POST /ai/insights` - generate narrative insights.
    pub async fn insights(&self, request: &InsightsRequest) -> Result<InsightsResponse> {
        self.post_json("/ai/insights", request).await
    }

    /// `POST /ai/ask` - ask a free-form question about the selected data.
    pub async fn ask(&self, request: &AskRequest) -> Result<AskResponse> {
        self.post_json("/ai/ask", request).await
    }

    /// `GET /health` - backend liveness probe. Bypasses the cache.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_cached<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let now = now_ms();
        if let Some(body) = self.cache.get(path, now) {
            log::debug!("cache hit: {}", path);
            return serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()));
        }

        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        let decoded =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.cache.put(path, body, now_ms());
        Ok(decoded)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(status_error(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build an [`ApiError::Status`], pulling the backend's `detail` message
/// out of the error body when one is present.
fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_else(|| format!("HTTP {}", status));
    ApiError::Status { status, detail }
}

/// Query string shared by the three series endpoints. Station IDs are
/// joined comma-separated, exactly as the backend parses them.
fn series_query(station_ids: &[String], year_from: Option<i32>, year_to: Option<i32>) -> String {
    let mut query = format!("stations={}", station_ids.join(","));
    if let Some(from) = year_from {
        query.push_str(&format!("&year_from={}", from));
    }
    if let Some(to) = year_to {
        query.push_str(&format!("&year_to={}", to));
    }
    query
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_query_joins_stations_with_commas() {
        let ids = vec!["66062".to_string(), "101234".to_string()];
        assert_eq!(
            series_query(&ids, None, None),
            "stations=66062,101234"
        );
    }

    #[test]
    fn series_query_includes_optional_years() {
        let ids = vec!["66062".to_string()];
        assert_eq!(
            series_query(&ids, Some(1900), Some(2000)),
            "stations=66062&year_from=1900&year_to=2000"
        );
        assert_eq!(
            series_query(&ids, None, Some(2000)),
            "stations=66062&year_to=2000"
        );
    }

    #[test]
    fn status_error_extracts_backend_detail() {
        let err = status_error(404, r#"{"detail": "Stations not found: 999"}"#);
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 404);
                assert_eq!(detail, "Stations not found: 999");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn status_error_falls_back_to_status_code() {
        let err = status_error(502, "<html>bad gateway</html>");
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 502);
                assert_eq!(detail, "HTTP 502");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://example.com/api/v1/");
        assert_eq!(client.base_url(), "http://example.com/api/v1");
    }
}
