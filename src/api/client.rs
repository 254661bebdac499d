//! HTTP API Client
//!
//! Functions for communicating with the forecast backend REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::global::MetricsReport;

/// Default backend root URL
pub const DEFAULT_BACKEND_ROOT: &str = "http://localhost:5000";

/// localStorage key holding the configured backend root
const STORAGE_KEY: &str = "brent_dashboard_backend_url";

/// Get the backend root URL from local storage or use default
pub fn get_backend_root() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(STORAGE_KEY) {
                url
            } else {
                DEFAULT_BACKEND_ROOT.to_string()
            }
        } else {
            DEFAULT_BACKEND_ROOT.to_string()
        }
    } else {
        DEFAULT_BACKEND_ROOT.to_string()
    };
    normalize_root(&url)
}

/// Set the backend root URL in local storage
pub fn set_backend_root(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, &normalize_root(url));
        }
    }
}

/// Normalize a root URL: strip whitespace and trailing slashes
fn normalize_root(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// All three endpoints derive from the one configured root.

/// `GET {root}/api/metrics`
pub fn metrics_url(root: &str) -> String {
    format!("{}/api/metrics", root)
}

/// `GET {root}/api/predict`
pub fn predictions_url(root: &str) -> String {
    format!("{}/api/predict", root)
}

/// `GET {root}/get_model_data`
pub fn model_data_url(root: &str) -> String {
    format!("{}/get_model_data", root)
}

// ============ Error Type ============

/// Errors a fetch can fail with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, aborted request)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status code
    #[error("Backend returned status {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

// ============ Response Types ============

/// Wire shape of the model-data endpoint: two parallel lists of
/// column-vector rows
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ModelDataResponse {
    #[serde(default)]
    pub y_test: Vec<Vec<f64>>,
    #[serde(default)]
    pub test_predict: Vec<Vec<f64>>,
}

// ============ API Functions ============

/// Fetch evaluation metrics
pub async fn fetch_metrics() -> Result<MetricsReport, ApiError> {
    get_json(&metrics_url(&get_backend_root())).await
}

/// Fetch the raw predictions payload
pub async fn fetch_predictions() -> Result<serde_json::Value, ApiError> {
    get_json(&predictions_url(&get_backend_root())).await
}

/// Fetch the actual/predicted series for charting
pub async fn fetch_model_data() -> Result<ModelDataResponse, ApiError> {
    get_json(&model_data_url(&get_backend_root())).await
}

/// Single GET with JSON decoding; no retries, no caching, no timeout
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_share_one_root() {
        let root = "http://localhost:5000";
        assert_eq!(metrics_url(root), "http://localhost:5000/api/metrics");
        assert_eq!(predictions_url(root), "http://localhost:5000/api/predict");
        assert_eq!(model_data_url(root), "http://localhost:5000/get_model_data");
    }

    #[test]
    fn test_normalize_root_strips_trailing_slash() {
        assert_eq!(normalize_root("http://example.com/"), "http://example.com");
        assert_eq!(normalize_root(" http://example.com// "), "http://example.com");
        assert_eq!(normalize_root(DEFAULT_BACKEND_ROOT), DEFAULT_BACKEND_ROOT);
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "Backend returned status 500"
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn test_model_data_response_tolerates_missing_fields() {
        let response: ModelDataResponse = serde_json::from_str(r#"{"y_test": [[1.0]]}"#).unwrap();
        assert_eq!(response.y_test, vec![vec![1.0]]);
        assert!(response.test_predict.is_empty());
    }
}
