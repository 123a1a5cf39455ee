//! HTTP adapter for the prediction API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::application::form::InputRecord;
use crate::ports::outbound::{
    PredictionError, PredictionOutcome, PredictionPort, StrokePrediction,
};

/// Default base URL for the prediction service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const PREDICTION_PATH: &str = "/api/hfp_prediction";

/// Message shown when an error status carries no `error` field.
const GENERIC_FAILURE: &str = "Failed to get prediction";

/// Client for the prediction API.
#[derive(Clone)]
pub struct PredictionApiClient {
    client: Client,
    base_url: String,
}

impl PredictionApiClient {
    /// No client-side deadline is configured: a request waits on whatever
    /// the underlying network stack does.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client from the `HFP_API_BASE_URL` environment variable,
    /// falling back to the default if not set.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("HFP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for PredictionApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PredictionPort for PredictionApiClient {
    async fn predict(&self, record: InputRecord) -> Result<PredictionOutcome, PredictionError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, PREDICTION_PATH))
            .json(&record.into_payload())
            .send()
            .await
            .map_err(|e| PredictionError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::RequestFailed(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Turn a raw status + body into an outcome.
///
/// The body is parsed as JSON regardless of status. On a non-success status
/// the body's `error` string becomes the failure message; an empty or absent
/// `predictions` list on success is a valid answer, not an error.
fn interpret_response(
    status: StatusCode,
    body: &str,
) -> Result<PredictionOutcome, PredictionError> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|e| PredictionError::InvalidResponse(e.to_string()))?;

    if !status.is_success() {
        let message = parsed
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_FAILURE)
            .to_string();
        return Err(PredictionError::RequestFailed(message));
    }

    let response: ApiResponse = serde_json::from_value(parsed)
        .map_err(|e| PredictionError::InvalidResponse(e.to_string()))?;

    match response.predictions.into_iter().next() {
        Some(p) => Ok(PredictionOutcome::Scored(StrokePrediction {
            stroke_risk_percentage: p.stroke_risk_percentage,
            no_stroke_risk_percentage: p.no_stroke_risk_percentage,
        })),
        None => Ok(PredictionOutcome::Unavailable),
    }
}

// =============================================================================
// Prediction API wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    predictions: Vec<ApiPrediction>,
}

#[derive(Debug, Deserialize)]
struct ApiPrediction {
    stroke_risk_percentage: f64,
    no_stroke_risk_percentage: f64,
}
