//! Prediction Port - boundary to the remote prediction service
//!
//! The application layer submits an Input Record and gets back either a
//! scored prediction, a "nothing to show" outcome, or a typed error. The
//! concrete HTTP adapter lives in `infrastructure::prediction_api`.

use crate::application::form::InputRecord;

/// Errors surfaced by the prediction boundary.
///
/// Display output is the user-facing message text; the handler renders it
/// verbatim inside the error paragraph.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// The service answered with a non-success status (or the request never
    /// completed). Carries the body's `error` message when one was present.
    #[error("{0}")]
    RequestFailed(String),

    /// The body could not be parsed, or a prediction was missing its
    /// percentage fields.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A single scored prediction: both risk percentages for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePrediction {
    pub stroke_risk_percentage: f64,
    pub no_stroke_risk_percentage: f64,
}

impl StrokePrediction {
    /// Likely iff stroke risk is strictly greater than no-stroke risk.
    pub fn classify(&self) -> RiskClass {
        if self.stroke_risk_percentage > self.no_stroke_risk_percentage {
            RiskClass::LikelyStroke
        } else {
            RiskClass::NoStroke
        }
    }
}

/// Classification derived from the two percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskClass {
    LikelyStroke,
    NoStroke,
}

impl std::fmt::Display for RiskClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LikelyStroke => write!(f, "Likely Stroke"),
            Self::NoStroke => write!(f, "No Stroke"),
        }
    }
}

/// Result of a successful round trip to the service.
///
/// An empty `predictions` list from the service is a valid answer, not an
/// error, so it gets its own variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PredictionOutcome {
    Scored(StrokePrediction),
    Unavailable,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PredictionPort: Send + Sync {
    /// Submit one Input Record and await the service's answer.
    ///
    /// Single-shot: no retry, no cancellation, no client-side deadline
    /// beyond whatever the underlying network stack enforces.
    async fn predict(&self, record: InputRecord) -> Result<PredictionOutcome, PredictionError>;
}
