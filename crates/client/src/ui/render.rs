//! HTML rendering for prediction outcomes
//!
//! Pure string producers; the result sink owns the actual writing. The card
//! markup carries the `prediction-card` / `prediction-item` classes that
//! host stylesheets target.

use crate::ports::outbound::{PredictionOutcome, StrokePrediction};

/// Neutral message for a success response with nothing to show.
pub const NO_PREDICTION_HTML: &str = "<p>No prediction available.</p>";

/// Render a successful outcome: card when scored, neutral message otherwise.
pub fn outcome_html(outcome: &PredictionOutcome) -> String {
    match outcome {
        PredictionOutcome::Scored(prediction) => prediction_card(prediction),
        PredictionOutcome::Unavailable => NO_PREDICTION_HTML.to_string(),
    }
}

/// Render the prediction card: both percentages plus the classification.
pub fn prediction_card(prediction: &StrokePrediction) -> String {
    format!(
        r#"<div class="prediction-card">
    <h3>Prediction Results</h3>
    <div class="prediction-item">
        <span class="label">No Stroke Risk</span>
        <span class="value">{no_stroke}%</span>
    </div>
    <div class="prediction-item">
        <span class="label">Stroke Risk</span>
        <span class="value">{stroke}%</span>
    </div>
    <div style="margin-top: 10px; font-size: 18px;">
        <strong>Prediction:</strong> {class}
    </div>
</div>"#,
        no_stroke = prediction.no_stroke_risk_percentage,
        stroke = prediction.stroke_risk_percentage,
        class = prediction.classify(),
    )
}

/// Render a failure as the red error paragraph.
pub fn error_paragraph(message: &str) -> String {
    format!("<p style='color: red;'>Error: {message}</p>")
}
