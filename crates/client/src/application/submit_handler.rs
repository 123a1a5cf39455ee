//! Submit Handler - one form-submission cycle
//!
//! The single orchestration in this crate: build the Input Record, await the
//! prediction port, render the outcome, write it into the result sink. Every
//! failure is caught here and rendered; nothing propagates to the caller and
//! nothing is retried. A resubmission starts an entirely independent cycle.

use std::sync::Arc;

use crate::application::form::InputRecord;
use crate::ports::outbound::{PredictionOutcome, PredictionPort, ResultSinkPort};
use crate::ui::render;

/// Handles one request/response cycle per `submit` call.
///
/// Overlapping submissions are not coordinated: each call runs its own cycle
/// and whichever response resolves last owns the final sink contents
/// (last write wins, intentionally unguarded).
#[derive(Clone)]
pub struct SubmitHandler {
    prediction: Arc<dyn PredictionPort>,
    sink: Arc<dyn ResultSinkPort>,
}

impl SubmitHandler {
    pub fn new(prediction: Arc<dyn PredictionPort>, sink: Arc<dyn ResultSinkPort>) -> Self {
        Self { prediction, sink }
    }

    /// Run one cycle for the given form fields.
    ///
    /// The sink is cleared once the response (or failure) is in hand, then
    /// receives exactly one of: the prediction card, the neutral
    /// no-prediction message, or the red error paragraph.
    pub async fn submit(&self, fields: &[(String, String)]) {
        let record = InputRecord::from_fields(fields);
        let result = self.prediction.predict(record).await;

        self.sink.clear();
        match result {
            Ok(outcome) => {
                if matches!(outcome, PredictionOutcome::Unavailable) {
                    tracing::debug!("service returned no predictions");
                }
                self.sink.replace_html(&render::outcome_html(&outcome));
            }
            Err(e) => {
                tracing::error!(error = %e, "prediction request failed");
                self.sink.replace_html(&render::error_paragraph(&e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, PoisonError};

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::infrastructure::sinks::BufferSink;
    use crate::ports::outbound::{MockPredictionPort, PredictionError, StrokePrediction};

    /// Records the level of every emitted event.
    #[derive(Clone, Default)]
    struct LevelCapture {
        levels: Arc<Mutex<Vec<tracing::Level>>>,
    }

    impl LevelCapture {
        fn levels(&self) -> Vec<tracing::Level> {
            self.levels
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelCapture {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            self.levels
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(*event.metadata().level());
        }
    }

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    fn handler_with(port: MockPredictionPort, sink: &BufferSink) -> SubmitHandler {
        SubmitHandler::new(Arc::new(port), Arc::new(sink.clone()))
    }

    #[tokio::test]
    async fn scored_outcome_renders_card_into_sink() {
        let mut port = MockPredictionPort::new();
        port.expect_predict().times(1).returning(|_| {
            Ok(PredictionOutcome::Scored(StrokePrediction {
                stroke_risk_percentage: 70.0,
                no_stroke_risk_percentage: 30.0,
            }))
        });
        let sink = BufferSink::new();

        handler_with(port, &sink)
            .submit(&fields(&[("age", "67")]))
            .await;

        let html = sink.contents();
        assert!(html.contains("70%"));
        assert!(html.contains("30%"));
        assert!(html.contains("Likely Stroke"));
    }

    #[tokio::test]
    async fn unavailable_outcome_renders_neutral_message() {
        let mut port = MockPredictionPort::new();
        port.expect_predict()
            .returning(|_| Ok(PredictionOutcome::Unavailable));
        let sink = BufferSink::new();

        handler_with(port, &sink).submit(&fields(&[])).await;

        assert_eq!(sink.contents(), "<p>No prediction available.</p>");
    }

    #[tokio::test]
    async fn port_failure_renders_error_paragraph() {
        let mut port = MockPredictionPort::new();
        port.expect_predict()
            .returning(|_| Err(PredictionError::RequestFailed("bad input".to_string())));
        let sink = BufferSink::new();

        handler_with(port, &sink).submit(&fields(&[])).await;

        let html = sink.contents();
        assert!(html.contains("color: red"));
        assert!(html.contains("Error: bad input"));
    }

    #[tokio::test]
    async fn port_failure_emits_error_level_trace() {
        let mut port = MockPredictionPort::new();
        port.expect_predict()
            .returning(|_| Err(PredictionError::RequestFailed("bad input".to_string())));
        let sink = BufferSink::new();

        let capture = LevelCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        handler_with(port, &sink).submit(&fields(&[])).await;

        assert!(capture.levels().contains(&tracing::Level::ERROR));
    }

    #[tokio::test]
    async fn successful_cycle_emits_no_error_trace() {
        let mut port = MockPredictionPort::new();
        port.expect_predict().returning(|_| {
            Ok(PredictionOutcome::Scored(StrokePrediction {
                stroke_risk_percentage: 20.0,
                no_stroke_risk_percentage: 80.0,
            }))
        });
        let sink = BufferSink::new();

        let capture = LevelCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        handler_with(port, &sink).submit(&fields(&[])).await;

        assert!(!capture.levels().contains(&tracing::Level::ERROR));
    }

    #[tokio::test]
    async fn handler_receives_coerced_record() {
        let mut port = MockPredictionPort::new();
        port.expect_predict()
            .withf(|record| record.get("age") == Some(&serde_json::json!(67.0)))
            .returning(|_| Ok(PredictionOutcome::Unavailable));
        let sink = BufferSink::new();

        handler_with(port, &sink)
            .submit(&fields(&[("age", "67")]))
            .await;
    }

    #[tokio::test]
    async fn stale_contents_are_cleared_before_writing() {
        let mut port = MockPredictionPort::new();
        port.expect_predict()
            .returning(|_| Ok(PredictionOutcome::Unavailable));
        let sink = BufferSink::new();
        sink.replace_html("<p>old result</p>");

        handler_with(port, &sink).submit(&fields(&[])).await;

        assert!(!sink.contents().contains("old result"));
    }
}
