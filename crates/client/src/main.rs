//! HFP prediction client - CLI composition root.
//!
//! Form fields are supplied as `name=value` arguments; the rendered result
//! markup is written to stdout.
//!
//! ```text
//! hfp-client gender=Male age=67 hypertension=0 heart_disease=1 \
//!     avg_glucose_level=228.69 bmi=36.6 smoking_status="formerly smoked"
//! ```

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hfp_client::{PredictionApiClient, StdoutSink, SubmitHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hfp_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let fields = parse_fields(std::env::args().skip(1))?;
    tracing::info!(field_count = fields.len(), "submitting prediction request");

    let api = Arc::new(PredictionApiClient::from_env());
    let sink = Arc::new(StdoutSink);
    let handler = SubmitHandler::new(api, sink);

    handler.submit(&fields).await;
    Ok(())
}

fn parse_fields(args: impl Iterator<Item = String>) -> anyhow::Result<Vec<(String, String)>> {
    let mut fields = Vec::new();
    for arg in args {
        match arg.split_once('=') {
            Some((name, value)) => fields.push((name.to_string(), value.to_string())),
            None => anyhow::bail!("expected name=value argument, got: {arg}"),
        }
    }
    Ok(fields)
}
