//! Infrastructure adapters - concrete implementations of the outbound ports.

pub mod prediction_api;
pub mod sinks;

pub use prediction_api::PredictionApiClient;
pub use sinks::{BufferSink, StdoutSink};
