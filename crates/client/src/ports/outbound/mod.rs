//! Outbound ports - Interfaces for external collaborators
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing the application layer to talk to the prediction
//! service and the result container without depending on concrete
//! implementations.

pub mod prediction_port;
pub mod result_sink;

pub use prediction_port::{
    PredictionError, PredictionOutcome, PredictionPort, RiskClass, StrokePrediction,
};
pub use result_sink::ResultSinkPort;

#[cfg(test)]
pub use prediction_port::MockPredictionPort;
