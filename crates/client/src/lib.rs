//! Client for the HFP stroke-risk prediction API.
//!
//! One behavioral component: the [`SubmitHandler`], which runs a single
//! submission cycle - coerce the form fields into an Input Record, POST it
//! to the prediction endpoint, and render the outcome as HTML into an
//! injected result sink. The form fields and the result container are
//! explicit collaborators (`ports::outbound`) rather than ambient state.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

// Re-export commonly used entrypoints
pub use application::{InputRecord, SubmitHandler};
pub use infrastructure::{BufferSink, PredictionApiClient, StdoutSink};
