//! Application layer - form coercion and the submission cycle.

pub mod form;
pub mod submit_handler;

pub use form::InputRecord;
pub use submit_handler::SubmitHandler;
