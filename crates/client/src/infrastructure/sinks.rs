//! Concrete result sinks

use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::outbound::ResultSinkPort;

/// Sink that prints rendered markup to stdout. Used by the CLI binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ResultSinkPort for StdoutSink {
    fn clear(&self) {
        // A stream has no previous contents to discard.
    }

    fn replace_html(&self, html: &str) {
        println!("{html}");
    }
}

/// Shared in-memory sink. Doubles as the test fixture for capturing what
/// the handler rendered.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    contents: Arc<Mutex<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the container.
    pub fn contents(&self) -> String {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultSinkPort for BufferSink {
    fn clear(&self) {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn replace_html(&self, html: &str) {
        let mut contents = self.contents.lock().unwrap_or_else(PoisonError::into_inner);
        contents.clear();
        contents.push_str(html);
    }
}
