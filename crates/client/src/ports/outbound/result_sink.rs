//! Result Sink Port - the result container the handler writes into
//!
//! A port instead of an ambient document lookup: the handler stays free of
//! any display state and tests can capture exactly what was rendered.

pub trait ResultSinkPort: Send + Sync {
    /// Discard whatever the container currently shows.
    fn clear(&self);

    /// Replace the container's contents with the given markup.
    fn replace_html(&self, html: &str);
}
