//! Output destinations for rendered log lines.

use std::sync::{Mutex, PoisonError};

use console::Term;

/// Receives complete lines; the sink adds the trailing newline.
///
/// Writes are fire-and-forget: a sink that fails to write drops the line.
pub trait Sink: Send + Sync {
    fn emit(&self, line: &str);
}

impl Sink for Term {
    fn emit(&self, line: &str) {
        let _ = self.write_line(line);
    }
}

/// A sink that keeps every line in memory.
///
/// Useful for tests and for callers that want to post-process output.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chromalog::{LogContext, MemorySink};
///
/// let out = Arc::new(MemorySink::new());
/// let ctx = LogContext::builder().stdout(out.clone()).build();
///
/// chromalog::clog!(ctx.create(["green"]), "done").unwrap();
/// assert_eq!(out.lines(), ["\x1b[32mdone\x1b[0m"]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line received so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All lines joined, each followed by a newline.
    pub fn contents(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_lines() {
        let sink = MemorySink::new();
        sink.emit("one");
        sink.emit("two");

        assert_eq!(sink.lines(), ["one", "two"]);
        assert_eq!(sink.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.emit("x");
        sink.clear();
        assert!(sink.is_empty());
    }
}
