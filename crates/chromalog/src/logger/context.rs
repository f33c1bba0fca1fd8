//! Logging context: threshold level and output sinks.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use console::Term;
use once_cell::sync::Lazy;

use super::level::Level;
use super::logger::Logger;
use super::sink::Sink;
use crate::style::{Diagnostic, StyleRegistry, StyleSet, RESET};

/// Which stream a logger writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Configuration shared by every logger created from it.
///
/// A context owns the threshold level and the two output sinks. Loggers
/// keep an `Arc` to their context, so changing the level is seen by all of
/// them. Independent contexts do not affect each other.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chromalog::{Level, LogContext, MemorySink};
///
/// let out = Arc::new(MemorySink::new());
/// let ctx = LogContext::builder()
///     .level(Level::Warn)
///     .stdout(out.clone())
///     .build();
///
/// ctx.info().log(&["hidden".into()]).unwrap();
/// assert!(out.is_empty());
/// ```
pub struct LogContext {
    level: AtomicU8,
    stdout: Arc<dyn Sink>,
    stderr: Arc<dyn Sink>,
}

impl LogContext {
    /// Creates a context writing to the terminal at level `INFO`.
    pub fn new() -> Arc<Self> {
        Self::builder().build()
    }

    pub fn builder() -> LogContextBuilder {
        LogContextBuilder::default()
    }

    /// The current threshold.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Sets the threshold from its name.
    ///
    /// An unknown name reports a diagnostic and falls back to `INFO`.
    /// Returns the level that was applied.
    pub fn set_level_str(&self, name: &str) -> Level {
        let level = match name.parse::<Level>() {
            Ok(level) => level,
            Err(err) => {
                self.report(&Diagnostic::InvalidLogLevel { given: err.given });
                Level::Info
            }
        };
        self.set_level(level);
        level
    }

    /// Returns true if a logger tagged `level` should emit.
    pub fn is_enabled(&self, level: Level) -> bool {
        level != Level::None && level >= self.level()
    }

    /// Writes a diagnostic line to the error stream.
    pub fn report(&self, diagnostic: &Diagnostic) {
        self.stderr.emit(&format!(
            "{}chromalog: {}{}",
            StyleRegistry::lookup("yellow"),
            diagnostic,
            RESET
        ));
    }

    pub(crate) fn sink(&self, stream: Stream) -> &dyn Sink {
        match stream {
            Stream::Stdout => self.stdout.as_ref(),
            Stream::Stderr => self.stderr.as_ref(),
        }
    }

    /// Writes `text` to stdout wrapped in the given styles.
    ///
    /// Each entry may hold several comma-separated names. Unknown names
    /// contribute nothing and are not reported. The line bypasses level
    /// gating and template formatting.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use chromalog::{LogContext, MemorySink};
    ///
    /// let out = Arc::new(MemorySink::new());
    /// let ctx = LogContext::builder().stdout(out.clone()).build();
    /// ctx.print_styled("Attention!", ["red, bright", "underline"]);
    ///
    /// assert_eq!(out.lines(), ["\x1b[31m\x1b[1m\x1b[4mAttention!\x1b[0m"]);
    /// ```
    pub fn print_styled<I, S>(&self, text: &str, styles: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        for entry in styles {
            names.extend(
                entry
                    .as_ref()
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string),
            );
        }
        let prefix = StyleSet::from_names(names).prefix();
        self.stdout.emit(&format!("{prefix}{text}{RESET}"));
    }

    /// Creates an `INFO` logger with the given styles.
    pub fn create<I, S>(self: &Arc<Self>, styles: I) -> Logger
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Logger::new(Arc::clone(self), StyleSet::from_names(styles), Level::Info)
    }

    /// Unstyled `INFO` logger.
    pub fn plain(self: &Arc<Self>) -> Logger {
        Logger::new(Arc::clone(self), StyleSet::new(), Level::Info)
    }

    /// Dim `DEBUG` logger.
    pub fn debug(self: &Arc<Self>) -> Logger {
        self.create(["dim"]).with_level(Level::Debug)
    }

    /// Cyan `INFO` logger.
    pub fn info(self: &Arc<Self>) -> Logger {
        self.create(["cyan"])
    }

    /// Yellow `WARN` logger, writing to the error stream.
    pub fn warn(self: &Arc<Self>) -> Logger {
        self.create(["yellow"]).with_level(Level::Warn)
    }

    /// Red `ERROR` logger, writing to the error stream.
    pub fn error(self: &Arc<Self>) -> Logger {
        self.create(["red"]).with_level(Level::Error)
    }
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

/// Builder for [`LogContext`].
#[derive(Default)]
pub struct LogContextBuilder {
    level: Level,
    stdout: Option<Arc<dyn Sink>>,
    stderr: Option<Arc<dyn Sink>>,
}

impl LogContextBuilder {
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sink for loggers below `WARN`. Defaults to the terminal's stdout.
    pub fn stdout(mut self, sink: Arc<dyn Sink>) -> Self {
        self.stdout = Some(sink);
        self
    }

    /// Sink for `WARN`/`ERROR` loggers and diagnostics. Defaults to stderr.
    pub fn stderr(mut self, sink: Arc<dyn Sink>) -> Self {
        self.stderr = Some(sink);
        self
    }

    /// Sends both streams to the same sink.
    pub fn sink(self, sink: Arc<dyn Sink>) -> Self {
        self.stdout(Arc::clone(&sink)).stderr(sink)
    }

    pub fn build(self) -> Arc<LogContext> {
        Arc::new(LogContext {
            level: AtomicU8::new(self.level as u8),
            stdout: self.stdout.unwrap_or_else(|| Arc::new(Term::stdout())),
            stderr: self.stderr.unwrap_or_else(|| Arc::new(Term::stderr())),
        })
    }
}

static DEFAULT_CONTEXT: Lazy<Arc<LogContext>> = Lazy::new(LogContext::new);

/// The process-wide context used by the free functions of this crate.
pub fn default_context() -> Arc<LogContext> {
    Arc::clone(&DEFAULT_CONTEXT)
}
