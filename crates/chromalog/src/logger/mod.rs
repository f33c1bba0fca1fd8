//! Styled loggers and the context they write through.
//!
//! This module provides:
//!
//! - [`Logger`]: a style set plus a level tag, callable with any arguments
//! - [`LogContext`]: threshold level and output sinks shared by loggers
//! - [`Level`]: `DEBUG < INFO < WARN < ERROR < NONE`
//! - [`Sink`] / [`MemorySink`]: where rendered lines go
//!
//! The free functions below use a process-wide default context that writes
//! to the terminal. Build a separate [`LogContext`] when output needs to be
//! captured or levels need to differ between components.

mod context;
mod error;
mod level;
#[allow(clippy::module_inception)]
mod logger;
mod sink;

pub use context::{default_context, LogContext, LogContextBuilder, Stream};
pub use error::{LogError, ParseLevelError};
pub use level::Level;
pub use logger::Logger;
pub use sink::{MemorySink, Sink};

/// Creates an `INFO` logger on the default context.
///
/// # Example
///
/// ```rust,no_run
/// let highlight = chromalog::create(["black", "bgYellow"]);
/// chromalog::clog!(highlight, "black on yellow").unwrap();
/// ```
pub fn create<I, S>(styles: I) -> Logger
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    default_context().create(styles)
}

/// Unstyled logger on the default context.
pub fn log() -> Logger {
    default_context().plain()
}

pub fn debug() -> Logger {
    default_context().debug()
}

pub fn info() -> Logger {
    default_context().info()
}

pub fn warn() -> Logger {
    default_context().warn()
}

pub fn error() -> Logger {
    default_context().error()
}

/// Writes `text` to stdout in the given styles through the default context.
///
/// See [`LogContext::print_styled`].
///
/// ```rust,no_run
/// chromalog::print_styled("Attention!", ["red,bright"]);
/// ```
pub fn print_styled<I, S>(text: &str, styles: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    default_context().print_styled(text, styles)
}

/// Sets the default context's threshold from a level name.
///
/// Unknown names report a diagnostic and select `INFO`.
pub fn set_log_level(name: &str) -> Level {
    default_context().set_level_str(name)
}

/// Calls a logger with any values convertible into [`Value`](crate::Value).
///
/// Expands to `logger.log(&[Value::from(arg), ...])` and returns its result.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chromalog::{clog, LogContext, MemorySink};
///
/// let out = Arc::new(MemorySink::new());
/// let ctx = LogContext::builder().stdout(out.clone()).build();
///
/// clog!(ctx.plain(), "{0} items in {1}", 3, "cart").unwrap();
/// assert_eq!(out.lines(), ["3 items in cart\x1b[0m"]);
/// ```
#[macro_export]
macro_rules! clog {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(&[$($crate::Value::from($arg)),*])
    };
}
