//! Styled loggers.

use std::sync::Arc;

use super::context::{LogContext, Stream};
use super::error::LogError;
use super::level::Level;
use crate::format::format_args;
use crate::style::{Diagnostic, StyleRegistry, StyleSet, RESET};
use crate::value::Value;

/// A reusable, styled log function.
///
/// A logger is a [`StyleSet`], a [`Level`] tag and the context it writes
/// through. It holds no other state; chaining a style returns a new
/// logger and leaves this one untouched.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chromalog::{LogContext, MemorySink, Value};
///
/// let out = Arc::new(MemorySink::new());
/// let ctx = LogContext::builder().stdout(out.clone()).build();
///
/// let alert = ctx.create(["red"]).bold();
/// alert.log(&["x".into()]).unwrap();
///
/// assert_eq!(out.lines(), ["\x1b[31m\x1b[1mx\x1b[0m"]);
/// ```
#[derive(Clone)]
pub struct Logger {
    styles: StyleSet,
    level: Level,
    stream: Option<Stream>,
    context: Arc<LogContext>,
}

impl Logger {
    /// Creates a logger, reporting every unknown style in `styles`.
    pub fn new(context: Arc<LogContext>, styles: StyleSet, level: Level) -> Self {
        for name in styles.unknown() {
            context.report(&Diagnostic::UnknownStyle {
                name: name.to_string(),
            });
        }
        Self {
            styles,
            level,
            stream: None,
            context,
        }
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn context(&self) -> &Arc<LogContext> {
        &self.context
    }

    /// Where this logger writes.
    ///
    /// Unless overridden with [`to_stream`](Self::to_stream), `WARN` and
    /// `ERROR` loggers write to stderr and the rest to stdout.
    pub fn stream(&self) -> Stream {
        self.stream.unwrap_or(match self.level {
            Level::Warn | Level::Error => Stream::Stderr,
            _ => Stream::Stdout,
        })
    }

    /// Returns a copy of this logger that always writes to `stream`.
    pub fn to_stream(&self, stream: Stream) -> Logger {
        Logger {
            stream: Some(stream),
            ..self.clone()
        }
    }

    /// Returns a copy of this logger tagged with `level`.
    pub fn with_level(&self, level: Level) -> Logger {
        Logger {
            level,
            ..self.clone()
        }
    }

    /// Returns a new logger with `name` appended to the style set.
    ///
    /// Each call builds a fresh logger; nothing is cached.
    pub fn chain(&self, name: &str) -> Logger {
        if !StyleRegistry::contains(name) {
            self.context.report(&Diagnostic::UnknownStyle {
                name: name.to_string(),
            });
        }
        Logger {
            styles: self.styles.with_style(name),
            ..self.clone()
        }
    }

    /// Formats and styles the arguments without writing them.
    pub fn render(&self, args: &[Value]) -> Result<String, LogError> {
        if args.is_empty() {
            return Err(LogError::EmptyInvocation);
        }
        Ok(format!("{}{}{}", self.styles.prefix(), format_args(args), RESET))
    }

    /// Formats, styles and writes the arguments as one line.
    ///
    /// Calling with no arguments is an error and writes nothing, whatever
    /// the current level. Otherwise the call is silently skipped when the
    /// logger's level is below the context threshold.
    pub fn log(&self, args: &[Value]) -> Result<(), LogError> {
        let line = self.render(args)?;
        if self.context.is_enabled(self.level) {
            self.context.sink(self.stream()).emit(&line);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("styles", &self.styles.names())
            .field("level", &self.level)
            .finish()
    }
}

macro_rules! chain_methods {
    ($($method:ident => $name:literal),* $(,)?) => {
        impl Logger {
            $(
                #[doc = concat!("Returns a new logger with `", $name, "` appended.")]
                pub fn $method(&self) -> Logger {
                    self.chain($name)
                }
            )*
        }
    };
}

chain_methods! {
    black => "black",
    red => "red",
    green => "green",
    yellow => "yellow",
    blue => "blue",
    magenta => "magenta",
    cyan => "cyan",
    white => "white",
    gray => "gray",
    bg_black => "bgBlack",
    bg_red => "bgRed",
    bg_green => "bgGreen",
    bg_yellow => "bgYellow",
    bg_blue => "bgBlue",
    bg_magenta => "bgMagenta",
    bg_cyan => "bgCyan",
    bg_white => "bgWhite",
    bright => "bright",
    bold => "bold",
    dim => "dim",
    italic => "italic",
    underline => "underline",
    blink => "blink",
    reverse => "reverse",
    inverse => "inverse",
    hidden => "hidden",
    strikethrough => "strikethrough",
    reset => "reset",
}
