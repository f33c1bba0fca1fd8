//! # Chromalog - styled console logging
//!
//! Chromalog maps style names like `"red"`, `"bgBlue"` or `"underline"` to
//! ANSI escape sequences, composes them into loggers, and pretty-prints
//! nested values for the terminal.
//!
//! ## Core Concepts
//!
//! - [`StyleRegistry`]: fixed table from style name to escape sequence
//! - [`StyleSet`]: ordered list of style names forming a logger's prefix
//! - [`Value`]: dynamic log argument, including shared lists and maps
//! - [`format_value`]: depth-aware, cycle-safe pretty-printer
//! - [`Logger`]: styled log function with chaining (`.red().bold()`)
//! - [`LogContext`]: threshold level and output sinks, injectable
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use chromalog::{clog, LogContext, Map, MemorySink};
//!
//! let out = Arc::new(MemorySink::new());
//! let ctx = LogContext::builder().stdout(out.clone()).build();
//!
//! let user = Map::new().with("name", "Alice").with("age", 30);
//! clog!(ctx.create(["green"]).bold(), "user: {0}", user).unwrap();
//!
//! assert_eq!(
//!     out.lines(),
//!     ["\x1b[32m\x1b[1muser: { name: \"Alice\", age: 30 }\x1b[0m"]
//! );
//! ```
//!
//! ## Formatting Rules
//!
//! Arguments are formatted before styling:
//!
//! - A leading string followed by more arguments is a template: `{0}`,
//!   `{1}`, ... are replaced by the following arguments.
//! - Otherwise arguments are joined with spaces. Top-level strings are
//!   printed as-is; lists and maps go through [`format_value`].
//! - Null and undefined arguments are dropped unless nothing else remains.
//!
//! ## Levels and Streams
//!
//! Every logger carries a [`Level`]. The context threshold suppresses
//! loggers below it, and `WARN`/`ERROR` loggers write to stderr. Presets:
//! [`debug`] (dim), [`info`] (cyan), [`warn`] (yellow), [`error`] (red).
//!
//! ## Widgets
//!
//! [`ProgressBar`], [`boxed`] and [`separator`] render plain strings that
//! can be passed through any logger.

pub mod format;
pub mod logger;
pub mod style;
mod util;
pub mod value;
pub mod widgets;

pub use format::{format_args, format_template, format_value, format_value_at};
pub use logger::{
    create, debug, default_context, error, info, log, print_styled, set_log_level, warn, Level,
    LogContext, LogContextBuilder, LogError, Logger, MemorySink, ParseLevelError, Sink, Stream,
};
pub use style::{Diagnostic, StyleRegistry, StyleSet, RESET};
pub use util::{display_width, pad_to_width, truncate_to_width};
pub use value::{List, Map, Value};
pub use widgets::{
    boxed, separator, separator_for_terminal, BorderStyle, BoxOptions, ProgressBar,
};
