//! The fixed style-name table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The escape sequence that clears every color and attribute.
pub const RESET: &str = "\x1b[0m";

/// Style names and their escape sequences, in listing order.
const STYLE_TABLE: &[(&str, &str)] = &[
    // Foreground
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("gray", "\x1b[90m"),
    // Background
    ("bgBlack", "\x1b[40m"),
    ("bgRed", "\x1b[41m"),
    ("bgGreen", "\x1b[42m"),
    ("bgYellow", "\x1b[43m"),
    ("bgBlue", "\x1b[44m"),
    ("bgMagenta", "\x1b[45m"),
    ("bgCyan", "\x1b[46m"),
    ("bgWhite", "\x1b[47m"),
    // Attributes
    ("bright", "\x1b[1m"),
    ("bold", "\x1b[1m"),
    ("dim", "\x1b[2m"),
    ("italic", "\x1b[3m"),
    ("underline", "\x1b[4m"),
    ("blink", "\x1b[5m"),
    ("reverse", "\x1b[7m"),
    ("inverse", "\x1b[7m"),
    ("hidden", "\x1b[8m"),
    ("strikethrough", "\x1b[9m"),
    ("reset", RESET),
];

static STYLES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| STYLE_TABLE.iter().copied().collect());

/// Lookup table from style name to ANSI escape sequence.
///
/// The table is process-wide and immutable, so the registry itself carries
/// no state. Every lookup is a pure function of the name.
///
/// # Example
///
/// ```rust
/// use chromalog::StyleRegistry;
///
/// assert_eq!(StyleRegistry::lookup("red"), "\x1b[31m");
/// assert_eq!(StyleRegistry::lookup("bgred"), "\x1b[41m");
/// assert_eq!(StyleRegistry::lookup("notAColor"), "");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleRegistry;

impl StyleRegistry {
    /// Resolves a style name, returning `None` when nothing matches.
    ///
    /// Names are matched exactly first. A name starting with `bg` that is
    /// not found is retried with the color part capitalized, so `bgred`
    /// and `bgRed` resolve to the same sequence.
    pub fn resolve(name: &str) -> Option<&'static str> {
        if let Some(code) = STYLES.get(name) {
            return Some(*code);
        }

        let color = name.strip_prefix("bg")?;
        let mut chars = color.chars();
        let first = chars.next()?;
        let key = format!("bg{}{}", first.to_uppercase(), chars.as_str());
        STYLES.get(key.as_str()).copied()
    }

    /// Resolves a style name, falling back to the empty string.
    pub fn lookup(name: &str) -> &'static str {
        Self::resolve(name).unwrap_or("")
    }

    /// Returns true if the name resolves to a style.
    pub fn contains(name: &str) -> bool {
        Self::resolve(name).is_some()
    }

    /// Iterates over every known style name in listing order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        STYLE_TABLE.iter().map(|(name, _)| *name)
    }
}
