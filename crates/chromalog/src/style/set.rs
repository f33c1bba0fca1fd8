//! Ordered style sets.

use std::sync::Arc;

use super::registry::StyleRegistry;

/// An ordered, immutable sequence of style names.
///
/// Later styles are concatenated after earlier ones and duplicates are
/// kept. Appending produces a new set, so a set can be shared between a
/// logger and every logger chained from it.
///
/// # Example
///
/// ```rust
/// use chromalog::StyleSet;
///
/// let red = StyleSet::from_names(["red"]);
/// let red_bold = red.with_style("bold");
///
/// assert_eq!(red.names(), ["red"]);
/// assert_eq!(red_bold.prefix(), "\x1b[31m\x1b[1m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    names: Arc<[String]>,
}

impl StyleSet {
    /// Creates an empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a style set from names, keeping their order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new set with `name` appended.
    pub fn with_style(&self, name: &str) -> Self {
        let mut names = self.names.to_vec();
        names.push(name.to_string());
        Self {
            names: names.into(),
        }
    }

    /// The style names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in this set that have no registry entry.
    pub fn unknown(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !StyleRegistry::contains(name))
    }

    /// Concatenated escape sequences for every style, in set order.
    pub fn prefix(&self) -> String {
        self.names
            .iter()
            .map(|name| StyleRegistry::lookup(name))
            .collect()
    }
}
