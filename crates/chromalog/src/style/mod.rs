//! Named ANSI styles and ordered style sets.
//!
//! This module provides the styling primitives every logger is built from:
//!
//! - [`StyleRegistry`]: the fixed table mapping style names to escape sequences
//! - [`StyleSet`]: an ordered, immutable list of style names
//! - [`Diagnostic`]: non-fatal problems reported while resolving styles or levels
//!
//! Lookups never fail. An unknown name resolves to the empty string so a
//! misspelled style degrades to unstyled output instead of an error.

mod error;
mod registry;
mod set;

pub use error::Diagnostic;
pub use registry::{StyleRegistry, RESET};
pub use set::StyleSet;
