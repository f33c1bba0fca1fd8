//! Display formatting for log arguments.
//!
//! - [`format_value`]: recursive, cycle-safe pretty-printer for nested values
//! - [`format_template`]: `{N}` placeholder substitution
//! - [`format_args`]: the full argument pipeline a logger runs before styling

mod template;
mod value;

pub use template::{format_args, format_template};
pub use value::{format_value, format_value_at};
