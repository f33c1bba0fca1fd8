//! Plain-string terminal widgets.
//!
//! Each widget renders to a `String`; printing is left to the caller,
//! usually through a [`Logger`](crate::Logger) to color it.

mod frame;
mod progress;

pub use frame::{boxed, separator, separator_for_terminal, BorderStyle, BoxOptions};
pub use progress::ProgressBar;
