//! Placeholder substitution and argument joining.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::value::format_value;
use crate::value::Value;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("valid regex"));

/// Replaces `{N}` markers with the formatted `values[N]`.
///
/// Containers go through the pretty-printer; everything else uses its
/// plain form, so strings are inserted without quotes. A marker whose index
/// has no value is left in place verbatim.
///
/// # Example
///
/// ```rust
/// use chromalog::{format_template, Value};
///
/// let out = format_template("Hello {0}, you are {1}", &["Alice".into(), Value::from(30)]);
/// assert_eq!(out, "Hello Alice, you are 30");
///
/// assert_eq!(format_template("{0} and {5}", &["x".into()]), "x and {5}");
/// ```
pub fn format_template(template: &str, values: &[Value]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| values.get(index))
                .map(argument_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Formats the arguments of one log call into a single message.
///
/// Null and undefined arguments are dropped first; if nothing survives, the
/// first original argument is kept so the call still shows something. When
/// the first surviving argument is a string and more follow, it is used as
/// a template for the rest. Otherwise every argument is formatted on its
/// own, joined with spaces, and continuation lines are indented by two
/// spaces.
///
/// An empty slice produces an empty string.
pub fn format_args(args: &[Value]) -> String {
    let mut kept: Vec<&Value> = args.iter().filter(|arg| !arg.is_nullish()).collect();
    if kept.is_empty() {
        kept.extend(args.first());
    }

    if let [Value::Str(template), rest @ ..] = kept.as_slice() {
        if !rest.is_empty() {
            let rest: Vec<Value> = rest.iter().map(|v| (*v).clone()).collect();
            return format_template(template, &rest);
        }
    }

    kept.iter()
        .map(|arg| argument_string(arg))
        .collect::<Vec<_>>()
        .join(" ")
        .replace('\n', "\n  ")
}

/// Top-level form of one argument: strings stay unquoted.
fn argument_string(value: &Value) -> String {
    if value.is_container() {
        format_value(value)
    } else {
        value.to_plain_string()
    }
}
