//! Recursive pretty-printer.
//!
//! Layout rules:
//!
//! | Input | Output |
//! |-------|--------|
//! | `Null` / `Undefined` | `null` / `undefined` |
//! | string | `"text"` (quoted, not escaped) |
//! | empty list / map | `[]` / `{}` |
//! | list of at most 3 primitives or empty containers | `[ 1, 2, 3 ]` |
//! | map whose values are all primitives | `{ a: 1, b: "x" }` |
//! | anything else | one entry per line, indented two spaces per depth |
//!
//! Cycle detection is path-scoped: a container is `[Circular]` only when it
//! is one of its own ancestors. The same container reached through two
//! sibling branches is printed in full both times.

use crate::value::{float_to_string, Identity, List, Map, Value};

/// Most elements a list may have and still print on one line.
const INLINE_LIST_MAX: usize = 3;

const CIRCULAR: &str = "[Circular]";

/// Formats a value at depth zero.
///
/// # Example
///
/// ```rust
/// use chromalog::{format_value, Value};
///
/// assert_eq!(format_value(&Value::from(vec![1, 2, 3])), "[ 1, 2, 3 ]");
/// assert_eq!(format_value(&Value::from(vec![1, 2, 3, 4])), "[\n  1,\n  2,\n  3,\n  4\n]");
/// ```
pub fn format_value(value: &Value) -> String {
    format_value_at(value, 0)
}

/// Formats a value as if it were nested `depth` levels deep.
///
/// Depth only affects the indentation of multi-line output.
pub fn format_value_at(value: &Value, depth: usize) -> String {
    Formatter::default().value(value, depth)
}

/// Per-call formatting state: the chain of containers being expanded.
#[derive(Default)]
struct Formatter {
    ancestors: Vec<Identity>,
}

impl Formatter {
    fn value(&mut self, value: &Value, depth: usize) -> String {
        match value {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => float_to_string(*n),
            Value::Str(s) => format!("\"{}\"", s),
            Value::List(list) => self.list(list, depth),
            Value::Map(map) => self.map(map, depth),
        }
    }

    fn list(&mut self, list: &List, depth: usize) -> String {
        let id = list.identity();
        if self.ancestors.contains(&id) {
            return CIRCULAR.to_string();
        }
        let Some(items) = list.try_items() else {
            return "[Array]".to_string();
        };
        if items.is_empty() {
            return "[]".to_string();
        }

        self.ancestors.push(id);
        let inline = items.len() <= INLINE_LIST_MAX
            && items
                .iter()
                .all(|item| item.is_primitive() || item.is_empty_container());
        let parts: Vec<String> = items.iter().map(|item| self.value(item, depth + 1)).collect();
        self.ancestors.pop();

        if inline {
            format!("[ {} ]", parts.join(", "))
        } else {
            block('[', ']', &parts, depth)
        }
    }

    fn map(&mut self, map: &Map, depth: usize) -> String {
        let id = map.identity();
        if self.ancestors.contains(&id) {
            return CIRCULAR.to_string();
        }
        let Some(entries) = map.try_entries() else {
            return "[Object]".to_string();
        };
        if entries.is_empty() {
            return "{}".to_string();
        }

        self.ancestors.push(id);
        let inline = entries.iter().all(|(_, value)| value.is_primitive());
        let parts: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("{}: {}", key, self.value(value, depth + 1)))
            .collect();
        self.ancestors.pop();

        if inline {
            format!("{{ {} }}", parts.join(", "))
        } else {
            block('{', '}', &parts, depth)
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Lays out entries one per line between `open` and `close`.
fn block(open: char, close: char, parts: &[String], depth: usize) -> String {
    let inner = indent(depth + 1);
    let body: Vec<String> = parts.iter().map(|part| format!("{}{}", inner, part)).collect();
    format!("{}\n{}\n{}{}", open, body.join(",\n"), indent(depth), close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fmt(json: serde_json::Value) -> String {
        format_value(&Value::from(json))
    }

    #[test]
    fn test_primitives() {
        assert_eq!(format_value(&Value::Null), "null");
        assert_eq!(format_value(&Value::Undefined), "undefined");
        assert_eq!(format_value(&Value::from(true)), "true");
        assert_eq!(format_value(&Value::from(42)), "42");
        assert_eq!(format_value(&Value::from(2.5)), "2.5");
    }

    #[test]
    fn test_strings_are_quoted_not_escaped() {
        assert_eq!(format_value(&Value::from("hi")), "\"hi\"");
        assert_eq!(format_value(&Value::from("say \"x\"")), "\"say \"x\"\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(fmt(json!([])), "[]");
        assert_eq!(fmt(json!({})), "{}");
    }

    #[test]
    fn test_short_list_is_inline() {
        assert_eq!(fmt(json!([1, 2, 3])), "[ 1, 2, 3 ]");
        assert_eq!(fmt(json!(["a", null])), "[ \"a\", null ]");
    }

    #[test]
    fn test_list_with_empty_containers_is_inline() {
        assert_eq!(fmt(json!([[], {}, 1])), "[ [], {}, 1 ]");
    }

    #[test]
    fn test_long_list_is_multiline() {
        assert_eq!(fmt(json!([1, 2, 3, 4])), "[\n  1,\n  2,\n  3,\n  4\n]");
    }

    #[test]
    fn test_list_with_nested_content_is_multiline() {
        assert_eq!(fmt(json!([[1]])), "[\n  [ 1 ]\n]");
    }

    #[test]
    fn test_flat_map_is_inline() {
        assert_eq!(
            fmt(json!({ "name": "Alice", "age": 30, "tag": null })),
            "{ name: \"Alice\", age: 30, tag: null }"
        );
    }

    #[test]
    fn test_nested_map_indentation() {
        let out = fmt(json!({
            "id": 1,
            "prefs": { "theme": "dark" },
            "roles": ["admin", "user"]
        }));
        assert_eq!(
            out,
            "{\n  id: 1,\n  prefs: { theme: \"dark\" },\n  roles: [ \"admin\", \"user\" ]\n}"
        );
    }

    #[test]
    fn test_deep_nesting_indents_closing_brackets() {
        let out = fmt(json!({ "a": { "b": [1, 2, 3, 4] } }));
        assert_eq!(
            out,
            "{\n  a: {\n    b: [\n      1,\n      2,\n      3,\n      4\n    ]\n  }\n}"
        );
    }

    #[test]
    fn test_map_with_empty_list_is_multiline() {
        assert_eq!(fmt(json!({ "items": [] })), "{\n  items: []\n}");
    }

    #[test]
    fn test_depth_offsets_indentation() {
        let value = Value::from(vec![1, 2, 3, 4]);
        assert_eq!(
            format_value_at(&value, 1),
            "[\n    1,\n    2,\n    3,\n    4\n  ]"
        );
    }

    #[test]
    fn test_self_reference_is_circular() {
        let a = Map::new().with("name", "a");
        a.insert("self", a.clone());

        assert_eq!(format_value(&Value::from(a)), "{\n  name: \"a\",\n  self: [Circular]\n}");
    }

    #[test]
    fn test_indirect_cycle() {
        let outer = List::new();
        let inner = Map::new();
        inner.insert("back", outer.clone());
        outer.push(inner);

        let out = format_value(&Value::from(outer));
        assert!(out.contains("[Circular]"));
    }

    #[test]
    fn test_shared_sibling_is_not_circular() {
        let shared = Map::new().with("x", 1);
        let parent = Map::new()
            .with("left", shared.clone())
            .with("right", shared);

        let out = format_value(&Value::from(parent));
        assert!(!out.contains("[Circular]"));
        assert_eq!(out.matches("{ x: 1 }").count(), 2);
    }

    #[test]
    fn test_unreadable_map_falls_back() {
        let map = Map::new().with("a", 1);
        let _guard = map.entries_mut();
        assert_eq!(format_value(&Value::from(map.clone())), "[Object]");
    }

    #[test]
    fn test_unreadable_list_falls_back() {
        let list: List = vec![1, 2].into_iter().collect();
        let _guard = list.items_mut();
        assert_eq!(format_value(&Value::from(list.clone())), "[Array]");
    }

    #[test]
    fn test_display_uses_formatter() {
        let value = Value::from(json!({ "a": 1 }));
        assert_eq!(value.to_string(), "{ a: 1 }");
    }
}
