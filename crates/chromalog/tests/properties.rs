//! End-to-end checks of the logging pipeline through the public API.

use std::sync::Arc;

use chromalog::{
    clog, format_value, Level, LogContext, LogError, Map, MemorySink, StyleRegistry, Value,
};
use proptest::prelude::*;
use serde::Serialize;

struct Capture {
    ctx: Arc<LogContext>,
    out: Arc<MemorySink>,
    err: Arc<MemorySink>,
}

fn capture(level: Level) -> Capture {
    let out = Arc::new(MemorySink::new());
    let err = Arc::new(MemorySink::new());
    let ctx = LogContext::builder()
        .level(level)
        .stdout(out.clone())
        .stderr(err.clone())
        .build();
    Capture { ctx, out, err }
}

#[test]
fn template_substitution_does_not_quote() {
    let c = capture(Level::Info);
    clog!(c.ctx.plain(), "Hello {0}, you are {1}", "Alice", 30).unwrap();
    assert_eq!(c.out.lines(), ["Hello Alice, you are 30\x1b[0m"]);
}

#[test]
fn self_referencing_map_terminates() {
    let a = Map::new();
    a.insert("self", a.clone());

    let out = format_value(&Value::from(a));
    assert!(out.contains("[Circular]"));
}

#[test]
fn empty_containers() {
    assert_eq!(format_value(&Value::from(Vec::<i32>::new())), "[]");
    assert_eq!(format_value(&Value::from(Map::new())), "{}");
}

#[test]
fn inline_threshold() {
    assert_eq!(format_value(&Value::from(vec![1, 2, 3])), "[ 1, 2, 3 ]");
    assert_eq!(
        format_value(&Value::from(vec![1, 2, 3, 4])),
        "[\n  1,\n  2,\n  3,\n  4\n]"
    );
}

#[test]
fn chained_prefix_order() {
    let c = capture(Level::Info);
    clog!(c.ctx.create(["red"]).bold(), "x").unwrap();

    let expected = format!(
        "{}{}x{}",
        StyleRegistry::lookup("red"),
        StyleRegistry::lookup("bold"),
        StyleRegistry::lookup("reset")
    );
    assert_eq!(c.out.lines(), [expected]);
}

#[test]
fn empty_invocation_is_reported() {
    let c = capture(Level::Info);
    let result = clog!(c.ctx.create(["green"]));

    assert_eq!(result, Err(LogError::EmptyInvocation));
    assert!(c.out.is_empty());
}

#[test]
fn unknown_style_still_prints() {
    let c = capture(Level::Info);
    clog!(c.ctx.create(["notAColor"]), "x").unwrap();

    assert_eq!(c.out.lines(), ["x\x1b[0m"]);
    assert_eq!(c.err.lines().len(), 1);
}

#[test]
fn level_gating() {
    let c = capture(Level::Warn);
    clog!(c.ctx.create(["cyan"]).with_level(Level::Info), "info").unwrap();
    clog!(c.ctx.create(["red"]).with_level(Level::Error), "error").unwrap();

    assert!(c.out.is_empty());
    assert_eq!(c.err.lines(), ["\x1b[31merror\x1b[0m"]);
}

#[test]
fn serializable_structs_are_pretty_printed() {
    #[derive(Serialize)]
    struct Prefs {
        theme: String,
        notifications: bool,
    }

    #[derive(Serialize)]
    struct User {
        id: u32,
        roles: Vec<String>,
        prefs: Prefs,
    }

    let user = User {
        id: 1,
        roles: vec!["admin".into(), "user".into()],
        prefs: Prefs {
            theme: "dark".into(),
            notifications: true,
        },
    };

    let c = capture(Level::Info);
    let value = Value::from_serialize(&user).unwrap();
    clog!(c.ctx.plain(), value).unwrap();

    assert_eq!(
        c.out.contents(),
        "{\n    id: 1,\n    roles: [ \"admin\", \"user\" ],\n    prefs: { theme: \"dark\", notifications: true }\n  }\x1b[0m\n"
    );
}

#[test]
fn multiline_arguments_indent_continuations() {
    let c = capture(Level::Info);
    clog!(c.ctx.plain(), 1, vec![1, 2, 3, 4]).unwrap();

    assert_eq!(
        c.out.lines(),
        ["1 [\n    1,\n    2,\n    3,\n    4\n  ]\x1b[0m"]
    );
}

#[test]
fn none_arguments_fall_back_to_first() {
    let c = capture(Level::Info);
    clog!(c.ctx.plain(), Option::<i32>::None).unwrap();
    assert_eq!(c.out.lines(), ["null\x1b[0m"]);
}

proptest! {
    #[test]
    fn lookup_is_idempotent(name in "[a-zA-Z]{0,12}") {
        prop_assert_eq!(StyleRegistry::lookup(&name), StyleRegistry::lookup(&name));
    }

    #[test]
    fn lookup_never_fails(name in ".*") {
        let code = StyleRegistry::lookup(&name);
        prop_assert!(code.is_empty() || code.starts_with("\x1b["));
    }

    #[test]
    fn formatting_is_deterministic(items in proptest::collection::vec(any::<i32>(), 0..8)) {
        let value = Value::from(items);
        prop_assert_eq!(format_value(&value), format_value(&value));
    }

    #[test]
    fn short_int_lists_stay_inline(items in proptest::collection::vec(any::<i32>(), 1..=3)) {
        let out = format_value(&Value::from(items));
        prop_assert!(!out.contains('\n'));
    }
}
