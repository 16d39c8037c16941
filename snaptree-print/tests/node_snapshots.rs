//! Snapshot tests for the AST node serializer
//!
//! Fixtures mirror what espree / typescript-estree emit for small programs:
//! nodes come in as JSON objects with `type`, `range`, `loc` and per-type
//! fields, and the expected text is pinned with inline snapshots.

use insta::assert_snapshot;
use snaptree_print::{Config, Printer, Value};

fn print(fixture: serde_json::Value) -> String {
    Printer::default()
        .print(&Value::from(fixture))
        .expect("fixture to print")
}

fn identifier_fixture() -> serde_json::Value {
    serde_json::json!({
        "type": "Identifier",
        "name": "x",
        "range": [0, 1],
        "loc": {
            "start": {"line": 1, "column": 0},
            "end": {"line": 1, "column": 1},
        },
    })
}

#[test]
fn identifier_node() {
    assert_snapshot!(print(identifier_fixture()), @r#"
    Identifier {
      type: "Identifier",
      name: "x",

      range: [0, 1],
      loc: {
        start: { column: 0, line: 1 },
        end: { column: 1, line: 1 },
      },
    }
    "#);
}

#[test]
fn node_with_no_ordinary_fields_keeps_the_separator() {
    let fixture = serde_json::json!({
        "type": "DebuggerStatement",
        "range": [0, 9],
        "loc": {
            "start": {"line": 1, "column": 0},
            "end": {"line": 1, "column": 9},
        },
    });
    assert_snapshot!(print(fixture), @r#"
    DebuggerStatement {
      type: "DebuggerStatement",

      range: [0, 9],
      loc: {
        start: { column: 0, line: 1 },
        end: { column: 9, line: 1 },
      },
    }
    "#);
}

#[test]
fn nested_nodes_reuse_the_serializer() {
    let fixture = serde_json::json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "Identifier",
            "name": "x",
            "range": [0, 1],
            "loc": {
                "start": {"line": 1, "column": 0},
                "end": {"line": 1, "column": 1},
            },
        },
        "range": [0, 2],
        "loc": {
            "start": {"line": 1, "column": 0},
            "end": {"line": 1, "column": 2},
        },
    });
    assert_snapshot!(print(fixture), @r#"
    ExpressionStatement {
      type: "ExpressionStatement",
      expression: Identifier {
        type: "Identifier",
        name: "x",

        range: [0, 1],
        loc: {
          start: { column: 0, line: 1 },
          end: { column: 1, line: 1 },
        },
      },

      range: [0, 2],
      loc: {
        start: { column: 0, line: 1 },
        end: { column: 2, line: 1 },
      },
    }
    "#);
}

#[test]
fn program_omits_interpreter() {
    let fixture = serde_json::json!({
        "type": "Program",
        "body": [],
        "sourceType": "script",
        "interpreter": null,
        "range": [0, 0],
        "loc": {
            "start": {"line": 1, "column": 0},
            "end": {"line": 1, "column": 0},
        },
    });
    let printed = print(fixture);
    assert!(!printed.contains("interpreter"));
    assert_snapshot!(printed, @r#"
    Program {
      type: "Program",
      body: [],
      sourceType: "script",

      range: [0, 0],
      loc: {
        start: { column: 0, line: 1 },
        end: { column: 0, line: 1 },
      },
    }
    "#);
}

#[test]
fn interpreter_renders_on_other_node_types() {
    let fixture = serde_json::json!({
        "type": "File",
        "interpreter": null,
        "range": [0, 0],
        "loc": {
            "start": {"line": 1, "column": 0},
            "end": {"line": 1, "column": 0},
        },
    });
    assert_snapshot!(print(fixture), @r#"
    File {
      type: "File",
      interpreter: null,

      range: [0, 0],
      loc: {
        start: { column: 0, line: 1 },
        end: { column: 0, line: 1 },
      },
    }
    "#);
}

#[test]
fn babel_start_end_offsets_never_render() {
    let fixture = serde_json::json!({
        "type": "Identifier",
        "name": "y",
        "start": 4,
        "end": 5,
        "range": [4, 5],
        "loc": {
            "start": {"line": 1, "column": 4},
            "end": {"line": 1, "column": 5},
        },
    });
    let printed = print(fixture);
    assert!(!printed.contains("start: 4"));
    assert!(!printed.contains("end: 5"));
    assert_snapshot!(printed, @r#"
    Identifier {
      type: "Identifier",
      name: "y",

      range: [4, 5],
      loc: {
        start: { column: 4, line: 1 },
        end: { column: 5, line: 1 },
      },
    }
    "#);
}

#[test]
fn undefined_fields_produce_no_lines() {
    use snaptree_print::Object;

    let mut node = Object::new();
    node.insert("type", Value::from("Identifier"));
    node.insert("name", Value::from("x"));
    node.insert("typeAnnotation", Value::Undefined);
    node.insert("range", Value::from(vec![Value::Int(0), Value::Int(1)]));
    node.insert(
        "loc",
        Value::from(serde_json::json!({
            "start": {"line": 1, "column": 0},
            "end": {"line": 1, "column": 1},
        })),
    );

    let printed = Printer::default()
        .print(&Value::from(node))
        .expect("node to print");
    assert!(!printed.contains("typeAnnotation"));
    assert_snapshot!(printed, @r#"
    Identifier {
      type: "Identifier",
      name: "x",

      range: [0, 1],
      loc: {
        start: { column: 0, line: 1 },
        end: { column: 1, line: 1 },
      },
    }
    "#);
}

#[test]
fn nodes_inside_arrays_indent_with_the_array() {
    let fixture = serde_json::json!({
        "type": "Program",
        "sourceType": "module",
        "body": [
            {
                "type": "EmptyStatement",
                "range": [0, 1],
                "loc": {
                    "start": {"line": 1, "column": 0},
                    "end": {"line": 1, "column": 1},
                },
            },
        ],
        "range": [0, 1],
        "loc": {
            "start": {"line": 1, "column": 0},
            "end": {"line": 1, "column": 1},
        },
    });
    assert_snapshot!(print(fixture), @r#"
    Program {
      type: "Program",
      body: [
        EmptyStatement {
          type: "EmptyStatement",

          range: [0, 1],
          loc: {
            start: { column: 0, line: 1 },
            end: { column: 1, line: 1 },
          },
        },
      ],
      sourceType: "module",

      range: [0, 1],
      loc: {
        start: { column: 0, line: 1 },
        end: { column: 1, line: 1 },
      },
    }
    "#);
}

#[test]
fn wider_indent_unit_applies_throughout() {
    let printer = Printer::with_defaults(Config {
        indent: "    ".to_string(),
        ..Config::default()
    });
    let printed = printer
        .print(&Value::from(identifier_fixture()))
        .expect("fixture to print");
    assert_snapshot!(printed, @r#"
    Identifier {
        type: "Identifier",
        name: "x",

        range: [0, 1],
        loc: {
            start: { column: 0, line: 1 },
            end: { column: 1, line: 1 },
        },
    }
    "#);
}

#[test]
fn output_has_no_trailing_newline() {
    let printed = print(identifier_fixture());
    assert!(printed.starts_with("Identifier {"));
    assert!(printed.ends_with("\n}"));
}
