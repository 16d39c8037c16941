//! Snapshot serializer for ESTree-style AST nodes
//!
//! Any object carrying a string-valued `type` field is treated as an AST node
//! and rendered as `<Type> { ... }` with a canonical field order: `type`
//! first, the remaining fields alphabetically, then a blank line and a fixed
//! `range`/`loc` block. Position data always renders in one compact form
//! regardless of printer configuration, so snapshots diff cleanly no matter
//! which parser dialect produced the node.
//!
//! Babel-shaped nodes carry `start`/`end` offsets instead of `range`; those
//! two fields are never rendered. The `interpreter` field is dropped from
//! `Program` nodes only, to keep babel and typescript-estree snapshots of the
//! same source comparable.

use crate::error::PrintError;
use crate::printer::{format_float, Printer, Refs};
use crate::serializer::Serializer;
use crate::value::{Object, Value};

/// The node type whose `interpreter` field is suppressed.
const PROGRAM_TYPE: &str = "Program";

/// Fields handled by the fixed parts of the template, excluded from the
/// alphabetical block. `start`/`end` are the babel dialect's offset pair.
const POSITION_FIELDS: &[&str] = &["type", "range", "loc", "start", "end"];

/// Serializer for AST nodes (see the module docs for the output shape).
pub struct NodeSerializer;

impl Serializer for NodeSerializer {
    fn name(&self) -> &str {
        "ast-node"
    }

    fn description(&self) -> &str {
        "ESTree-style AST nodes as `<Type> { ... }` blocks with canonical field order"
    }

    fn test(&self, value: &Value) -> bool {
        matches!(
            value.as_object().and_then(|node| node.get("type")),
            Some(Value::Str(_))
        )
    }

    fn serialize(
        &self,
        value: &Value,
        printer: &Printer,
        indentation: &str,
        depth: usize,
        refs: &mut Refs,
    ) -> Result<String, PrintError> {
        let node = value
            .as_object()
            .ok_or_else(|| malformed("node serializer handed a non-object value"))?;
        let type_value = node
            .get("type")
            .ok_or_else(|| malformed("node serializer handed a node without a type"))?;
        let type_name = type_value
            .as_str()
            .ok_or_else(|| malformed("node serializer handed a non-string node type"))?;

        let indent = &printer.config().indent;
        let child_indentation = format!("{indentation}{indent}");
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("{type_name} {{"));
        // The type renders through the delegate so its quoting matches every
        // other string in the snapshot.
        let rendered_type = printer.render(type_value, &child_indentation, depth, refs)?;
        lines.push(format!("{child_indentation}type: {rendered_type},"));

        for name in sorted_field_names(node) {
            let Some(field) = node.get(name) else {
                continue;
            };
            if field.is_undefined() {
                continue;
            }
            let rendered = printer.render(field, &child_indentation, depth, refs)?;
            lines.push(format!("{child_indentation}{name}: {rendered},"));
        }

        // Blank separator before the position block, even with no fields above.
        lines.push(String::new());
        lines.push(format!(
            "{child_indentation}range: {},",
            render_range(node, type_name)?
        ));
        let loc = node
            .get("loc")
            .and_then(Value::as_object)
            .ok_or_else(|| malformed(format!("{type_name} node has a missing or non-object loc")))?;
        lines.push(format!("{child_indentation}loc: {{"));
        for edge in ["start", "end"] {
            let position = loc.get(edge).ok_or_else(|| {
                malformed(format!("{type_name} node loc has no {edge} position"))
            })?;
            lines.push(format!(
                "{child_indentation}{indent}{edge}: {},",
                line_and_column(position, type_name)?
            ));
        }
        lines.push(format!("{child_indentation}}},"));
        lines.push(format!("{indentation}}}"));

        Ok(lines.join("\n"))
    }
}

/// Names of the fields in the alphabetical block, in presentation order.
///
/// Position fields never appear here; `interpreter` is dropped for `Program`
/// nodes. Code point order stands in for the locale comparison of the
/// JavaScript ecosystem: ESTree field names are ASCII identifiers, where the
/// two agree, and unlike a locale comparison it is total and stable across
/// environments.
fn sorted_field_names(node: &Object) -> Vec<&str> {
    let is_program = matches!(node.get("type"), Some(Value::Str(t)) if t == PROGRAM_TYPE);
    let mut names: Vec<&str> = node
        .keys()
        .filter(|name| !POSITION_FIELDS.contains(name))
        .filter(|name| !(is_program && *name == "interpreter"))
        .collect();
    names.sort_unstable();
    names
}

/// Raw `[<start>, <end>]` rendering of the node's `range`, bypassing the
/// delegate so offsets always come out on one line.
fn render_range(node: &Object, type_name: &str) -> Result<String, PrintError> {
    let Some(Value::Array(range)) = node.get("range") else {
        return Err(malformed(format!(
            "{type_name} node has a missing or non-array range"
        )));
    };
    let mut offsets = Vec::with_capacity(range.len());
    for offset in range {
        offsets.push(number(offset, type_name, "range offset")?);
    }
    Ok(format!("[{}]", offsets.join(", ")))
}

/// Fixed `{ column: <c>, line: <l> }` rendering of one `loc` position.
fn line_and_column(position: &Value, type_name: &str) -> Result<String, PrintError> {
    let position = position
        .as_object()
        .ok_or_else(|| malformed(format!("{type_name} node loc position is not an object")))?;
    let column = coordinate(position, "column", type_name)?;
    let line = coordinate(position, "line", type_name)?;
    Ok(format!("{{ column: {column}, line: {line} }}"))
}

fn coordinate(position: &Object, axis: &str, type_name: &str) -> Result<String, PrintError> {
    let coordinate = position
        .get(axis)
        .ok_or_else(|| malformed(format!("{type_name} node loc position has no {axis}")))?;
    number(coordinate, type_name, axis)
}

fn number(value: &Value, type_name: &str, what: &str) -> Result<String, PrintError> {
    match value {
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(n) => Ok(format_float(*n)),
        other => Err(malformed(format!(
            "{type_name} node {what} must be numeric, got {}",
            other.kind()
        ))),
    }
}

fn malformed(message: impl Into<String>) -> PrintError {
    PrintError::MalformedNode(message.into())
}
