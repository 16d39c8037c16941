//! Printer engine: serializer dispatch and default rendering
//!
//! The printer owns a ranked list of [`Serializer`] plugins. Every value passes
//! through [`Printer::render`]: basic values get a fixed textual form, complex
//! values are offered to the serializers in registration order (first match
//! wins) and fall back to the built-in block rendering when none claims them.

use crate::error::PrintError;
use crate::serializer::Serializer;
use crate::value::Value;

/// Formatting knobs shared by the printer and every serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// One indentation unit, repeated per nesting level.
    pub indent: String,
    /// Complex values nested deeper than this collapse to `[Object]`/`[Array]`.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: "  ".to_string(),
            max_depth: 20,
        }
    }
}

/// Cycle tracker keyed by object identity.
///
/// Holds the chain of complex values currently being rendered; a value that is
/// its own ancestor renders as `[Circular]`. The tracker is threaded through
/// every recursive call so serializers share one mechanism instead of keeping
/// their own bookkeeping.
#[derive(Debug, Default)]
pub struct Refs {
    ancestors: Vec<*const Value>,
}

impl Refs {
    fn contains(&self, value: &Value) -> bool {
        let needle: *const Value = value;
        self.ancestors.iter().any(|ancestor| *ancestor == needle)
    }

    fn enter(&mut self, value: &Value) {
        self.ancestors.push(value);
    }

    fn leave(&mut self) {
        self.ancestors.pop();
    }
}

/// Snapshot printer with a ranked serializer table
///
/// # Examples
///
/// ```ignore
/// let printer = Printer::with_defaults(Config::default());
/// let text = printer.print(&node)?;
/// ```
pub struct Printer {
    config: Config,
    serializers: Vec<Box<dyn Serializer>>,
}

impl Printer {
    /// Create a printer with no serializers registered.
    pub fn new(config: Config) -> Self {
        Printer {
            config,
            serializers: Vec::new(),
        }
    }

    /// Create a printer with the built-in serializers registered.
    pub fn with_defaults(config: Config) -> Self {
        let mut printer = Self::new(config);
        printer.register(crate::serializers::node::NodeSerializer);
        printer
    }

    /// Register a serializer.
    ///
    /// Serializers are probed in registration order; the first whose `test`
    /// accepts a value renders it.
    pub fn register<S: Serializer + 'static>(&mut self, serializer: S) {
        self.serializers.push(Box::new(serializer));
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Names of the registered serializers, in probe order.
    pub fn list_serializers(&self) -> Vec<String> {
        self.serializers
            .iter()
            .map(|serializer| serializer.name().to_string())
            .collect()
    }

    /// Render a value at the outermost position.
    ///
    /// The returned string carries no trailing newline; multi-line output ends
    /// with its closing delimiter at column zero.
    pub fn print(&self, value: &Value) -> Result<String, PrintError> {
        let mut refs = Refs::default();
        self.render(value, "", 0, &mut refs)
    }

    /// Render a value sitting at `indentation`, `depth` levels down.
    ///
    /// This is the delegate serializers call back into for nested values.
    pub fn render(
        &self,
        value: &Value,
        indentation: &str,
        depth: usize,
        refs: &mut Refs,
    ) -> Result<String, PrintError> {
        match value {
            Value::Undefined => Ok("undefined".to_string()),
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(n) => Ok(format_float(*n)),
            Value::Str(s) => Ok(quote(s)),
            Value::Array(_) | Value::Object(_) => {
                if refs.contains(value) {
                    return Ok("[Circular]".to_string());
                }
                if depth >= self.config.max_depth {
                    return Ok(match value {
                        Value::Array(_) => "[Array]".to_string(),
                        _ => "[Object]".to_string(),
                    });
                }
                refs.enter(value);
                let result = match self
                    .serializers
                    .iter()
                    .find(|serializer| serializer.test(value))
                {
                    Some(serializer) => {
                        serializer.serialize(value, self, indentation, depth + 1, refs)
                    }
                    None => self.render_default(value, indentation, depth + 1, refs),
                };
                refs.leave();
                result
            }
        }
    }

    /// Block rendering for arrays and plain objects nobody claimed.
    fn render_default(
        &self,
        value: &Value,
        indentation: &str,
        depth: usize,
        refs: &mut Refs,
    ) -> Result<String, PrintError> {
        let child_indentation = format!("{indentation}{}", self.config.indent);
        match value {
            Value::Array(items) => {
                if items.is_empty() {
                    return Ok("[]".to_string());
                }
                let mut out = String::from("[\n");
                for item in items {
                    out.push_str(&child_indentation);
                    out.push_str(&self.render(item, &child_indentation, depth, refs)?);
                    out.push_str(",\n");
                }
                out.push_str(indentation);
                out.push(']');
                Ok(out)
            }
            Value::Object(object) => {
                if object.is_empty() {
                    return Ok("{}".to_string());
                }
                // Plain objects have no serializer-imposed order; sort the
                // fields so the output is stable across insertion orders.
                let mut fields: Vec<(&str, &Value)> = object.iter().collect();
                fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
                let mut out = String::from("{\n");
                for (name, field) in fields {
                    if field.is_undefined() {
                        continue;
                    }
                    out.push_str(&child_indentation);
                    out.push_str(name);
                    out.push_str(": ");
                    out.push_str(&self.render(field, &child_indentation, depth, refs)?);
                    out.push_str(",\n");
                }
                out.push_str(indentation);
                out.push('}');
                Ok(out)
            }
            basic => self.render(basic, indentation, depth, refs),
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::with_defaults(Config::default())
    }
}

/// JavaScript-flavored float formatting, so snapshots read like the ASTs'
/// source ecosystem (`NaN`, `Infinity`, `1.5`, `1` for `1.0`).
pub(crate) fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

/// Double-quote a string, escaping quotes, backslashes and control whitespace.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
