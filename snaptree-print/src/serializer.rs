//! Serializer trait definition
//!
//! A serializer is a plugin that claims certain values via a predicate and
//! renders the matches itself, calling back into the [`Printer`] for nested
//! values. The printer probes its serializers in registration order and hands
//! a value to the first one whose `test` returns true; values nobody claims
//! fall through to the printer's default rendering.

use crate::error::PrintError;
use crate::printer::{Printer, Refs};
use crate::value::Value;

/// Trait for snapshot serializer plugins
///
/// # Examples
///
/// ```ignore
/// struct RegexSerializer;
///
/// impl Serializer for RegexSerializer {
///     fn name(&self) -> &str {
///         "regex"
///     }
///
///     fn test(&self, value: &Value) -> bool {
///         value.as_object().is_some_and(|o| o.get("pattern").is_some())
///     }
///
///     fn serialize(
///         &self,
///         value: &Value,
///         printer: &Printer,
///         indentation: &str,
///         depth: usize,
///         refs: &mut Refs,
///     ) -> Result<String, PrintError> {
///         // Render the value, delegating nested fields back to the printer
///         todo!()
///     }
/// }
/// ```
pub trait Serializer: Send + Sync {
    /// The name of this serializer (e.g., "ast-node")
    fn name(&self) -> &str;

    /// Optional description of this serializer
    fn description(&self) -> &str {
        ""
    }

    /// Whether this serializer claims the given value.
    ///
    /// Pure predicate: returning false is a routing decision, not an error,
    /// and implementations must never fail here.
    fn test(&self, value: &Value) -> bool;

    /// Render a claimed value to a (possibly multi-line) string.
    ///
    /// `indentation` is the prefix at which the value itself sits; nested
    /// values must be rendered through [`Printer::render`] one indentation
    /// level deeper, passing `depth` and `refs` through unchanged so that
    /// recursion limits and cycle detection stay with the shared mechanism.
    fn serialize(
        &self,
        value: &Value,
        printer: &Printer,
        indentation: &str,
        depth: usize,
        refs: &mut Refs,
    ) -> Result<String, PrintError>;
}
