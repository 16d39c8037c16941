//! Dynamic value model for loosely-typed AST data
//!
//! Parsers in the ESTree family emit nodes whose field sets vary by node type,
//! so the printer works over a closed variant type rather than concrete node
//! structs. `Undefined` is the "absent" sentinel: a field holding it produces
//! no output at all, unlike `Null` which renders as `null`.

use crate::value::Value::{Array, Bool, Float, Int, Null, Str, Undefined};

/// A dynamically-shaped value, as produced by an AST parser or test fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Short label for the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Undefined => "undefined",
            Null => "null",
            Bool(_) => "boolean",
            Int(_) | Float(_) => "number",
            Str(_) => "string",
            Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

/// A key/value mapping that preserves field insertion order.
///
/// Presentation order is computed by the serializers, never by this container,
/// so keeping insertion order makes order-independence observable in tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    fields: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Object { fields: Vec::new() }
    }

    /// Set a field, replacing any existing field with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Field name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (name, value) in iter {
            object.insert(name, value);
        }
        object
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Array(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Null,
            serde_json::Value::Bool(b) => Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Int(i),
                // JSON has no NaN; unrepresentable numbers only arise from
                // u64 values above i64::MAX, which still convert losslessly
                // enough for display purposes.
                None => Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Str(s),
            serde_json::Value::Array(items) => Array(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(name, field)| (name, Value::from(field)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_preserves_insertion_order() {
        let mut object = Object::new();
        object.insert("zebra", Value::Int(1));
        object.insert("alpha", Value::Int(2));
        let keys: Vec<&str> = object.keys().collect();
        assert_eq!(keys, vec!["zebra", "alpha"]);
    }

    #[test]
    fn object_insert_replaces_in_place() {
        let mut object = Object::new();
        object.insert("a", Value::Int(1));
        object.insert("b", Value::Int(2));
        object.insert("a", Value::Int(3));
        assert_eq!(object.get("a"), Some(&Value::Int(3)));
        assert_eq!(object.len(), 2);
        let keys: Vec<&str> = object.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn json_numbers_map_to_int_and_float() {
        let value = Value::from(serde_json::json!({"a": 3, "b": 1.5}));
        let object = value.as_object().unwrap();
        assert_eq!(object.get("a"), Some(&Value::Int(3)));
        assert_eq!(object.get("b"), Some(&Value::Float(1.5)));
    }

    #[test]
    fn json_null_is_null_not_undefined() {
        let value = Value::from(serde_json::Value::Null);
        assert_eq!(value, Value::Null);
        assert!(!value.is_undefined());
    }
}
