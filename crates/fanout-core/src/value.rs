//! The document value model.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

pub use serde_json::Number;

/// An insertion-ordered mapping of unique string keys to document values.
pub type Mapping = IndexMap<String, Value>;

/// A document in the JSON value model.
///
/// A document is a [`Mapping`], a sequence, or a scalar (null, boolean,
/// number, string), recursively closed under those three shapes. Mappings
/// preserve the order their keys were inserted in, which makes expansion
/// order deterministic and observable.
///
/// `Clone` is a structural deep copy: no two clones share any part of the
/// tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

/// The coarse shape of a [`Value`], for branching and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Sequence,
    Mapping,
}

impl Value {
    /// The coarse shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
            _ => ValueKind::Scalar,
        }
    }

    /// True for null, booleans, numbers, and strings.
    pub fn is_scalar(&self) -> bool {
        self.kind() == ValueKind::Scalar
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// The elements of a sequence value, if this is one.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// The entries of a mapping value, if this is one.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Scalar => f.write_str("scalar"),
            ValueKind::Sequence => f.write_str("sequence"),
            ValueKind::Mapping => f.write_str("mapping"),
        }
    }
}

/// Renders the value as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Parses one JSON document.
impl FromStr for Value {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Number(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        // Non-finite numbers have no JSON representation.
        Number::from_f64(v).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Value::Mapping(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Value {
        text.parse().expect("test document must be valid JSON")
    }

    #[test]
    fn kind_distinguishes_the_three_shapes() {
        assert_eq!(parse("null").kind(), ValueKind::Scalar);
        assert_eq!(parse("true").kind(), ValueKind::Scalar);
        assert_eq!(parse("3.5").kind(), ValueKind::Scalar);
        assert_eq!(parse("\"x\"").kind(), ValueKind::Scalar);
        assert_eq!(parse("[1,2]").kind(), ValueKind::Sequence);
        assert_eq!(parse("{\"a\":1}").kind(), ValueKind::Mapping);
    }

    #[test]
    fn mapping_preserves_key_order() {
        let doc = parse(r#"{"z":1,"a":2,"m":3}"#);
        let entries = doc.as_mapping().unwrap();
        let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn display_renders_compact_json_in_key_order() {
        let doc = parse(r#"{"z": 1, "a": [true, null], "m": {"k": "v"}}"#);
        assert_eq!(doc.to_string(), r#"{"z":1,"a":[true,null],"m":{"k":"v"}}"#);
    }

    #[test]
    fn round_trip_preserves_structure_and_order() {
        let text = r#"{"b":[1,2,{"c":null}],"a":{"y":"s","x":0.5},"n":-7}"#;
        let doc = parse(text);
        assert_eq!(doc.to_string(), text);
        assert_eq!(parse(&doc.to_string()), doc);
    }

    #[test]
    fn integers_and_floats_keep_their_representation() {
        assert_eq!(parse("1").to_string(), "1");
        assert_eq!(parse("1.0").to_string(), "1.0");
        assert_eq!(parse("-3").to_string(), "-3");
        assert_eq!(parse("18446744073709551615").to_string(), "18446744073709551615");
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert!("{\"a\":".parse::<Value>().is_err());
        assert!("".parse::<Value>().is_err());
        assert!("{'a': 1}".parse::<Value>().is_err());
    }

    #[test]
    fn clone_is_a_structural_deep_copy() {
        let original = parse(r#"{"a":{"b":[1,2]}}"#);
        let mut copy = original.clone();
        if let Value::Mapping(entries) = &mut copy {
            entries.insert("a".to_string(), Value::Null);
        }
        assert_eq!(original, parse(r#"{"a":{"b":[1,2]}}"#));
        assert_ne!(original, copy);
    }
}
