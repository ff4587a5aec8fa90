// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

use super::{Array, Dictionary};

/// The kinds of data a dictionary or array entry may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Newly created or recently cleared entry.
    None,
    String,
    Uint,
    Int,
    Double,
    Bool,
    Dict,
    Array,
}

impl ValueType {
    /// Every tag, in declaration order.
    pub const ALL: [ValueType; 8] = [
        ValueType::None,
        ValueType::String,
        ValueType::Uint,
        ValueType::Int,
        ValueType::Double,
        ValueType::Bool,
        ValueType::Dict,
        ValueType::Array,
    ];

    /// Human readable name of the tag.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::String => "string",
            ValueType::Uint => "unsigned integer",
            ValueType::Int => "integer",
            ValueType::Double => "double",
            ValueType::Bool => "boolean",
            ValueType::Dict => "dictionary",
            ValueType::Array => "array",
        }
    }

    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            ValueType::Uint | ValueType::Int | ValueType::Double | ValueType::Bool
        )
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed record value.
///
/// Composite variants own their nested container outright, so two live
/// values can never share a dictionary or an array. Cloning is a deep copy
/// and dropping releases the whole subtree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    String(String),
    Uint(u64),
    Int(i64),
    Double(f64),
    Bool(bool),
    Dict(Dictionary),
    Array(Array),
}

impl Value {
    /// The default payload for a tag: empty string or container, zeroed scalar.
    pub fn default_for(value_type: ValueType) -> Self {
        match value_type {
            ValueType::None => Value::None,
            ValueType::String => Value::String(String::new()),
            ValueType::Uint => Value::Uint(0),
            ValueType::Int => Value::Int(0),
            ValueType::Double => Value::Double(0.0),
            ValueType::Bool => Value::Bool(false),
            ValueType::Dict => Value::Dict(Dictionary::new()),
            ValueType::Array => Value::Array(Array::new()),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::None => ValueType::None,
            Value::String(_) => ValueType::String,
            Value::Uint(_) => ValueType::Uint,
            Value::Int(_) => ValueType::Int,
            Value::Double(_) => ValueType::Double,
            Value::Bool(_) => ValueType::Bool,
            Value::Dict(_) => ValueType::Dict,
            Value::Array(_) => ValueType::Array,
        }
    }

    /// Change the tag of this value.
    ///
    /// The old payload is released (recursively for containers) and the
    /// default payload of the new tag is installed. Retyping to the current
    /// tag keeps the payload as it is.
    pub fn retype(&mut self, value_type: ValueType) {
        if self.value_type() != value_type {
            *self = Value::default_for(value_type);
        }
    }

    /// Make this value a deep copy of `source`, releasing the old payload.
    pub fn copy_from(&mut self, source: &Value) {
        *self = source.clone();
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Dictionary> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Dictionary> for Value {
    fn from(value: Dictionary) -> Self {
        Value::Dict(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

/// Borrowing conversion used by the typed getters of [`Array`] and [`Dictionary`].
pub trait FromValue<'a>: Sized {
    /// The tag a value must carry for the conversion to succeed.
    const TYPE: ValueType;

    fn from_value(value: &'a Value) -> Option<Self>;
}

impl<'a> FromValue<'a> for &'a str {
    const TYPE: ValueType = ValueType::String;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> FromValue<'a> for u64 {
    const TYPE: ValueType = ValueType::Uint;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_uint()
    }
}

impl<'a> FromValue<'a> for i64 {
    const TYPE: ValueType = ValueType::Int;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_int()
    }
}

impl<'a> FromValue<'a> for f64 {
    const TYPE: ValueType = ValueType::Double;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_double()
    }
}

impl<'a> FromValue<'a> for bool {
    const TYPE: ValueType = ValueType::Bool;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> FromValue<'a> for &'a Dictionary {
    const TYPE: ValueType = ValueType::Dict;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_dict()
    }
}

impl<'a> FromValue<'a> for &'a Array {
    const TYPE: ValueType = ValueType::Array;

    fn from_value(value: &'a Value) -> Option<Self> {
        value.as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_cover_every_tag() {
        let names: Vec<&str> = ValueType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "none",
                "string",
                "unsigned integer",
                "integer",
                "double",
                "boolean",
                "dictionary",
                "array"
            ]
        );
        assert_eq!(ValueType::Dict.to_string(), "dictionary");
    }

    #[test]
    fn test_retype_installs_default_payload() {
        let cases = vec![
            (ValueType::None, Value::None),
            (ValueType::String, Value::String(String::new())),
            (ValueType::Uint, Value::Uint(0)),
            (ValueType::Int, Value::Int(0)),
            (ValueType::Double, Value::Double(0.0)),
            (ValueType::Bool, Value::Bool(false)),
            (ValueType::Dict, Value::Dict(Dictionary::new())),
            (ValueType::Array, Value::Array(Array::new())),
        ];

        for (value_type, expected) in cases {
            let mut value = if value_type == ValueType::String {
                Value::Uint(9)
            } else {
                Value::from("discard me")
            };
            value.retype(value_type);
            assert_eq!(value, expected, "retype to {}", value_type);
        }
    }

    #[test]
    fn test_retype_same_tag_keeps_payload() {
        let mut value = Value::Uint(42);
        value.retype(ValueType::Uint);
        assert_eq!(value, Value::Uint(42));

        let mut nested = Dictionary::new();
        nested.set("k", true).unwrap();
        let mut value = Value::Dict(nested.clone());
        value.retype(ValueType::Dict);
        assert_eq!(value.as_dict(), Some(&nested));
    }

    #[test]
    fn test_retype_releases_nested_container() {
        let mut inner = Array::new();
        inner.push(1u64).unwrap();
        let mut value = Value::Array(inner);

        value.retype(ValueType::Dict);
        assert_eq!(value.as_dict().map(Dictionary::count), Some(0));
        assert!(value.as_array().is_none());
    }

    #[test]
    fn test_copy_from_is_deep() {
        let mut nested = Dictionary::new();
        nested.set("inner", 7i64).unwrap();
        let source = Value::Dict(nested);

        let mut dest = Value::Bool(true);
        dest.copy_from(&source);
        assert_eq!(dest, source);

        dest.as_dict_mut().unwrap().set("inner", 8i64).unwrap();
        assert_eq!(source.as_dict().unwrap().get::<i64>("inner"), Ok(7));
        assert_eq!(dest.as_dict().unwrap().get::<i64>("inner"), Ok(8));
    }

    #[test]
    fn test_copy_from_string_replaces_previous_text() {
        let mut dest = Value::from("old");
        dest.copy_from(&Value::from("new"));
        assert_eq!(dest.as_str(), Some("new"));
    }
}
