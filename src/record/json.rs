// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! JSON mapping of the record model.
//!
//! Records serialize through `serde`, so any serde format can write them.
//! Reading goes through `serde_json::Value` because JSON numbers have to be
//! narrowed to the record's integer kinds.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::errors::{RecordError, RecordResult};

use super::{Array, Dictionary, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Uint(v) => serializer.serialize_u64(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Dict(dict) => dict.serialize(serializer),
            Value::Array(array) => array.serialize(serializer),
        }
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.count()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Convert one JSON value. Numbers become `Uint` when they fit, then `Int`,
/// then `Double`.
pub fn value_from_json(json: serde_json::Value) -> RecordResult<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::None,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Value::Uint(u)
            } else if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Double(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            let mut array = Array::new();
            for item in items {
                array.push(value_from_json(item)?)?;
            }
            Value::Array(array)
        }
        object @ serde_json::Value::Object(_) => Value::Dict(dictionary_from_json(object)?),
    })
}

/// Convert a JSON object into a dictionary.
///
/// `null` members are left out. Anything other than an object at the top
/// level is rejected.
pub fn dictionary_from_json(json: serde_json::Value) -> RecordResult<Dictionary> {
    let members = match json {
        serde_json::Value::Object(members) => members,
        other => {
            return Err(RecordError::NotAnObject {
                found: json_kind(&other),
            })
        }
    };

    let mut dict = Dictionary::new();
    for (key, member) in members {
        if member.is_null() {
            continue;
        }
        dict.set(&key, value_from_json(member)?)?;
    }
    Ok(dict)
}
