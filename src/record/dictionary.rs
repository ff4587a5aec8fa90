// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::errors::{RecordError, RecordResult};
use crate::observability::messages::record::{
    EntryLocation, EntrySet, KeyTooLong, MissingKey, TypeMismatch,
};
use crate::observability::messages::StructuredLog;

use super::{Array, FromValue, Value, ValueType};

/// Maximum length of a dictionary key, in bytes.
pub const MAX_KEY_LEN: usize = 127;

/// A keyed collection of values.
///
/// Iteration order is unspecified but stable as long as the dictionary is
/// not mutated. Keys are limited to [`MAX_KEY_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, Value>,
}

/// Position of a dictionary traversal.
///
/// A cursor remembers the key it points at, so it stays meaningful across
/// erasures made through [`Dictionary::erase_current`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    key: Option<String>,
}

impl Cursor {
    fn at(key: Option<&String>) -> Self {
        Self {
            key: key.cloned(),
        }
    }

    /// True while the cursor points at an entry; false once traversal is done.
    pub fn has_next(&self) -> bool {
        self.key.is_some()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key` and release its value. Absent keys are ignored.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Create or overwrite the entry for `key`.
    ///
    /// An existing entry keeps its key and has its value replaced, whatever
    /// its previous type. Fails only when `key` is longer than
    /// [`MAX_KEY_LEN`], in which case nothing is stored.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> RecordResult<()> {
        if key.len() > MAX_KEY_LEN {
            KeyTooLong {
                key,
                max: MAX_KEY_LEN,
            }
            .log();
            return Err(RecordError::KeyTooLong {
                len: key.len(),
                max: MAX_KEY_LEN,
            });
        }

        let value = value.into();
        EntrySet {
            location: EntryLocation::Key(key),
            value_type: value.value_type(),
        }
        .log();

        match self.entries.get_mut(key) {
            Some(existing) => *existing = value,
            None => {
                self.entries.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// The raw value stored under `key`.
    pub fn value(&self, key: &str) -> RecordResult<&Value> {
        self.entries.get(key).ok_or_else(|| missing_key(key))
    }

    pub fn value_type(&self, key: &str) -> RecordResult<ValueType> {
        self.value(key).map(Value::value_type)
    }

    /// Typed read of the entry under `key`.
    ///
    /// Fails when the key is absent or the entry holds another type.
    pub fn get<'a, T: FromValue<'a>>(&'a self, key: &str) -> RecordResult<T> {
        let value = self.value(key)?;
        T::from_value(value).ok_or_else(|| type_mismatch(key, T::TYPE, value.value_type()))
    }

    pub fn get_dict_mut(&mut self, key: &str) -> RecordResult<&mut Dictionary> {
        match self.entries.get_mut(key) {
            Some(Value::Dict(dict)) => Ok(dict),
            Some(other) => Err(type_mismatch(key, ValueType::Dict, other.value_type())),
            None => Err(missing_key(key)),
        }
    }

    pub fn get_array_mut(&mut self, key: &str) -> RecordResult<&mut Array> {
        match self.entries.get_mut(key) {
            Some(Value::Array(array)) => Ok(array),
            Some(other) => Err(type_mismatch(key, ValueType::Array, other.value_type())),
            None => Err(missing_key(key)),
        }
    }

    /// An independent deep copy of every entry.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Cursor at the first entry, or a terminal cursor when empty.
    pub fn begin(&self) -> Cursor {
        Cursor::at(self.entries.keys().next())
    }

    /// Cursor at the entry following `cursor`.
    pub fn next(&self, cursor: &Cursor) -> Cursor {
        match &cursor.key {
            Some(key) => Cursor::at(
                self.entries
                    .range::<str, _>((Bound::Excluded(key.as_str()), Bound::Unbounded))
                    .next()
                    .map(|(k, _)| k),
            ),
            None => Cursor { key: None },
        }
    }

    /// The entry a cursor points at.
    pub fn entry(&self, cursor: &Cursor) -> Option<(&str, &Value)> {
        let key = cursor.key.as_deref()?;
        self.entries
            .get_key_value(key)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Remove the entry under `cursor` and return a cursor to its successor.
    ///
    /// The successor is captured before removal, so a traversal that erases
    /// as it goes neither skips nor revisits entries.
    pub fn erase_current(&mut self, cursor: Cursor) -> Cursor {
        let successor = self.next(&cursor);
        if let Some(key) = cursor.key {
            self.entries.remove(&key);
        }
        successor
    }
}

fn missing_key(key: &str) -> RecordError {
    MissingKey { key }.log();
    RecordError::MissingKey {
        key: key.to_string(),
    }
}

fn type_mismatch(key: &str, expected: ValueType, found: ValueType) -> RecordError {
    TypeMismatch {
        location: EntryLocation::Key(key),
        expected,
        found,
    }
    .log();
    RecordError::TypeMismatch { expected, found }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    /// Collect key/value pairs; keys over [`MAX_KEY_LEN`] are skipped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            let key = key.into();
            // Over-long keys were already logged by `set`.
            let _ = dict.set(&key, value);
        }
        dict
    }
}
