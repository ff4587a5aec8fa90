// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::{RecordError, RecordResult};
use crate::observability::messages::record::{
    EntryLocation, EntrySet, IndexOutOfBounds, TypeMismatch,
};
use crate::observability::messages::StructuredLog;

use super::{Dictionary, FromValue, Value, ValueType};

/// An ordered, zero-indexed sequence of values of any type.
///
/// Writes at `len()` append; writes past the end are rejected and leave the
/// array as it was.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    entries: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn out_of_bounds(&self, index: usize) -> RecordError {
        IndexOutOfBounds {
            index,
            len: self.len(),
        }
        .log();
        RecordError::IndexOutOfBounds {
            index,
            len: self.len(),
        }
    }

    /// The raw value at `index`.
    pub fn value(&self, index: usize) -> RecordResult<&Value> {
        self.entries
            .get(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn value_type(&self, index: usize) -> RecordResult<ValueType> {
        self.value(index).map(Value::value_type)
    }

    /// Typed read of the entry at `index`.
    ///
    /// Fails when the index is out of range or the entry holds another type.
    pub fn get<'a, T: FromValue<'a>>(&'a self, index: usize) -> RecordResult<T> {
        let value = self.value(index)?;
        T::from_value(value).ok_or_else(|| type_mismatch(index, T::TYPE, value.value_type()))
    }

    pub fn get_dict_mut(&mut self, index: usize) -> RecordResult<&mut Dictionary> {
        let len = self.len();
        match self.entries.get_mut(index) {
            Some(Value::Dict(dict)) => Ok(dict),
            Some(other) => Err(type_mismatch(index, ValueType::Dict, other.value_type())),
            None => {
                IndexOutOfBounds { index, len }.log();
                Err(RecordError::IndexOutOfBounds { index, len })
            }
        }
    }

    pub fn get_array_mut(&mut self, index: usize) -> RecordResult<&mut Array> {
        let len = self.len();
        match self.entries.get_mut(index) {
            Some(Value::Array(array)) => Ok(array),
            Some(other) => Err(type_mismatch(index, ValueType::Array, other.value_type())),
            None => {
                IndexOutOfBounds { index, len }.log();
                Err(RecordError::IndexOutOfBounds { index, len })
            }
        }
    }

    /// Store `value` at `index`.
    ///
    /// `index == len()` appends. An existing entry is discarded and replaced,
    /// whatever its previous type. Composite values move into the array.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> RecordResult<()> {
        let value = value.into();
        if index > self.len() {
            return Err(self.out_of_bounds(index));
        }

        EntrySet {
            location: EntryLocation::Index(index),
            value_type: value.value_type(),
        }
        .log();

        if index == self.len() {
            self.entries.push(value);
        } else {
            self.entries[index] = value;
        }
        Ok(())
    }

    /// Append `value`; shorthand for `set(len(), value)`.
    pub fn push(&mut self, value: impl Into<Value>) -> RecordResult<()> {
        self.set(self.len(), value)
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    pub fn erase(&mut self, index: usize) -> RecordResult<()> {
        if index >= self.len() {
            return Err(self.out_of_bounds(index));
        }
        self.entries.remove(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// An independent deep copy.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.entries.iter()
    }
}

fn type_mismatch(index: usize, expected: ValueType, found: ValueType) -> RecordError {
    TypeMismatch {
        location: EntryLocation::Index(index),
        expected,
        found,
    }
    .log();
    RecordError::TypeMismatch { expected, found }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::test_logging::capture_logs;

    fn sample() -> Array {
        ["a", "b", "c"].into_iter().collect()
    }

    #[test]
    fn test_set_at_length_appends() {
        let mut array = Array::new();
        array.set(0, 1u64).unwrap();
        array.set(1, -1i64).unwrap();
        array.set(2, "three").unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(array.get::<u64>(0), Ok(1));
        assert_eq!(array.get::<i64>(1), Ok(-1));
        assert_eq!(array.get::<&str>(2), Ok("three"));
    }

    #[test]
    fn test_set_past_length_fails_without_change() {
        let mut array = sample();
        let before = array.clone();

        let result = array.set(4, true);
        assert_eq!(
            result,
            Err(RecordError::IndexOutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(array, before);
    }

    #[test]
    fn test_set_existing_index_replaces_type() {
        let mut array = sample();
        let mut nested = Dictionary::new();
        nested.set("x", 1.5).unwrap();

        array.set(1, nested.clone()).unwrap();
        assert_eq!(array.value_type(1), Ok(ValueType::Dict));
        assert_eq!(array.get::<&Dictionary>(1), Ok(&nested));

        array.set(1, false).unwrap();
        assert_eq!(array.value_type(1), Ok(ValueType::Bool));
        assert_eq!(array.len(), 3);
    }

    #[test]
    fn test_get_type_mismatch_reports_both_types() {
        let array = sample();
        assert_eq!(
            array.get::<u64>(0),
            Err(RecordError::TypeMismatch {
                expected: ValueType::Uint,
                found: ValueType::String,
            })
        );
    }

    #[test]
    fn test_type_mismatch_is_logged() {
        let array = sample();
        let (result, logs) = capture_logs(|| array.get::<u64>(1));

        assert!(result.is_err());
        assert!(logs.contains("Type mismatch at [1]: expected <unsigned integer>, found <string>"));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let array = sample();
        assert_eq!(
            array.get::<&str>(3),
            Err(RecordError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_erase_compacts() {
        let mut array = sample();
        array.erase(0).unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array.get::<&str>(0), Ok("b"));
        assert_eq!(array.get::<&str>(1), Ok("c"));

        assert!(array.erase(2).is_err());
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut inner = Array::new();
        inner.push(10u64).unwrap();
        let mut outer = Array::new();
        outer.push(inner).unwrap();

        let mut copy = outer.duplicate();
        copy.get_array_mut(0).unwrap().set(0, 20u64).unwrap();

        assert_eq!(outer.get::<&Array>(0).unwrap().get::<u64>(0), Ok(10));
        assert_eq!(copy.get::<&Array>(0).unwrap().get::<u64>(0), Ok(20));
    }

    #[test]
    fn test_nested_mutable_access_checks_type() {
        let mut array = sample();
        assert!(matches!(
            array.get_dict_mut(0),
            Err(RecordError::TypeMismatch { .. })
        ));
        assert!(matches!(
            array.get_array_mut(9),
            Err(RecordError::IndexOutOfBounds { .. })
        ));
    }
}
