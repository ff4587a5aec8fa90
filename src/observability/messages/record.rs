// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record model events.
//!
//! This module contains message types for logging events related to:
//! * Array index violations
//! * Dictionary key validation and lookups
//! * Typed reads of the wrong type
//! * Entry writes (trace level only, these fire once per value)

use crate::observability::messages::StructuredLog;
use crate::record::ValueType;
use std::fmt::{Display, Formatter};

/// An array access fell outside the valid index range.
///
/// # Log Level
/// `warn!` - Recoverable failure reported to the caller
///
/// # Example
/// ```
/// use atp::observability::messages::record::IndexOutOfBounds;
///
/// let msg = IndexOutOfBounds { index: 5, len: 2 };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Index out of bounds: index={} length={}",
            self.index, self.len
        )
    }
}

impl StructuredLog for IndexOutOfBounds {
    fn log(&self) {
        tracing::warn!(index = self.index, len = self.len, "{}", self);
    }
}

/// A dictionary key exceeded the maximum key length; no entry was created.
///
/// # Log Level
/// `warn!` - Recoverable failure reported to the caller
pub struct KeyTooLong<'a> {
    pub key: &'a str,
    pub max: usize,
}

impl Display for KeyTooLong<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Key '{}' is too long (max. {} characters)",
            self.key, self.max
        )
    }
}

impl StructuredLog for KeyTooLong<'_> {
    fn log(&self) {
        tracing::warn!(key_len = self.key.len(), max = self.max, "{}", self);
    }
}

/// Where a value was written.
pub enum EntryLocation<'a> {
    Index(usize),
    Key(&'a str),
}

impl Display for EntryLocation<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            EntryLocation::Index(index) => write!(f, "[{}]", index),
            EntryLocation::Key(key) => write!(f, "['{}']", key),
        }
    }
}

/// A value was stored in an array or dictionary.
///
/// # Log Level
/// `trace!` - Per-value detail
pub struct EntrySet<'a> {
    pub location: EntryLocation<'a>,
    pub value_type: ValueType,
}

impl Display for EntrySet<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Setting {} = <{}>", self.location, self.value_type)
    }
}

impl StructuredLog for EntrySet<'_> {
    fn log(&self) {
        tracing::trace!(value_type = self.value_type.name(), "{}", self);
    }
}

/// A typed read found a value of another type; nothing was read.
///
/// # Log Level
/// `warn!` - Recoverable failure reported to the caller
pub struct TypeMismatch<'a> {
    pub location: EntryLocation<'a>,
    pub expected: ValueType,
    pub found: ValueType,
}

impl Display for TypeMismatch<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Type mismatch at {}: expected <{}>, found <{}>",
            self.location, self.expected, self.found
        )
    }
}

impl StructuredLog for TypeMismatch<'_> {
    fn log(&self) {
        tracing::warn!(
            expected = self.expected.name(),
            found = self.found.name(),
            "{}", self
        );
    }
}

/// A dictionary read named a key that is not present.
///
/// # Log Level
/// `debug!` - Absence is an ordinary lookup outcome
pub struct MissingKey<'a> {
    pub key: &'a str,
}

impl Display for MissingKey<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Key '{}' not found", self.key)
    }
}

impl StructuredLog for MissingKey<'_> {
    fn log(&self) {
        tracing::debug!("{}", self);
    }
}
