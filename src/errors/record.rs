// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by the record model (values, arrays and dictionaries).
//!
//! Every variant is recoverable: the operation that produced it left the
//! record untouched.

use thiserror::Error;

use crate::record::ValueType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Read or write outside `0..len` (writes may also use `len` to append).
    #[error("Index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A typed getter found an entry of another type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueType, found: ValueType },

    /// Dictionary keys are limited to a fixed number of bytes.
    #[error("Key is too long: {len} bytes (max. {max})")]
    KeyTooLong { len: usize, max: usize },

    #[error("Key '{key}' not found")]
    MissingKey { key: String },

    /// Only a JSON object can become a dictionary.
    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

pub type RecordResult<T> = Result<T, RecordError>;
