// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors a processor reports from its load step or its execute step.

use thiserror::Error;

use super::RecordError;

#[derive(Error, Debug)]
pub enum ProcessorError {
    /// Parameter arity check failed during load.
    #[error("{processor}: wrong number of parameters (expected {expected}, found {found})")]
    WrongParameterCount {
        processor: String,
        expected: usize,
        found: usize,
    },

    /// A parameter was present but its content was rejected.
    #[error("{processor}: '{parameter}' is not a valid parameter: {reason}")]
    InvalidParameter {
        processor: String,
        parameter: String,
        reason: String,
    },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The processor panicked; the panic was contained at the module boundary.
    #[error("{processor}: processor panicked")]
    Panicked { processor: String },

    #[error("{0}")]
    Failed(String),
}

pub type ProcessorResult<T> = Result<T, ProcessorError>;
