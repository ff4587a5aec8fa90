// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the built-in processors.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// A processor refused its command-line parameters.
///
/// # Log Level
/// `error!` - The pipeline will not be built
///
/// # Example
/// ```
/// use atp::observability::messages::processor::ParametersRejected;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "not a number");
/// let msg = ParametersRejected {
///     processor: "random",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ParametersRejected<'a> {
    pub processor: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ParametersRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl StructuredLog for ParametersRejected<'_> {
    fn log(&self) {
        tracing::error!(processor = self.processor, "{}", self);
    }
}

/// The random processor produced its record.
///
/// # Log Level
/// `debug!` - Processor detail
pub struct RandomRecordGenerated {
    pub entries: usize,
    pub max_depth: u32,
}

impl Display for RandomRecordGenerated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generated random dictionary: {} top-level entries, max_depth={}",
            self.entries, self.max_depth
        )
    }
}

impl StructuredLog for RandomRecordGenerated {
    fn log(&self) {
        tracing::debug!(entries = self.entries, max_depth = self.max_depth, "{}", self);
    }
}

/// Direction of a JSON transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonDirection {
    Read,
    Write,
}

impl Display for JsonDirection {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            JsonDirection::Read => f.write_str("read"),
            JsonDirection::Write => f.write_str("write"),
        }
    }
}

/// The json processor moved a record to or from its target.
///
/// # Log Level
/// `debug!` - Processor detail
pub struct JsonTransferred<'a> {
    pub direction: JsonDirection,
    pub location: &'a str,
    pub entries: usize,
}

impl Display for JsonTransferred<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let preposition = match self.direction {
            JsonDirection::Read => "from",
            JsonDirection::Write => "to",
        };
        write!(
            f,
            "JSON {} {} {}: {} entries",
            self.direction, preposition, self.location, self.entries
        )
    }
}

impl StructuredLog for JsonTransferred<'_> {
    fn log(&self) {
        tracing::debug!(
            direction = %self.direction,
            location = self.location,
            entries = self.entries,
            "{}", self
        );
    }
}
