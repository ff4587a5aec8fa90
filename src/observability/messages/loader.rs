// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor resolution.
//!
//! This module contains message types for logging events related to:
//! * Dynamic module discovery and rejection
//! * Built-in registry lookups
//! * Load entry point failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// A candidate module file could not be used and resolution moved on.
///
/// # Log Level
/// `debug!` - Expected while probing search directories
pub struct ModuleSkipped<'a> {
    pub name: &'a str,
    pub path: &'a Path,
    pub error: &'a dyn std::error::Error,
}

impl Display for ModuleSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping module {} for '{}': {}",
            self.path.display(),
            self.name,
            self.error
        )
    }
}

impl StructuredLog for ModuleSkipped<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.name,
            path = %self.path.display(),
            "{}", self
        );
    }
}

/// A processor name resolved to a module or a built-in.
///
/// # Log Level
/// `debug!` - Resolution detail
///
/// # Example
/// ```
/// use atp::observability::messages::loader::ProcessorResolved;
/// use atp::observability::messages::StructuredLog;
///
/// let msg = ProcessorResolved {
///     name: "random",
///     source: "built-in",
/// };
///
/// msg.log();
/// ```
pub struct ProcessorResolved<'a> {
    pub name: &'a str,
    /// Module path, or `built-in`.
    pub source: &'a str,
}

impl Display for ProcessorResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Resolved processor '{}' from {}", self.name, self.source)
    }
}

impl StructuredLog for ProcessorResolved<'_> {
    fn log(&self) {
        tracing::debug!(processor = self.name, source = self.source, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_resolution",
            span_name = name,
            processor = self.name,
        )
    }
}

/// Neither a module nor the built-in registry knows the name.
///
/// # Log Level
/// `error!` - Aborts pipeline construction
pub struct NoMatchingProcessor<'a> {
    pub name: &'a str,
}

impl Display for NoMatchingProcessor<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No matching processor for '{}' found", self.name)
    }
}

impl StructuredLog for NoMatchingProcessor<'_> {
    fn log(&self) {
        tracing::error!(processor = self.name, "{}", self);
    }
}

/// A processor's load step rejected the stage.
///
/// # Log Level
/// `error!` - Aborts pipeline construction
pub struct ProcessorLoadFailed<'a> {
    pub name: &'a str,
    pub stage_index: u32,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' (stage {}) failed to load: {}",
            self.name, self.stage_index, self.error
        )
    }
}

impl StructuredLog for ProcessorLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor = self.name,
            stage_index = self.stage_index,
            "{}", self
        );
    }
}

/// A module-side entry point returned an error to the raw interface.
///
/// Emitted inside the module, so it is only visible when the module shares
/// the host's subscriber.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ModuleEntryFailed<'a> {
    pub entry: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ModuleEntryFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Module {} failed: {}", self.entry, self.error)
    }
}

impl StructuredLog for ModuleEntryFailed<'_> {
    fn log(&self) {
        tracing::error!(entry = self.entry, "{}", self);
    }
}
