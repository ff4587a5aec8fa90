// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline construction, execution and teardown.
//!
//! This module contains message types for logging events related to:
//! * The requested pipeline and the implicit help stage
//! * Per-stage execution (start, completion, failure)
//! * Stage teardown

use crate::observability::messages::StructuredLog;
use crate::traits::Handoff;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The pipeline the command line asked for.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use atp::observability::messages::engine::PipelineRequested;
///
/// let msg = PipelineRequested {
///     pipeline: "random > json",
///     stage_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineRequested<'a> {
    pub pipeline: &'a str,
    pub stage_count: usize,
}

impl Display for PipelineRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Requested pipeline: {} ({} stages)",
            self.pipeline, self.stage_count
        )
    }
}

impl StructuredLog for PipelineRequested<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline = self.pipeline,
            stage_count = self.stage_count,
            "{}", self
        );
    }
}

/// No stage was given, so a help stage stands in.
///
/// # Log Level
/// `debug!` - Construction detail
pub struct HelpStageSynthesized;

impl Display for HelpStageSynthesized {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No stages requested; running the help stage")
    }
}

impl StructuredLog for HelpStageSynthesized {
    fn log(&self) {
        tracing::debug!("{}", self);
    }
}

/// A stage is about to execute.
///
/// # Log Level
/// `info!` - Stage lifecycle
pub struct StageExecutionStarted<'a> {
    pub index: usize,
    pub name: &'a str,
    pub input_entries: usize,
}

impl Display for StageExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running stage {} '{}': input has {} entries",
            self.index, self.name, self.input_entries
        )
    }
}

impl StructuredLog for StageExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            stage_index = self.index,
            processor = self.name,
            input_entries = self.input_entries,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "stage_execution",
            span_name = name,
            stage_index = self.index,
            processor = self.name,
        )
    }
}

/// A stage executed successfully.
///
/// # Log Level
/// `info!` - Stage lifecycle
pub struct StageExecutionCompleted<'a> {
    pub index: usize,
    pub name: &'a str,
    pub handoff: Handoff,
    pub next_entries: usize,
    pub duration: std::time::Duration,
}

impl Display for StageExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let handoff = match self.handoff {
            Handoff::Produced => "produced",
            Handoff::PassThrough => "pass-through",
        };
        write!(
            f,
            "Stage {} '{}' completed ({}): next input has {} entries, duration={:?}",
            self.index, self.name, handoff, self.next_entries, self.duration
        )
    }
}

impl StructuredLog for StageExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            stage_index = self.index,
            processor = self.name,
            handoff = ?self.handoff,
            next_entries = self.next_entries,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// A stage's execute step failed; the pipeline unwinds.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use atp::observability::messages::engine::StageExecutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let msg = StageExecutionFailed {
///     index: 1,
///     name: "json",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct StageExecutionFailed<'a> {
    pub index: usize,
    pub name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for StageExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stage {} '{}' failed: {}",
            self.index, self.name, self.error
        )
    }
}

impl StructuredLog for StageExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            stage_index = self.index,
            processor = self.name,
            error = %self.error,
            "{}", self
        );
    }
}

/// A stage was finalized during teardown.
///
/// # Log Level
/// `debug!` - Teardown detail
pub struct StageFinalized<'a> {
    pub name: &'a str,
}

impl Display for StageFinalized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Finalized stage '{}'", self.name)
    }
}

impl StructuredLog for StageFinalized<'_> {
    fn log(&self) {
        tracing::debug!(processor = self.name, "{}", self);
    }
}

/// Every stage ran.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineCompleted {
    pub stage_count: usize,
    pub final_entries: usize,
    pub duration: std::time::Duration,
}

impl Display for PipelineCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline completed: {} stages, final record has {} entries, duration={:?}",
            self.stage_count, self.final_entries, self.duration
        )
    }
}

impl StructuredLog for PipelineCompleted {
    fn log(&self) {
        tracing::info!(
            stage_count = self.stage_count,
            final_entries = self.final_entries,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}
