// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{LoaderError, ProcessorError};
use crate::config::{EX_SOFTWARE, EX_USAGE};

/// Why a pipeline did not run to completion.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A stage could not be resolved or rejected its parameters.
    /// No stage was executed.
    #[error("Pipeline construction failed: {0}")]
    Construction(#[from] LoaderError),

    /// A stage's execute step failed; later stages did not run.
    #[error("Stage {index} ('{name}') failed")]
    StageFailed {
        index: usize,
        name: String,
        #[source]
        source: ProcessorError,
    },
}

impl PipelineError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            PipelineError::Construction(_) => EX_USAGE,
            PipelineError::StageFailed { .. } => EX_SOFTWARE,
        }
    }
}
