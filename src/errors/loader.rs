// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::ProcessorError;

/// Failure to turn a stage name into a loaded processor.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Neither a dynamic module nor the built-in registry knows the name.
    #[error("No matching processor for '{name}'")]
    NoMatchingProcessor { name: String },

    /// The processor was found but rejected its parameters.
    #[error("Processor '{name}' failed to load")]
    LoadFailed {
        name: String,
        #[source]
        source: ProcessorError,
    },
}

impl LoaderError {
    pub fn name(&self) -> &str {
        match self {
            LoaderError::NoMatchingProcessor { name } | LoaderError::LoadFailed { name, .. } => {
                name
            }
        }
    }
}
