// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for opening dynamic processor modules.
//!
//! A module that cannot be opened, or that does not export `load`, is not a
//! usable processor. The loader skips it and keeps searching.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModuleError {
    /// The dynamic linker refused the file.
    #[error("Cannot open module {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    /// The module opened but does not export the `load` entry point.
    #[error("Module {path} has no load entry point: {source}")]
    MissingEntryPoint {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
}

pub type ModuleResult<T> = Result<T, ModuleError>;
