// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processors loaded at run time from `<dir>/<name>.processor` modules.
//!
//! # Module Pipeline
//! ```text
//! SearchPaths → ModuleLoader::open → load symbol → DynamicProcessor
//! ```

pub mod abi;
pub mod discovery;
pub mod error;
pub mod library;
pub mod processor;

pub use discovery::ProcessorListing;
pub use error::{ModuleError, ModuleResult};
pub use library::{LoadedModule, ModuleLoader};
pub use processor::DynamicProcessor;
