// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor backends.
//!
//! Both backends produce `Box<dyn Processor>` for a stage; the engine's
//! loader decides which one serves a given name.
//!
//! # Available Backends
//!
//! ## Loadable Backend
//! Shared-library modules named `<name>.processor`, found on the search path:
//! - **Entry point**: a C-ABI `load` symbol, generated by `export_processor!`
//! - **Lifetime**: the library stays mapped until its stage is finalized
//! - **Use Case**: processors shipped separately from the `atp` binary
//!
//! ## Local Backend
//! Processors compiled into the binary and looked up by exact name:
//! - `help`, `json`, `print`, `random`
//!
//! ## Stub Backend (Test-Only)
//! Testing utilities for engine development (only available in test builds):
//! - **StubProcessor**: Produces a small record naming itself
//! - **PassThroughProcessor**: Hands its input on unchanged
//! - **FailingProcessor**: Simulates execute failures
//! - **PanickingProcessor**: Exercises panic containment at the module boundary
//!
//! # Examples
//!
//! ```rust
//! use atp::backends::local::LocalProcessorFactory;
//! use atp::record::Array;
//! use atp::traits::LoadContext;
//!
//! let ctx = LoadContext { stage_index: 0, help_requested: false };
//! let parameters: Array = ["2", "2", "1"].into_iter().collect();
//!
//! let processor = LocalProcessorFactory::builtin()
//!     .create_processor("random", &ctx, &parameters)
//!     .expect("random is built in")?;
//! assert_eq!(processor.name(), "random");
//! # Ok::<(), atp::errors::ProcessorError>(())
//! ```

pub mod loadable;
pub mod local;
#[cfg(test)]
pub mod stub;
