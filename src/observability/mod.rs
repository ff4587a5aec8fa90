// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic text lives in message structs rather than in format strings
//! scattered across the pipeline. Each message implements `Display` and
//! emits itself through `tracing` at a fixed level, so the binary's
//! subscriber decides what reaches stderr.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - Pipeline construction, stage execution and teardown
//! * `messages::loader` - Processor resolution and dynamic modules
//! * `messages::processor` - Built-in processor events
//! * `messages::record` - Record model failures and traces
//!
//! # Usage
//!
//! ```rust
//! use atp::observability::messages::engine::StageExecutionFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = StageExecutionFailed {
//!     index: 0,
//!     name: "json",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod logging;
pub mod messages;
#[cfg(test)]
pub mod test_logging;
