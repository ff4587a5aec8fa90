// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human readable text and
//! [`StructuredLog`] to emit itself with structured fields at the level its
//! documentation names.
//!
//! # Organization
//!
//! * `engine` - Pipeline construction, execution and teardown
//! * `loader` - Processor discovery and resolution
//! * `processor` - Built-in processor events
//! * `record` - Record model failures and traces
//!
//! # Usage Pattern
//!
//! ```rust
//! use atp::observability::messages::engine::PipelineRequested;
//! use atp::observability::messages::StructuredLog;
//!
//! let msg = PipelineRequested {
//!     pipeline: "random > json",
//!     stage_count: 2,
//! };
//!
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod engine;
pub mod loader;
pub mod processor;
pub mod record;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message at its documented level.
    fn log(&self);

    /// A span carrying the message's fields, for scoping nested events.
    fn span(&self, name: &str) -> Span {
        tracing::info_span!("event", span_name = name)
    }
}
