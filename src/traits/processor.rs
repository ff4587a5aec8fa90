// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The contract every pipeline stage implements.
//!
//! A processor is created by a [`LoadFn`] that validates the stage's
//! parameters, executed once per pipeline run, and finalized exactly once
//! when its stage is torn down. Built-in processors and dynamically loaded
//! modules implement the same trait.

use crate::errors::ProcessorError;
use crate::record::{Array, Dictionary};

/// Facts available to a processor while it validates its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadContext {
    /// Zero-based position of the stage in the pipeline.
    pub stage_index: u32,
    /// When set, processors accept any parameters and print usage instead
    /// of doing their normal work.
    pub help_requested: bool,
}

/// Facts available to a processor while it executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    pub stage_count: u32,
    pub help_requested: bool,
}

/// Which record a successful stage hands to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// `output` becomes the next input; the old input is released.
    Produced,
    /// The stage handed back the record it was given; `input` becomes the
    /// next input and the unused output is released.
    PassThrough,
}

pub trait Processor {
    /// Display name of the processor.
    fn name(&self) -> &str;

    /// Run the stage against `input`, writing into the empty `output`.
    fn execute(
        &mut self,
        ctx: &RunContext,
        input: &mut Dictionary,
        output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError>;

    /// Release anything the processor holds. Called once, at teardown.
    fn finalize(&mut self) {}
}

/// Validate `parameters` and build a processor for one stage.
///
/// On rejection the function prints its usage guidance and returns the
/// reason, which aborts pipeline construction.
pub type LoadFn = fn(&LoadContext, &Array) -> Result<Box<dyn Processor>, ProcessorError>;
