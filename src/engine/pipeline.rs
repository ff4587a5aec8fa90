// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pipeline construction, sequential execution and teardown.
//!
//! Stages run strictly in load order. Stage 0 receives an empty record; each
//! later stage receives whatever its predecessor handed off:
//!
//! ```text
//! {} -> [random] -> output -> [json write] -> same record (pass-through)
//! ```
//!
//! Every loaded stage is finalized exactly once, in load order, whether the
//! pipeline completes, a stage fails, or construction stops part way.

use std::time::Instant;

use crate::config::{truncate_display_name, StageSpec, HELP_PROCESSOR};
use crate::errors::PipelineError;
use crate::observability::messages::engine::{
    HelpStageSynthesized, PipelineCompleted, PipelineRequested, StageExecutionCompleted,
    StageExecutionFailed, StageExecutionStarted, StageFinalized,
};
use crate::observability::messages::StructuredLog;
use crate::record::{Array, Dictionary};
use crate::traits::{Handoff, LoadContext, Processor, RunContext};

use super::ProcessorLoader;

/// A loaded processor and the name it is displayed under.
pub struct Stage {
    name: String,
    processor: Box<dyn Processor>,
}

impl Stage {
    pub fn new(name: &str, processor: Box<dyn Processor>) -> Self {
        Self {
            name: truncate_display_name(name),
            processor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        self.processor.finalize();
        StageFinalized { name: &self.name }.log();
    }
}

/// What a completed run leaves behind.
#[derive(Debug)]
pub struct RunReport {
    /// The record handed off by the last stage.
    pub final_record: Dictionary,
    /// How each stage handed off, in stage order.
    pub handoffs: Vec<Handoff>,
}

pub struct Pipeline {
    stages: Vec<Stage>,
    help_requested: bool,
}

impl Pipeline {
    /// Resolve and load every stage in order.
    ///
    /// With no stages a single `help` stage is used. Help is requested for
    /// the whole run when any stage is named `help`. Loading stops at the
    /// first failure, and stages loaded so far are finalized.
    pub fn build(specs: &[StageSpec], loader: &ProcessorLoader) -> Result<Self, PipelineError> {
        let synthesized;
        let specs = if specs.is_empty() {
            HelpStageSynthesized.log();
            synthesized = [StageSpec {
                name: HELP_PROCESSOR.to_string(),
                parameters: Array::new(),
            }];
            &synthesized[..]
        } else {
            specs
        };

        let help_requested = specs.iter().any(|spec| spec.name == HELP_PROCESSOR);

        let mut stages = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            let ctx = LoadContext {
                stage_index: index as u32,
                help_requested,
            };
            // An early return drops `stages`, finalizing what was loaded.
            let processor = loader.resolve(&spec.name, &ctx, &spec.parameters)?;
            stages.push(Stage::new(&spec.name, processor));
        }

        Ok(Self {
            stages,
            help_requested,
        })
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(Stage::name)
    }

    /// Execute every stage once, threading each hand-off into the next stage.
    ///
    /// The first failing stage stops the run; its output and the in-flight
    /// input are released before the error is returned.
    pub fn run(&mut self) -> Result<RunReport, PipelineError> {
        let started = Instant::now();
        let ctx = RunContext {
            stage_count: self.stages.len() as u32,
            help_requested: self.help_requested,
        };

        let mut input = Dictionary::new();
        let mut handoffs = Vec::with_capacity(self.stages.len());

        for (index, stage) in self.stages.iter_mut().enumerate() {
            let start_msg = StageExecutionStarted {
                index,
                name: &stage.name,
                input_entries: input.count(),
            };
            let span = start_msg.span("execute");
            let _guard = span.enter();
            start_msg.log();

            let stage_started = Instant::now();
            let mut output = Dictionary::new();
            let handoff = match stage.processor.execute(&ctx, &mut input, &mut output) {
                Ok(handoff) => handoff,
                Err(source) => {
                    StageExecutionFailed {
                        index,
                        name: &stage.name,
                        error: &source,
                    }
                    .log();
                    return Err(PipelineError::StageFailed {
                        index,
                        name: stage.name.clone(),
                        source,
                    });
                }
            };

            // The record not handed on is dropped here.
            if handoff == Handoff::Produced {
                input = output;
            }

            StageExecutionCompleted {
                index,
                name: &stage.name,
                handoff,
                next_entries: input.count(),
                duration: stage_started.elapsed(),
            }
            .log();
            handoffs.push(handoff);
        }

        PipelineCompleted {
            stage_count: self.stages.len(),
            final_entries: input.count(),
            duration: started.elapsed(),
        }
        .log();

        Ok(RunReport {
            final_record: input,
            handoffs,
        })
    }

    /// Finalize every stage in load order.
    pub fn teardown(self) {
        drop(self);
    }
}

/// Build, run and tear down the pipeline described by `tokens`.
pub fn run_pipeline<S: AsRef<str>>(
    tokens: &[S],
    loader: &ProcessorLoader,
) -> Result<RunReport, PipelineError> {
    let specs = crate::config::parse_stages(tokens);
    let description = specs
        .iter()
        .map(|spec| spec.name.as_str())
        .collect::<Vec<_>>()
        .join(" > ");
    PipelineRequested {
        pipeline: &description,
        stage_count: specs.len(),
    }
    .log();

    let mut pipeline = Pipeline::build(&specs, loader)?;
    let report = pipeline.run();
    pipeline.teardown();
    report
}
