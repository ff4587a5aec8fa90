// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

use crate::backends::local::StaticProcessor;
use crate::errors::ProcessorError;
use crate::record::{Array, Dictionary};
use crate::traits::{Handoff, LoadContext, Processor, RunContext};

thread_local! {
    static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn record_event(event: String) {
    EVENTS.with(|events| events.borrow_mut().push(event));
}

/// Drain the lifecycle events recorded on this thread, e.g. `execute:stub`.
pub fn take_events() -> Vec<String> {
    EVENTS.with(|events| std::mem::take(&mut *events.borrow_mut()))
}

/// Writes its name and the size of its input into a fresh output record.
pub struct StubProcessor {
    pub id: String,
}

impl StubProcessor {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Processor for StubProcessor {
    fn name(&self) -> &str {
        &self.id
    }

    fn execute(
        &mut self,
        _ctx: &RunContext,
        input: &mut Dictionary,
        output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        record_event(format!("execute:{}", self.id));
        output.set("stage", self.id.as_str())?;
        output.set("input_entries", input.count() as u64)?;
        Ok(Handoff::Produced)
    }

    fn finalize(&mut self) {
        record_event(format!("finalize:{}", self.id));
    }
}

/// Hands its input on untouched.
pub struct PassThroughProcessor {
    pub id: String,
}

impl Processor for PassThroughProcessor {
    fn name(&self) -> &str {
        &self.id
    }

    fn execute(
        &mut self,
        _ctx: &RunContext,
        _input: &mut Dictionary,
        _output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        record_event(format!("execute:{}", self.id));
        Ok(Handoff::PassThrough)
    }

    fn finalize(&mut self) {
        record_event(format!("finalize:{}", self.id));
    }
}

/// A processor that always fails for testing failure scenarios
pub struct FailingProcessor {
    pub id: String,
}

impl FailingProcessor {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Processor for FailingProcessor {
    fn name(&self) -> &str {
        &self.id
    }

    fn execute(
        &mut self,
        _ctx: &RunContext,
        _input: &mut Dictionary,
        _output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        record_event(format!("execute:{}", self.id));
        Err(ProcessorError::Failed(
            "Simulated processor failure".to_string(),
        ))
    }

    fn finalize(&mut self) {
        record_event(format!("finalize:{}", self.id));
    }
}

/// Panics on execute, for testing the module boundary.
pub struct PanickingProcessor;

impl Processor for PanickingProcessor {
    fn name(&self) -> &str {
        "panicking"
    }

    fn execute(
        &mut self,
        _ctx: &RunContext,
        _input: &mut Dictionary,
        _output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        panic!("simulated processor panic");
    }
}

fn load_stub(_ctx: &LoadContext, _parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    Ok(Box::new(StubProcessor::new("stub")))
}

fn load_pass(_ctx: &LoadContext, _parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    Ok(Box::new(PassThroughProcessor {
        id: "pass".to_string(),
    }))
}

fn load_failing(
    _ctx: &LoadContext,
    _parameters: &Array,
) -> Result<Box<dyn Processor>, ProcessorError> {
    Ok(Box::new(FailingProcessor::new("failing")))
}

/// Accepts only an empty parameter list.
fn load_strict(_ctx: &LoadContext, parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    if !parameters.is_empty() {
        return Err(ProcessorError::WrongParameterCount {
            processor: "strict".to_string(),
            expected: 0,
            found: parameters.len(),
        });
    }
    Ok(Box::new(StubProcessor::new("strict")))
}

/// Records the load context as a `load:context:<index>:<help>` event.
fn load_context(ctx: &LoadContext, _parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    record_event(format!(
        "load:context:{}:{}",
        ctx.stage_index, ctx.help_requested
    ));
    Ok(Box::new(StubProcessor::new("context")))
}

/// Registry entries for the stub processors above.
pub const STUB_PROCESSORS: &[StaticProcessor] = &[
    StaticProcessor {
        name: "stub",
        load: load_stub,
    },
    StaticProcessor {
        name: "pass",
        load: load_pass,
    },
    StaticProcessor {
        name: "failing",
        load: load_failing,
    },
    StaticProcessor {
        name: "strict",
        load: load_strict,
    },
    StaticProcessor {
        name: "context",
        load: load_context,
    },
];
