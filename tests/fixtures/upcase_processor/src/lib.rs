// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A loadable processor that upper-cases every string entry of its input.
//!
//! It takes no parameters. When `UPCASE_FINALIZE_LOG` is set, `finalize`
//! appends `finalize <stage index>` to that file.

use std::io::Write;

use atp::errors::ProcessorError;
use atp::record::{Array, Dictionary, Value};
use atp::traits::{Handoff, LoadContext, Processor, RunContext};

struct Upcase {
    stage_index: u32,
}

impl Processor for Upcase {
    fn name(&self) -> &str {
        "upcase"
    }

    fn execute(
        &mut self,
        _ctx: &RunContext,
        input: &mut Dictionary,
        output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        for (key, value) in input.iter() {
            match value {
                Value::String(text) => output.set(key, text.to_uppercase())?,
                other => output.set(key, other.clone())?,
            }
        }
        Ok(Handoff::Produced)
    }

    fn finalize(&mut self) {
        if let Ok(path) = std::env::var("UPCASE_FINALIZE_LOG") {
            if let Ok(mut log) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
            {
                let _ = writeln!(log, "finalize {}", self.stage_index);
            }
        }
    }
}

fn load(ctx: &LoadContext, parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    if !parameters.is_empty() {
        return Err(ProcessorError::WrongParameterCount {
            processor: "upcase".to_string(),
            expected: 0,
            found: parameters.len(),
        });
    }
    Ok(Box::new(Upcase {
        stage_index: ctx.stage_index,
    }))
}

atp::export_processor!(load);
