// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `@help`: program usage plus every processor the loader can find.

use crate::backends::loadable::ProcessorListing;
use crate::backends::local::LocalProcessorFactory;
use crate::config::SearchPaths;
use crate::errors::ProcessorError;
use crate::record::{Array, Dictionary};
use crate::traits::{Handoff, LoadContext, Processor, RunContext};

use super::write_stdout;

pub const NAME: &str = "help";

/// Program banner and command-line synopsis.
pub fn usage() -> String {
    format!(
        "atp v{}\n\nUsage: atp @<processor> [processor args] [@<processor> [processor args] ...]\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Accepts and ignores any parameters.
pub fn load(_ctx: &LoadContext, _parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    Ok(Box::new(HelpProcessor::new(SearchPaths::from_env())))
}

pub struct HelpProcessor {
    search_paths: SearchPaths,
}

impl HelpProcessor {
    pub fn new(search_paths: SearchPaths) -> Self {
        Self { search_paths }
    }

    pub fn render(&self) -> String {
        let listing = ProcessorListing::discover(
            &self.search_paths,
            LocalProcessorFactory::builtin().list_available_implementations(),
        );
        format!("{}\n{}", usage(), listing)
    }
}

impl Processor for HelpProcessor {
    fn name(&self) -> &str {
        NAME
    }

    fn execute(
        &mut self,
        _ctx: &RunContext,
        _input: &mut Dictionary,
        _output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        write_stdout(&self.render())?;
        Ok(Handoff::Produced)
    }
}
