// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resolution of stage names to loaded processors.
//!
//! For a requested name:
//! 1. Each search directory is probed for `<name>.processor`. The first module
//!    that opens and exports `load` wins, and its verdict is final.
//! 2. Otherwise the built-in registry is searched by exact name.
//! 3. Otherwise resolution fails with "no matching processor".

use crate::backends::loadable::{DynamicProcessor, ModuleLoader, ProcessorListing};
use crate::backends::local::LocalProcessorFactory;
use crate::config::SearchPaths;
use crate::errors::{LoaderError, ProcessorError};
use crate::observability::messages::loader::{
    ModuleSkipped, NoMatchingProcessor, ProcessorLoadFailed, ProcessorResolved,
};
use crate::observability::messages::StructuredLog;
use crate::record::Array;
use crate::traits::{LoadContext, Processor};

pub struct ProcessorLoader {
    search_paths: SearchPaths,
    registry: LocalProcessorFactory,
}

impl ProcessorLoader {
    pub fn new(search_paths: SearchPaths, registry: LocalProcessorFactory) -> Self {
        Self {
            search_paths,
            registry,
        }
    }

    /// Search paths from the environment and the built-in registry.
    pub fn from_env() -> Self {
        Self::new(SearchPaths::from_env(), LocalProcessorFactory::builtin())
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    /// Load the processor for one stage.
    pub fn resolve(
        &self,
        name: &str,
        ctx: &LoadContext,
        parameters: &Array,
    ) -> Result<Box<dyn Processor>, LoaderError> {
        let load_failed = |source: ProcessorError| {
            ProcessorLoadFailed {
                name,
                stage_index: ctx.stage_index,
                error: &source,
            }
            .log();
            LoaderError::LoadFailed {
                name: name.to_string(),
                source,
            }
        };

        for path in self.search_paths.candidates(name) {
            let module = match ModuleLoader::open(&path) {
                Ok(module) => module,
                Err(error) => {
                    ModuleSkipped {
                        name,
                        path: &path,
                        error: &error,
                    }
                    .log();
                    continue;
                }
            };

            let processor =
                DynamicProcessor::load(name, module, ctx, parameters).map_err(load_failed)?;
            ProcessorResolved {
                name,
                source: &path.display().to_string(),
            }
            .log();
            return Ok(Box::new(processor));
        }

        match self.registry.create_processor(name, ctx, parameters) {
            Some(Ok(processor)) => {
                ProcessorResolved {
                    name,
                    source: "built-in",
                }
                .log();
                Ok(processor)
            }
            Some(Err(source)) => Err(load_failed(source)),
            None => {
                NoMatchingProcessor { name }.log();
                Err(LoaderError::NoMatchingProcessor {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Every module on the search path plus every built-in name.
    pub fn listing(&self) -> ProcessorListing {
        ProcessorListing::discover(
            &self.search_paths,
            self.registry.list_available_implementations(),
        )
    }
}
