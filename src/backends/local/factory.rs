// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ProcessorError;
use crate::record::Array;
use crate::traits::{LoadContext, LoadFn, Processor};

use super::processors::{help, json, print, random};

/// A built-in processor: its name on the command line and its load step.
#[derive(Clone, Copy)]
pub struct StaticProcessor {
    pub name: &'static str,
    pub load: LoadFn,
}

/// Processors compiled into the binary.
pub const BUILTIN_PROCESSORS: &[StaticProcessor] = &[
    StaticProcessor {
        name: help::NAME,
        load: help::load,
    },
    StaticProcessor {
        name: json::NAME,
        load: json::load,
    },
    StaticProcessor {
        name: print::NAME,
        load: print::load,
    },
    StaticProcessor {
        name: random::NAME,
        load: random::load,
    },
];

/// Registry of statically linked processors, searched by exact name.
#[derive(Clone)]
pub struct LocalProcessorFactory {
    processors: Vec<StaticProcessor>,
}

impl LocalProcessorFactory {
    /// The registry of built-in processors.
    pub fn builtin() -> Self {
        Self::with_processors(BUILTIN_PROCESSORS.to_vec())
    }

    pub fn with_processors(processors: Vec<StaticProcessor>) -> Self {
        Self { processors }
    }

    /// Load step registered under `name`. Names are case sensitive.
    pub fn find(&self, name: &str) -> Option<LoadFn> {
        self.processors
            .iter()
            .find(|processor| processor.name == name)
            .map(|processor| processor.load)
    }

    /// Create a processor for one stage.
    ///
    /// Returns `None` when no processor is registered under `name`, and the
    /// load step's verdict otherwise.
    pub fn create_processor(
        &self,
        name: &str,
        ctx: &LoadContext,
        parameters: &Array,
    ) -> Option<Result<Box<dyn Processor>, ProcessorError>> {
        self.find(name).map(|load| load(ctx, parameters))
    }

    /// Names of all registered processors, in registration order.
    pub fn list_available_implementations(&self) -> Vec<&'static str> {
        self.processors.iter().map(|processor| processor.name).collect()
    }

    pub fn is_implementation_available(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

impl Default for LocalProcessorFactory {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Dictionary;
    use crate::traits::{Handoff, RunContext};

    fn ctx() -> LoadContext {
        LoadContext {
            stage_index: 0,
            help_requested: false,
        }
    }

    fn parameters(values: &[&str]) -> Array {
        values.iter().copied().collect()
    }

    #[test]
    fn test_create_random_processor() {
        let factory = LocalProcessorFactory::builtin();
        let mut processor = factory
            .create_processor("random", &ctx(), &parameters(&["2", "2", "1"]))
            .expect("random is built in")
            .expect("parameters are valid");

        let run = RunContext {
            stage_count: 1,
            help_requested: false,
        };
        let mut input = Dictionary::new();
        let mut output = Dictionary::new();
        let handoff = processor.execute(&run, &mut input, &mut output).unwrap();

        assert_eq!(handoff, Handoff::Produced);
        assert_eq!(output.count(), 2);
    }

    #[test]
    fn test_create_processor_rejects_parameters() {
        let factory = LocalProcessorFactory::builtin();
        let result = factory.create_processor("random", &ctx(), &parameters(&["2"]));
        assert!(matches!(
            result,
            Some(Err(ProcessorError::WrongParameterCount { .. }))
        ));
    }

    #[test]
    fn test_create_processor_unknown_name() {
        let factory = LocalProcessorFactory::builtin();
        assert!(factory
            .create_processor("nosuchprocessor", &ctx(), &Array::new())
            .is_none());
    }

    #[test]
    fn test_list_available_implementations() {
        let implementations = LocalProcessorFactory::builtin().list_available_implementations();
        assert_eq!(implementations, vec!["help", "json", "print", "random"]);
    }

    #[test]
    fn test_is_implementation_available() {
        let factory = LocalProcessorFactory::builtin();
        assert!(factory.is_implementation_available("json"));
        assert!(!factory.is_implementation_available("JSON"));
        assert!(!factory.is_implementation_available("nonexistent_processor"));
    }
}
