// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `@random <min_entries> <max_entries> <max_depth>`: generates a random
//! dictionary, mostly useful for exercising downstream stages.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{ProcessorError, RecordError};
use crate::observability::messages::processor::RandomRecordGenerated;
use crate::observability::messages::StructuredLog;
use crate::record::{Array, Dictionary, Value, ValueType, MAX_KEY_LEN};
use crate::traits::{Handoff, LoadContext, Processor, RunContext};

use super::{reject, string_parameters, write_stdout};

pub const NAME: &str = "random";

/// Characters used for keys and string values.
pub const CHARACTERS: &[u8] =
    b" \"'.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const NESTING_TYPES: [ValueType; 7] = [
    ValueType::String,
    ValueType::Uint,
    ValueType::Int,
    ValueType::Double,
    ValueType::Bool,
    ValueType::Dict,
    ValueType::Array,
];

const LEAF_TYPES: [ValueType; 4] = [
    ValueType::Uint,
    ValueType::Int,
    ValueType::Double,
    ValueType::Bool,
];

pub fn usage() -> String {
    [
        "Processor: random",
        "    Generates a random dictionary.",
        "",
        "    Usage: @random <min_entries> <max_entries> <max_depth>",
        "",
        "        <min_entries> The minimum number of dictionary keys/array entries to",
        "                      create at each level",
        "        <max_entries> The maximum number of dictionary keys/array entries to",
        "                      create at each level",
        "          <max_depth> The maximum nested dictionary/array depth to use",
        "",
        "",
    ]
    .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomSettings {
    pub min_entries: u32,
    pub max_entries: u32,
    pub max_depth: u32,
}

impl RandomSettings {
    /// Parse the stage parameters.
    ///
    /// Exactly three are required unless help was requested. Whatever is
    /// present must be a plain decimal number, and `min_entries` may not
    /// exceed `max_entries`.
    pub fn from_parameters(ctx: &LoadContext, parameters: &Array) -> Result<Self, ProcessorError> {
        if !ctx.help_requested && parameters.len() != 3 {
            return Err(ProcessorError::WrongParameterCount {
                processor: NAME.to_string(),
                expected: 3,
                found: parameters.len(),
            });
        }

        let counts = string_parameters(parameters)?
            .into_iter()
            .map(parse_count)
            .collect::<Result<Vec<_>, _>>()?;
        let count = |index: usize| counts.get(index).copied().unwrap_or(0);
        let (min_entries, max_entries, max_depth) = (count(0), count(1), count(2));

        if min_entries > max_entries && parameters.len() >= 2 {
            return Err(ProcessorError::InvalidParameter {
                processor: NAME.to_string(),
                parameter: min_entries.to_string(),
                reason: format!("min_entries exceeds max_entries ({})", max_entries),
            });
        }

        Ok(Self {
            min_entries,
            max_entries,
            max_depth,
        })
    }
}

fn parse_count(parameter: &str) -> Result<u32, ProcessorError> {
    let invalid = |reason: &str| ProcessorError::InvalidParameter {
        processor: NAME.to_string(),
        parameter: parameter.to_string(),
        reason: reason.to_string(),
    };

    if parameter.is_empty() || !parameter.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a non-negative decimal number"));
    }
    parameter.parse().map_err(|_| invalid("number is too large"))
}

pub fn load(ctx: &LoadContext, parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    let settings = RandomSettings::from_parameters(ctx, parameters)
        .map_err(|error| reject(NAME, &usage(), error))?;
    Ok(Box::new(RandomProcessor::new(settings)))
}

pub struct RandomProcessor {
    settings: RandomSettings,
    rng: StdRng,
}

impl RandomProcessor {
    pub fn new(settings: RandomSettings) -> Self {
        Self {
            settings,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic output for a given seed.
    pub fn with_seed(settings: RandomSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> RandomSettings {
        self.settings
    }

    fn entry_count(&mut self) -> usize {
        self.rng
            .gen_range(self.settings.min_entries..=self.settings.max_entries) as usize
    }

    /// Composite types are only drawn while one more level fits.
    fn value_type(&mut self, depth: u32) -> ValueType {
        if depth + 1 < self.settings.max_depth {
            NESTING_TYPES[self.rng.gen_range(0..NESTING_TYPES.len())]
        } else {
            LEAF_TYPES[self.rng.gen_range(0..LEAF_TYPES.len())]
        }
    }

    fn string(&mut self) -> String {
        let len = self.rng.gen_range(1..=MAX_KEY_LEN);
        (0..len)
            .map(|_| CHARACTERS[self.rng.gen_range(0..CHARACTERS.len())] as char)
            .collect()
    }

    fn value(&mut self, value_type: ValueType, depth: u32) -> Result<Value, RecordError> {
        Ok(match value_type {
            ValueType::String => Value::String(self.string()),
            ValueType::Uint => Value::Uint(self.rng.gen()),
            ValueType::Int => Value::Int(self.rng.gen()),
            ValueType::Double => Value::Double(self.rng.gen_range(0.0..=1.0)),
            ValueType::Bool => Value::Bool(self.rng.gen()),
            ValueType::Dict => Value::Dict(self.dictionary(depth + 1)?),
            ValueType::Array => Value::Array(self.array(depth + 1)?),
            ValueType::None => Value::None,
        })
    }

    /// A dictionary with unique keys; a colliding key is drawn again.
    pub fn dictionary(&mut self, depth: u32) -> Result<Dictionary, RecordError> {
        let count = self.entry_count();
        let mut dict = Dictionary::new();
        while dict.count() < count {
            let key = self.string();
            if dict.contains_key(&key) {
                continue;
            }
            let value_type = self.value_type(depth);
            let value = self.value(value_type, depth)?;
            dict.set(&key, value)?;
        }
        Ok(dict)
    }

    /// An array whose entries all share one randomly chosen type.
    pub fn array(&mut self, depth: u32) -> Result<Array, RecordError> {
        let count = self.entry_count();
        let value_type = self.value_type(depth);
        let mut array = Array::new();
        for _ in 0..count {
            let value = self.value(value_type, depth)?;
            array.push(value)?;
        }
        Ok(array)
    }
}

impl Processor for RandomProcessor {
    fn name(&self) -> &str {
        NAME
    }

    fn execute(
        &mut self,
        ctx: &RunContext,
        _input: &mut Dictionary,
        output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        if ctx.help_requested {
            write_stdout(&usage())?;
            return Ok(Handoff::Produced);
        }

        *output = self.dictionary(0)?;
        RandomRecordGenerated {
            entries: output.count(),
            max_depth: self.settings.max_depth,
        }
        .log();
        Ok(Handoff::Produced)
    }
}
