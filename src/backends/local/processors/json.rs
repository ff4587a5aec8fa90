// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `@json read stdin|<file>` and `@json write stdout|<file>`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use crate::errors::ProcessorError;
use crate::observability::messages::processor::{JsonDirection, JsonTransferred};
use crate::observability::messages::StructuredLog;
use crate::record::json::dictionary_from_json;
use crate::record::{Array, Dictionary};
use crate::traits::{Handoff, LoadContext, Processor, RunContext};

use super::{reject, string_parameters, write_stdout};

pub const NAME: &str = "json";

const STDIN: &str = "stdin";
const STDOUT: &str = "stdout";

pub fn usage() -> String {
    [
        "Processor: json",
        "    Reads or writes the working dictionary in JSON format.  When writing to a",
        "    file, the dictionary is also passed on to the next pipeline stage, if any.",
        "",
        "    Usage: @json read stdin|<filename>",
        "           @json write stdout|<filename>",
        "",
        "        stdin      Indicates that the JSON source should be read from stdin",
        "                   rather than a file",
        "        stdout     Indicates that the JSON source should be written to stdout",
        "                   rather than a file",
        "        <filename> The name of a file to read the working dictionary from or",
        "                   write it to",
        "",
        "",
    ]
    .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonMode {
    #[default]
    Read,
    Write,
}

impl JsonMode {
    fn parse(parameter: &str) -> Result<Self, ProcessorError> {
        match parameter {
            "read" => Ok(JsonMode::Read),
            "write" => Ok(JsonMode::Write),
            other => Err(ProcessorError::InvalidParameter {
                processor: NAME.to_string(),
                parameter: other.to_string(),
                reason: "expected 'read' or 'write'".to_string(),
            }),
        }
    }
}

pub fn load(ctx: &LoadContext, parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    JsonProcessor::from_parameters(ctx, parameters)
        .map(|processor| Box::new(processor) as Box<dyn Processor>)
        .map_err(|error| reject(NAME, &usage(), error))
}

#[derive(Debug)]
pub struct JsonProcessor {
    mode: JsonMode,
    location: String,
}

impl JsonProcessor {
    pub fn new(mode: JsonMode, location: impl Into<String>) -> Self {
        Self {
            mode,
            location: location.into(),
        }
    }

    /// Exactly two parameters, mode then location, unless help was requested.
    pub fn from_parameters(ctx: &LoadContext, parameters: &Array) -> Result<Self, ProcessorError> {
        let values = string_parameters(parameters)?;
        let mode = match values.first() {
            Some(mode) => JsonMode::parse(mode)?,
            None => JsonMode::default(),
        };

        if !ctx.help_requested && values.len() != 2 {
            return Err(ProcessorError::WrongParameterCount {
                processor: NAME.to_string(),
                expected: 2,
                found: values.len(),
            });
        }

        let location = values.get(1).copied().unwrap_or_default();
        Ok(Self::new(mode, location))
    }

    pub fn mode(&self) -> JsonMode {
        self.mode
    }

    fn write(&self, record: &Dictionary) -> Result<(), ProcessorError> {
        if self.location == STDOUT {
            let stdout = std::io::stdout();
            write_record(record, stdout.lock())
        } else {
            write_record(record, BufWriter::new(File::create(&self.location)?))
        }
    }

    fn read(&self) -> Result<Dictionary, ProcessorError> {
        if self.location == STDIN {
            read_record(std::io::stdin().lock())
        } else {
            read_record(BufReader::new(File::open(&self.location)?))
        }
    }
}

/// Pretty JSON followed by a newline.
pub fn write_record<W: Write>(record: &Dictionary, mut writer: W) -> Result<(), ProcessorError> {
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn read_record<R: Read>(reader: R) -> Result<Dictionary, ProcessorError> {
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    Ok(dictionary_from_json(json)?)
}

impl Processor for JsonProcessor {
    fn name(&self) -> &str {
        NAME
    }

    fn execute(
        &mut self,
        ctx: &RunContext,
        input: &mut Dictionary,
        output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        if ctx.help_requested {
            write_stdout(&usage())?;
            return Ok(Handoff::Produced);
        }

        match self.mode {
            JsonMode::Write => {
                self.write(input)?;
                JsonTransferred {
                    direction: JsonDirection::Write,
                    location: &self.location,
                    entries: input.count(),
                }
                .log();
                Ok(Handoff::PassThrough)
            }
            JsonMode::Read => {
                *output = self.read()?;
                JsonTransferred {
                    direction: JsonDirection::Read,
                    location: &self.location,
                    entries: output.count(),
                }
                .log();
                Ok(Handoff::Produced)
            }
        }
    }
}
