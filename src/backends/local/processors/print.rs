// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `@print`: dumps the working dictionary to stdout and passes it on.

use std::fmt::Write as _;

use crate::errors::ProcessorError;
use crate::record::{Array, Dictionary, Value};
use crate::traits::{Handoff, LoadContext, Processor, RunContext};

use super::write_stdout;

pub const NAME: &str = "print";

const INDENT: &str = "    ";

pub fn usage() -> String {
    [
        "Processor: print",
        "    Prints the working dictionary in a human readable form and passes it on",
        "    to the next pipeline stage, if any.",
        "",
        "    Usage: @print",
        "",
        "",
    ]
    .join("\n")
}

pub fn load(_ctx: &LoadContext, _parameters: &Array) -> Result<Box<dyn Processor>, ProcessorError> {
    Ok(Box::new(PrintProcessor))
}

pub struct PrintProcessor;

/// Indented rendering of `record`, one entry per line.
pub fn render(record: &Dictionary) -> String {
    let mut text = String::new();
    render_dictionary(&mut text, record, 0);
    text
}

fn render_dictionary(text: &mut String, dict: &Dictionary, level: usize) {
    let _ = writeln!(text, "{{");
    for (key, value) in dict.iter() {
        let _ = write!(text, "{}{:?}: ", INDENT.repeat(level + 1), key);
        render_value(text, value, level + 1);
    }
    let _ = writeln!(text, "{}}}", INDENT.repeat(level));
}

fn render_array(text: &mut String, array: &Array, level: usize) {
    let _ = writeln!(text, "[");
    for value in array {
        let _ = write!(text, "{}", INDENT.repeat(level + 1));
        render_value(text, value, level + 1);
    }
    let _ = writeln!(text, "{}]", INDENT.repeat(level));
}

fn render_value(text: &mut String, value: &Value, level: usize) {
    let _ = match value {
        Value::None => writeln!(text, "<none>"),
        Value::String(s) => writeln!(text, "{:?} <string>", s),
        Value::Uint(v) => writeln!(text, "{} <unsigned integer>", v),
        Value::Int(v) => writeln!(text, "{} <integer>", v),
        Value::Double(v) => writeln!(text, "{} <double>", v),
        Value::Bool(v) => writeln!(text, "{} <boolean>", v),
        Value::Dict(dict) => {
            render_dictionary(text, dict, level);
            Ok(())
        }
        Value::Array(array) => {
            render_array(text, array, level);
            Ok(())
        }
    };
}

impl Processor for PrintProcessor {
    fn name(&self) -> &str {
        NAME
    }

    fn execute(
        &mut self,
        ctx: &RunContext,
        input: &mut Dictionary,
        _output: &mut Dictionary,
    ) -> Result<Handoff, ProcessorError> {
        if ctx.help_requested {
            write_stdout(&usage())?;
            return Ok(Handoff::Produced);
        }

        write_stdout(&render(input))?;
        Ok(Handoff::PassThrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_record() {
        let mut inner = Array::new();
        inner.push(1u64).unwrap();
        inner.push(-2i64).unwrap();
        let mut record = Dictionary::new();
        record.set("flag", true).unwrap();
        record.set("list", inner).unwrap();

        assert_eq!(
            render(&record),
            "{\n    \"flag\": true <boolean>\n    \"list\": [\n        1 <unsigned integer>\n        -2 <integer>\n    ]\n}\n"
        );
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(render(&Dictionary::new()), "{\n}\n");
    }

    #[test]
    fn test_execute_passes_through() {
        let mut processor = PrintProcessor;
        let ctx = RunContext {
            stage_count: 1,
            help_requested: false,
        };
        let mut input = Dictionary::new();
        input.set("k", "v").unwrap();
        let mut output = Dictionary::new();

        let handoff = processor.execute(&ctx, &mut input, &mut output).unwrap();
        assert_eq!(handoff, Handoff::PassThrough);
        assert_eq!(input.count(), 1);
    }
}
