// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod help;
pub mod json;
pub mod print;
pub mod random;

pub use help::HelpProcessor;
pub use json::{JsonMode, JsonProcessor};
pub use print::PrintProcessor;
pub use random::{RandomProcessor, RandomSettings};

use std::io::Write;

use crate::errors::ProcessorError;
use crate::observability::messages::processor::ParametersRejected;
use crate::observability::messages::StructuredLog;

/// Processor output goes to stdout; diagnostics go through tracing.
pub(crate) fn write_stdout(text: &str) -> Result<(), ProcessorError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Report a load-time rejection: log the reason and show usage.
pub(crate) fn reject(processor: &str, usage: &str, error: ProcessorError) -> ProcessorError {
    ParametersRejected {
        processor,
        error: &error,
    }
    .log();
    // Usage is advisory; the rejection stands even if stdout is gone.
    let _ = write_stdout(usage);
    error
}

/// Every parameter as a string, in order.
pub(crate) fn string_parameters(
    parameters: &crate::record::Array,
) -> Result<Vec<&str>, ProcessorError> {
    (0..parameters.len())
        .map(|i| parameters.get::<&str>(i).map_err(ProcessorError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::test_logging::capture_logs;

    #[test]
    fn test_rejection_log_names_processor_once() {
        let error = ProcessorError::InvalidParameter {
            processor: "random".to_string(),
            parameter: "x".to_string(),
            reason: "expected a non-negative decimal number".to_string(),
        };

        let (_, logs) = capture_logs(|| reject("random", "", error));

        assert!(logs.contains(
            "random: 'x' is not a valid parameter: expected a non-negative decimal number"
        ));
        assert!(!logs.contains("random: random:"));
    }

    #[test]
    fn test_string_parameters_rejects_non_strings() {
        let mut parameters: crate::record::Array = ["a"].into_iter().collect();
        parameters.push(1u64).unwrap();
        assert!(string_parameters(&parameters).is_err());
    }
}
