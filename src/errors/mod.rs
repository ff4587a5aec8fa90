// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod execution;
mod loader;
mod processor;
mod record;

pub use execution::PipelineError;
pub use loader::LoaderError;
pub use processor::{ProcessorError, ProcessorResult};
pub use record::{RecordError, RecordResult};
