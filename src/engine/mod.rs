// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod loader;
pub mod pipeline;

pub use loader::ProcessorLoader;
pub use pipeline::{run_pipeline, Pipeline, RunReport, Stage};
