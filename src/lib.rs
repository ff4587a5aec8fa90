// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends; // static and loadable processors
pub mod config; // constants, search paths, command-line grouping
pub mod engine; // loader + pipeline
pub mod errors; // error handling
pub mod observability;
pub mod record; // value / array / dictionary
pub mod traits; // processor contract
