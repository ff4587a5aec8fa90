// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod command_line;
pub mod consts;
mod search_paths;

pub use command_line::{parse_stages, stage_parameters, truncate_display_name, StageSpec};
pub use consts::*;
pub use search_paths::SearchPaths;
