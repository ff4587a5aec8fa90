// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Leading character of a token that starts a new stage.
pub const DELIMITER: char = '@';
/// File extension of dynamically loadable processor modules.
pub const PROCESSOR_EXTENSION: &str = "processor";
/// Colon-separated directories searched for processor modules.
pub const PROCESSOR_PATH_ENV: &str = "ATP_PROCESSOR_PATH";
/// Install prefix; modules under `<prefix>/lib/atp` are searched last.
pub const DEFAULT_PREFIX: &str = match option_env!("ATP_PREFIX") {
    Some(prefix) => prefix,
    None => "/usr/local",
};
/// Maximum stage display-name length in bytes.
pub const DISPLAY_NAME_CAPACITY: usize = 127;
/// Name of the built-in stage used when no stage was given.
pub const HELP_PROCESSOR: &str = "help";

/// Exit status: command line usage error.
pub const EX_USAGE: u8 = 64;
/// Exit status: internal software error.
pub const EX_SOFTWARE: u8 = 70;
/// Exit status: operating system resource error.
pub const EX_OSERR: u8 = 71;
