// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use atp::engine::{run_pipeline, ProcessorLoader};
use atp::observability::logging;

#[derive(Parser)]
#[command(
    name = "atp",
    version,
    about = "Run a pipeline of record processors",
    after_help = "Example: atp @random 2 2 1 @json write stdout"
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// List discoverable processors and exit
    #[arg(long)]
    list: bool,

    /// Stages: @<processor> [processor args] ...
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    stages: Vec<String>,
}

fn print_listing(loader: &ProcessorLoader) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", loader.listing()).context("failed to write processor listing")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    let loader = ProcessorLoader::from_env();

    if cli.list {
        return match print_listing(&loader) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                tracing::error!("{:#}", err);
                ExitCode::FAILURE
            }
        };
    }

    match run_pipeline(&cli.stages, &loader) {
        // Stages surface results through their own side effects.
        Ok(_report) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code()),
    }
}
