// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// Uses `RUST_LOG` when set, otherwise `log_level`. Output goes to stderr;
/// stdout belongs to the processors. A second call is a no-op.
pub fn init(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
