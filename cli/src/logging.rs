// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// One-shot commands log to stderr. Interactive sessions own the terminal, so
/// they log to `log_file` when one is configured and stay silent otherwise.
pub fn init(interactive: bool, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = match (interactive, log_file) {
        (false, _) => fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        (true, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file at {}: {}", path.display(), e))?;
            fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        (true, None) => return Ok(()),
    };

    // a subscriber may already be installed, e.g. by a test harness
    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing already initialized");
    }
    Ok(())
}
