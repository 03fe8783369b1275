//! File-based tracing setup.
//!
//! The game owns the terminal, so log lines never go to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Filter level for a `-v` count (0=off, 1=warn, 2=info, 3=debug, 4+=trace)
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "off",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to `log_file`.
///
/// Nothing is installed when `verbosity` is 0 and `RUST_LOG` is unset, or when
/// there is no file to write to. `RUST_LOG` overrides the verbosity level.
pub fn init_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    if verbosity == 0 && env_filter.is_none() {
        return Ok(());
    }
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter = env_filter
        .unwrap_or_else(|| EnvFilter::new(format!("clatter={}", level_for(verbosity))));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(verbosity >= 3)
                .with_line_number(verbosity >= 3),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(())
}
