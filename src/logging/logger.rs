// file: src/logging/logger.rs
// version: 1.0.0
// guid: d9f3a1b5-6c27-4e84-9a0b-3d5c7e9f2a61

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::ProvisionError::Config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn};
