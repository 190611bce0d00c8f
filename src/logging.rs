//! Logging bootstrap for the shared diagnostic sink
//!
//! Every module logs through the `log` facade; this installs the single
//! process-wide dispatcher behind it. Initialize once at process start; a
//! second initialization is rejected by the facade and surfaced as an error.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Install the log dispatcher according to configuration.
///
/// With logging disabled this is a no-op and the facade stays uninitialized.
pub fn init(cfg: &LoggingConfig) -> Result<()> {
    if !cfg.enabled {
        return Ok(());
    }

    let level: log::LevelFilter = cfg
        .level
        .parse()
        .with_context(|| format!("Invalid logging level '{}'", cfg.level))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .context("Logging already initialized for this process")?;

    Ok(())
}
