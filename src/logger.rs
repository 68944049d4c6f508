//! Application logging.
//!
//! Everything goes through the `log` facade. [`init`] installs a `fern`
//! dispatch that always feeds the process-wide [`Logger`] buffer (shown in
//! the logs dialog) and, when enabled in config, a log file.

use crate::config::LoggingConfig;
use crate::constants::MAX_LOG_ENTRIES;
use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::{Lazy, OnceCell};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);
static INSTALLED: OnceCell<()> = OnceCell::new();

/// Shared in-memory log buffer
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// The buffer fed by the installed `log` backend
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Path of the log file written when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("noc-console").join("noc-console.log"))
}

/// Install the `log` backend. Later calls are no-ops.
pub fn init(config: &LoggingConfig) -> Result<()> {
    INSTALLED.get_or_try_init(|| install(config)).map(|_| ())
}

fn install(config: &LoggingConfig) -> Result<()> {
    let buffer = global().clone();
    let mut dispatch = fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("hyper", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
                .chain(fern::Output::call(move |record| buffer.log(record.args().to_string()))),
        );

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        );
    }

    dispatch.apply().context("Failed to install logger")
}
