//! Diagnostic logging and the on-disk audit trail.
//!
//! When enabled, audit entries are appended to daily files named
//! `audit_<date>.log` in the configured log directory (default:
//! `~/.local/share/pollstation/logs/`), and `tracing` output goes to
//! `pollstation.log` in the same directory. Nothing is written to stdout,
//! which belongs to the terminal UI.

use crate::config::LoggingConfig;
use crate::officer::audit::AuditEntry;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(log_dir)
}

/// Install the global `tracing` subscriber. No-op when logging is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join("pollstation.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

/// Appends audit entries to daily files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. A file that cannot be opened is skipped; the on-screen log is
/// unaffected.
pub struct AuditLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, fs::File>,
}

impl AuditLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled && config.audit_file,
            log_dir: expand_log_dir(&config.log_dir),
            file_handles: HashMap::new(),
        }
    }

    pub fn log_entry(&mut self, entry: &AuditEntry) {
        if !self.enabled {
            return;
        }
        // Timestamps are "YYYY-MM-DD HH:MM:SS"; the date names the file.
        let date = entry.timestamp.split(' ').next().unwrap_or("undated");
        let filename = format!("audit_{}.log", date);

        if !self.file_handles.contains_key(&filename) {
            match open_append(&self.log_dir, &filename) {
                Ok(file) => {
                    self.file_handles.insert(filename.clone(), file);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "audit file unavailable");
                    return;
                }
            }
        }

        if let Some(handle) = self.file_handles.get_mut(&filename) {
            let _ = writeln!(handle, "[{}] {}", entry.timestamp, entry.message);
        }
    }
}

fn open_append(dir: &Path, filename: &str) -> std::io::Result<fs::File> {
    fs::create_dir_all(dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(filename))
}
