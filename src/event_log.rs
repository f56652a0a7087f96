// src/event_log.rs
//! Diagnostic log of tracker lifecycle events.
//!
//! Loops hold an explicit [`EventLog`] rather than relying on process-wide
//! configuration. [`FileEventLog`] appends `timestamp - LEVEL - message` lines
//! to the log file and mirrors every entry to the `log` facade.

use chrono::Local;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

pub trait EventLog {
    fn record(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.record(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }

    fn critical(&self, message: &str) {
        self.record(Severity::Critical, message);
    }
}

pub struct FileEventLog {
    path: PathBuf,
    file: File,
}

impl FileEventLog {
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AppError::io(path, e))?;
        Ok(FileEventLog { path: path.to_path_buf(), file })
    }
}

pub fn format_line(severity: Severity, message: &str) -> String {
    format!(
        "{} - {} - {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        severity,
        message
    )
}

impl EventLog for FileEventLog {
    fn record(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Error => log::error!("{}", message),
            Severity::Critical => log::error!("[CRITICAL] {}", message),
        }

        let line = format_line(severity, message);
        if let Err(e) = (&self.file).write_all(line.as_bytes()) {
            log::warn!("Could not write to log file {:?}: {}", self.path, e);
        }
    }
}
