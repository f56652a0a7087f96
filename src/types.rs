// src/types.rs
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::format_timestamp;

// --- Structs for Data Representation ---

/// One observation of the foreground window, written as a single CSV row.
///
/// Field order is the column order of the log file. The handle is stored
/// under the `process_id` column for compatibility with existing logs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub timestamp: String,
    pub title: String,
    #[serde(rename = "process_id")]
    pub window_identifier: i64,
}

impl WindowRecord {
    pub fn new(captured_at: DateTime<Local>, title: impl Into<String>, window_identifier: i64) -> Self {
        WindowRecord {
            timestamp: format_timestamp(captured_at),
            title: title.into(),
            window_identifier,
        }
    }
}

impl fmt::Display for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] '{}' (id {})", self.timestamp, self.title, self.window_identifier)
    }
}

/// Result of a single probe of the foreground window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(WindowRecord),
    /// The query worked but nothing has focus.
    NoWindow,
    Failed(String),
}

impl CaptureOutcome {
    pub fn into_record(self) -> Option<WindowRecord> {
        match self {
            CaptureOutcome::Captured(record) => Some(record),
            CaptureOutcome::NoWindow | CaptureOutcome::Failed(_) => None,
        }
    }
}

// --- CLI Subcommands ---

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log the foreground window on every poll
    Track {
        /// Seconds between polls
        #[arg(long, default_value_t = crate::config::TRACK_INTERVAL_SECONDS)]
        interval: u64,
    },
    /// Log window changes only, reporting idle periods (default)
    Watch {
        /// Seconds between polls
        #[arg(long, default_value_t = crate::config::WATCH_INTERVAL_SECONDS)]
        interval: u64,
        /// Seconds without a title change before the system counts as idle
        #[arg(long, default_value_t = crate::config::IDLE_TIME_SECONDS)]
        idle_time: u64,
        /// Shortest idle period (seconds) announced when activity resumes
        #[arg(long, default_value_t = crate::config::GRACE_PERIOD_SECONDS)]
        grace_period: u64,
    },
    /// Summarize one day of the activity log
    Summary {
        /// Day to summarize (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
