// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

// === Application Info ===
pub const APP_NAME: &str = "window_activity";

// === Output Files ===
// CSV activity log, relative to the working directory unless overridden.
pub const DEFAULT_OUTPUT_FILE: &str = "activity_log.csv";
// Diagnostic log. Not configurable.
pub const LOG_FILE: &str = "activity_tracker.log";

// === Tracker Settings ===
// Poll interval of the simple `track` loop (in seconds).
pub const TRACK_INTERVAL_SECONDS: u64 = 5;
// Poll interval of the idle-aware `watch` loop (in seconds).
pub const WATCH_INTERVAL_SECONDS: u64 = 1;
// Unchanged-title time before the user is considered idle.
pub const IDLE_TIME_SECONDS: u64 = 300;
// Shortest idle period worth announcing when activity resumes.
pub const GRACE_PERIOD_SECONDS: u64 = 60;

/// Resolved settings handed to the commands.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
    pub interval: Duration,
    pub idle_time: Duration,
    pub grace_period: Duration,
    pub dry_run: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: APP_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_path: PathBuf::from(LOG_FILE),
            interval: Duration::from_secs(WATCH_INTERVAL_SECONDS),
            idle_time: Duration::from_secs(IDLE_TIME_SECONDS),
            grace_period: Duration::from_secs(GRACE_PERIOD_SECONDS),
            dry_run: false,
        }
    }
}

impl AppConfig {
    /// Defaults for the simple loop: same files, slower polling.
    pub fn for_track() -> Self {
        AppConfig {
            interval: Duration::from_secs(TRACK_INTERVAL_SECONDS),
            ..AppConfig::default()
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_idle_time(mut self, idle_time: Duration) -> Self {
        self.idle_time = idle_time;
        self
    }

    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_compiled_in_constants() {
        let watch = AppConfig::default();
        assert_eq!(watch.interval, Duration::from_secs(1));
        assert_eq!(watch.idle_time, Duration::from_secs(300));
        assert_eq!(watch.grace_period, Duration::from_secs(60));
        assert_eq!(watch.output_path, PathBuf::from("activity_log.csv"));
        assert_eq!(watch.log_path, PathBuf::from("activity_tracker.log"));

        let track = AppConfig::for_track();
        assert_eq!(track.interval, Duration::from_secs(5));
    }
}
