// src/detection/mod.rs
use chrono::{DateTime, Local};

use crate::errors::AppResult;
use crate::event_log::EventLog;
use crate::types::{CaptureOutcome, WindowRecord};

pub mod scripted;
#[cfg(target_os = "windows")]
mod windows_detector;
#[cfg(target_os = "linux")]
mod xdotool_detector;

pub use scripted::{ScriptStep, ScriptedDetector};

/// What a platform detector reports about the focused window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityInfo {
    pub title: String,
    pub window_id: i64,
}

pub trait ActivityDetector {
    // Ok(None) when no window has focus, Err on platform API errors
    fn get_current_activity(&self) -> AppResult<Option<ActivityInfo>>;
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        fn platform_detector() -> AppResult<Box<dyn ActivityDetector>> {
            Ok(Box::new(windows_detector::WindowsDetector::new()?))
        }
    } else if #[cfg(target_os = "linux")] {
        fn platform_detector() -> AppResult<Box<dyn ActivityDetector>> {
            Ok(Box::new(xdotool_detector::XdotoolDetector::new()?))
        }
    } else {
        fn platform_detector() -> AppResult<Box<dyn ActivityDetector>> {
            Err(crate::errors::AppError::Platform(
                "Unsupported platform for foreground window detection".to_string(),
            ))
        }
    }
}

// Factory function to create the appropriate detector
pub fn create_detector(dry_run: bool) -> AppResult<Box<dyn ActivityDetector>> {
    if dry_run {
        return Ok(Box::new(ScriptedDetector::demo()));
    }
    platform_detector()
}

/// Turns detector results into timestamped records. Never fails: errors are
/// logged and reported as [`CaptureOutcome::Failed`].
pub struct WindowProbe {
    detector: Box<dyn ActivityDetector>,
}

impl WindowProbe {
    pub fn new(detector: Box<dyn ActivityDetector>) -> Self {
        WindowProbe { detector }
    }

    pub fn capture(&self, now: DateTime<Local>, log: &dyn EventLog) -> CaptureOutcome {
        match self.detector.get_current_activity() {
            Ok(Some(info)) => CaptureOutcome::Captured(WindowRecord::new(now, info.title, info.window_id)),
            Ok(None) => CaptureOutcome::NoWindow,
            Err(e) => {
                let reason = e.to_string();
                log.error(&format!("Error retrieving active window: {}", reason));
                CaptureOutcome::Failed(reason)
            }
        }
    }
}
