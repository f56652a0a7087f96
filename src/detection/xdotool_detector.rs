// src/detection/xdotool_detector.rs
#![cfg(target_os = "linux")]

use super::{ActivityDetector, ActivityInfo};
use crate::errors::{AppError, AppResult};
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Output};

/// X11 foreground window through the `xdotool` binary.
pub struct XdotoolDetector {
    program: PathBuf,
}

impl XdotoolDetector {
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_program("xdotool"))
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        XdotoolDetector { program: program.into() }
    }

    fn run(&self, args: &[&str]) -> AppResult<Output> {
        Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| AppError::Platform(format!("{:?} could not be started: {}", self.program, e)))
    }
}

/// xdotool reports "nothing has focus" either silently or through an
/// XGetInputFocus complaint. Anything else on stderr is a real failure.
fn is_no_focus(stderr: &str) -> bool {
    let stderr = stderr.trim();
    stderr.is_empty() || stderr.contains("XGetInputFocus")
}

impl ActivityDetector for XdotoolDetector {
    fn get_current_activity(&self) -> AppResult<Option<ActivityInfo>> {
        let output = self.run(&["getactivewindow"])?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            if is_no_focus(&stderr) {
                debug!("xdotool getactivewindow: no focused window ({})", stderr.trim());
                return Ok(None);
            }
            return Err(AppError::Platform(format!(
                "xdotool getactivewindow failed ({}): {}",
                output.status,
                stderr.trim()
            )));
        }

        let raw_id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if raw_id.is_empty() {
            debug!("xdotool getactivewindow printed no window id");
            return Ok(None);
        }
        let window_id: i64 = raw_id.parse().map_err(|e| {
            AppError::Platform(format!("unexpected window id '{}' from xdotool: {}", raw_id, e))
        })?;

        let id_arg = window_id.to_string();
        let name_output = self.run(&["getwindowname", &id_arg])?;
        if !name_output.status.success() {
            let stderr = String::from_utf8_lossy(&name_output.stderr);
            return Err(AppError::Platform(format!(
                "xdotool getwindowname {} failed: {}",
                window_id,
                stderr.trim()
            )));
        }

        let title = String::from_utf8_lossy(&name_output.stdout).trim_end_matches('\n').to_string();
        debug!("xdotool window {} title: '{}'", window_id, title);
        Ok(Some(ActivityInfo { title, window_id }))
    }
}
