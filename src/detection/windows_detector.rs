// src/detection/windows_detector.rs
#![cfg(target_os = "windows")] // Only compile this file on Windows

use super::{ActivityDetector, ActivityInfo};
use crate::errors::AppResult;
use crate::windows_api;

pub struct WindowsDetector;

impl WindowsDetector {
    pub fn new() -> AppResult<Self> {
        Ok(Self)
    }
}

impl ActivityDetector for WindowsDetector {
    fn get_current_activity(&self) -> AppResult<Option<ActivityInfo>> {
        let foreground = windows_api::get_foreground_window_info()?;
        Ok(foreground.map(|(title, window_id)| ActivityInfo { title, window_id }))
    }
}
