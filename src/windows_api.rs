// src/windows_api.rs
#![cfg(target_os = "windows")]

use crate::errors::AppResult;
use log::debug;
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW,
};

/// Foreground window as (title, handle). `Ok(None)` when nothing has focus.
pub fn get_foreground_window_info() -> AppResult<Option<(String, i64)>> {
    unsafe {
        let hwnd = GetForegroundWindow();
        if hwnd.is_invalid() {
            debug!("No foreground window.");
            return Ok(None);
        }

        let title = get_hwnd_title(hwnd);
        let handle = hwnd.0 as isize as i64;
        debug!("Foreground HWND {:?} ({}) title: '{}'", hwnd, handle, title);
        Ok(Some((title, handle)))
    }
}

// --- Helper Function to Get Title for a specific HWND ---
unsafe fn get_hwnd_title(hwnd: HWND) -> String {
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return String::new();
    }
    let mut title_buf: Vec<u16> = vec![0; length as usize + 1];
    let title_len = unsafe { GetWindowTextW(hwnd, &mut title_buf) };
    if title_len > 0 {
        OsString::from_wide(&title_buf[..title_len as usize]).to_string_lossy().into_owned()
    } else {
        String::new()
    }
}
