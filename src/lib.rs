// src/lib.rs
//! Foreground window activity tracker.
//!
//! Polls the OS for the focused window and appends timestamped rows to a CSV
//! log, either on every poll (`track`) or on title changes with idle-period
//! reporting (`watch`).

pub mod clock;
pub mod commands;
pub mod config;
pub mod detection;
pub mod errors;
pub mod event_log;
pub mod persistence;
pub mod types;
pub mod utils;
#[cfg(target_os = "windows")]
mod windows_api;
