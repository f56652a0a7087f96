// src/commands/watch.rs
//! Idle-aware tracker: one row per title change, plus idle-period boundaries
//! in the event log.

use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::commands::{report_critical, Session};
use crate::config::AppConfig;
use crate::detection::WindowProbe;
use crate::errors::AppResult;
use crate::event_log::EventLog;
use crate::persistence;
use crate::utils::{elapsed_between, format_duration};

pub const BECAME_IDLE_MESSAGE: &str = "System became idle.";

// --- Loop State ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// New title. `idle_ended` carries the idle duration when an idle period
    /// at least as long as the grace period just finished.
    Activated { idle_ended: Option<Duration> },
    BecameIdle,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct LoopState {
    pub last_active_window: Option<String>,
    pub last_active_time: DateTime<Local>,
    pub is_idle: bool,
    pub idle_start_time: Option<DateTime<Local>>,
}

impl LoopState {
    pub fn new(now: DateTime<Local>) -> Self {
        LoopState {
            last_active_window: None,
            last_active_time: now,
            is_idle: false,
            idle_start_time: None,
        }
    }

    pub fn observe(
        &mut self,
        title: &str,
        now: DateTime<Local>,
        idle_time: Duration,
        grace_period: Duration,
    ) -> Transition {
        if self.last_active_window.as_deref() != Some(title) {
            let mut idle_ended = None;
            if self.is_idle {
                let idle_duration = self
                    .idle_start_time
                    .map(|start| elapsed_between(start, now))
                    .unwrap_or(Duration::ZERO);
                if idle_duration >= grace_period {
                    idle_ended = Some(idle_duration);
                }
                self.is_idle = false;
            }
            self.last_active_window = Some(title.to_string());
            self.last_active_time = now;
            return Transition::Activated { idle_ended };
        }

        // Once idle, the start time stays pinned until the title changes.
        if !self.is_idle && elapsed_between(self.last_active_time, now) > idle_time {
            self.is_idle = true;
            self.idle_start_time = Some(now);
            return Transition::BecameIdle;
        }

        Transition::Unchanged
    }
}

// --- Main Loop ---

pub fn watch_activity(
    app_config: &AppConfig,
    probe: &WindowProbe,
    log: &dyn EventLog,
    clock: &dyn Clock,
    running: &AtomicBool,
) -> AppResult<()> {
    let output = &app_config.output_path;
    if let Err(e) = persistence::initialize_csv(output) {
        log.error(&format!("Error creating CSV file: {}", e));
        report_critical(log, "watch_activity", &e);
        return Err(e);
    }
    log.info(&format!("Activity tracking started. Output file: {}", output.display()));

    let mut state = LoopState::new(clock.now());

    while running.load(Ordering::SeqCst) {
        let now = clock.now();
        if let Some(record) = probe.capture(now, log).into_record() {
            match state.observe(&record.title, now, app_config.idle_time, app_config.grace_period) {
                Transition::Activated { idle_ended } => {
                    if let Some(idle_duration) = idle_ended {
                        let message = format!("Idle period ended. Duration: {}", format_duration(idle_duration));
                        log.info(&message);
                        println!("{}", message);
                    }
                    if let Err(e) = persistence::append_record(output, &record) {
                        report_critical(log, "watch_activity", &e);
                        return Err(e);
                    }
                    println!("Logged: {}", record);
                }
                Transition::BecameIdle => {
                    log.info(BECAME_IDLE_MESSAGE);
                    println!("{}", BECAME_IDLE_MESSAGE);
                }
                Transition::Unchanged => {}
            }
        }
        clock.sleep(app_config.interval);
    }

    log.info("Activity tracking stopped by user.");
    println!("\nActivity tracking stopped.");
    Ok(())
}

pub fn execute(app_config: &AppConfig) -> AppResult<()> {
    let session = Session::open(app_config)?;

    println!(
        "Starting {} (watch): polling every {}s, idle after {}s.",
        app_config.app_name,
        app_config.interval.as_secs(),
        app_config.idle_time.as_secs()
    );
    println!("Output file: {:?}. Press Ctrl+C to stop.", app_config.output_path);

    watch_activity(app_config, &session.probe, &session.log, &SystemClock, &session.running)
}
