// src/commands/run.rs
//! Simple tracker: every successful poll becomes a CSV row.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::clock::{Clock, SystemClock};
use crate::commands::{report_critical, Session};
use crate::config::AppConfig;
use crate::detection::WindowProbe;
use crate::errors::AppResult;
use crate::event_log::EventLog;
use crate::persistence;

pub fn track_activity(
    app_config: &AppConfig,
    probe: &WindowProbe,
    log: &dyn EventLog,
    clock: &dyn Clock,
    running: &AtomicBool,
) -> AppResult<()> {
    let output = &app_config.output_path;
    if let Err(e) = persistence::initialize_csv(output) {
        log.error(&format!("Error creating CSV file: {}", e));
        report_critical(log, "track_activity", &e);
        return Err(e);
    }
    log.info(&format!("Activity tracking started. Output file: {}", output.display()));

    while running.load(Ordering::SeqCst) {
        if let Some(record) = probe.capture(clock.now(), log).into_record() {
            match persistence::append_record(output, &record) {
                Ok(()) => println!("Logged: {}", record),
                Err(e) => {
                    log.error(&format!("IO Error during tracking: {}", e));
                    println!("An IO error occurred. Check the log file for details.");
                }
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

    println!("Starting {} (track): logging the foreground window every {}s.", app_config.app_name, app_config.interval.as_secs());
    println!("Output file: {:?}. Press Ctrl+C to stop.", app_config.output_path);

    track_activity(app_config, &session.probe, &session.log, &SystemClock, &session.running)
}
