// src/commands/mod.rs
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::config::AppConfig;
use crate::detection::{create_detector, WindowProbe};
use crate::errors::AppResult;
use crate::event_log::{EventLog, FileEventLog};

pub mod run;
pub mod summary;
pub mod watch;

/// Flag cleared by Ctrl+C. Loops check it between ticks, so an interrupt
/// never lands in the middle of a CSV write.
pub fn install_interrupt_handler() -> AppResult<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        println!("\nCtrl+C detected. Finishing the current poll...");
        r.store(false, Ordering::SeqCst);
    })?;
    Ok(running)
}

/// Everything a live tracking session needs: the log file, the probe and
/// the interrupt flag.
pub(crate) struct Session {
    pub log: FileEventLog,
    pub probe: WindowProbe,
    pub running: Arc<AtomicBool>,
}

impl Session {
    pub fn open(app_config: &AppConfig) -> AppResult<Self> {
        let log = FileEventLog::open(&app_config.log_path)?;
        let detector = match create_detector(app_config.dry_run) {
            Ok(detector) => detector,
            Err(e) => {
                log.critical(&format!("Could not start window detection: {}", e));
                return Err(e);
            }
        };
        let running = install_interrupt_handler()?;
        Ok(Session { log, probe: WindowProbe::new(detector), running })
    }
}

/// Logs a loop-ending failure and prints the generic console notice.
pub fn report_critical(log: &dyn EventLog, context: &str, error: &dyn std::fmt::Display) {
    log.critical(&format!("Critical error in {}: {}", context, error));
    println!("A critical error occurred. Check the log file for details.");
}
