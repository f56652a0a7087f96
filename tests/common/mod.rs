#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use window_activity::clock::Clock;
use window_activity::detection::{ScriptStep, ScriptedDetector, WindowProbe};
use window_activity::event_log::{EventLog, Severity};

/// Clock that jumps forward on every sleep and stops the loop after a fixed
/// number of ticks.
pub struct ManualClock {
    now: Cell<DateTime<Local>>,
    sleeps_left: Cell<usize>,
    running: Arc<AtomicBool>,
    on_sleep: Option<Box<dyn Fn(usize)>>,
    sleeps: Cell<usize>,
}

impl ManualClock {
    pub fn new(ticks: usize, running: Arc<AtomicBool>) -> Self {
        if ticks == 0 {
            running.store(false, Ordering::SeqCst);
        }
        ManualClock {
            now: Cell::new(start_time()),
            sleeps_left: Cell::new(ticks),
            running,
            on_sleep: None,
            sleeps: Cell::new(0),
        }
    }

    /// Runs `hook` with the 1-based sleep count after each sleep.
    pub fn with_hook(mut self, hook: impl Fn(usize) + 'static) -> Self {
        self.on_sleep = Some(Box::new(hook));
        self
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.now.set(self.now.get() + chrono::Duration::from_std(duration).unwrap());
        self.sleeps.set(self.sleeps.get() + 1);
        if let Some(hook) = &self.on_sleep {
            hook(self.sleeps.get());
        }
        let left = self.sleeps_left.get().saturating_sub(1);
        self.sleeps_left.set(left);
        if left == 0 {
            self.running.store(false, Ordering::SeqCst);
        }
    }
}

#[derive(Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<(Severity, String)>>,
}

impl MemoryLog {
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.messages(severity).iter().any(|m| m.contains(needle))
    }
}

impl EventLog for MemoryLog {
    fn record(&self, severity: Severity, message: &str) {
        self.entries.borrow_mut().push((severity, message.to_string()));
    }
}

pub fn start_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 8, 9, 9, 0, 0).single().unwrap()
}

pub fn probe(steps: Vec<ScriptStep>) -> WindowProbe {
    WindowProbe::new(Box::new(ScriptedDetector::new(steps)))
}

pub fn titles(titles: &[&str]) -> Vec<ScriptStep> {
    titles.iter().enumerate().map(|(i, t)| ScriptStep::window(t, i as i64 + 1)).collect()
}

/// Data rows of the CSV file, split into fields.
pub fn data_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, vec!["timestamp", "title", "process_id"]);
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}
