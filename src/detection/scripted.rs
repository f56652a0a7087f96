// src/detection/scripted.rs
use super::{ActivityDetector, ActivityInfo};
use crate::errors::{AppError, AppResult};
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Window(String, i64),
    Nothing,
    Fail(String),
}

impl ScriptStep {
    pub fn window(title: &str, window_id: i64) -> Self {
        ScriptStep::Window(title.to_string(), window_id)
    }
}

/// Replays a fixed list of observations, wrapping around at the end.
/// Backs `--dry-run` and the loop tests.
pub struct ScriptedDetector {
    steps: Vec<ScriptStep>,
    position: Cell<usize>,
}

impl ScriptedDetector {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        ScriptedDetector { steps, position: Cell::new(0) }
    }

    /// Fake desktop session: a few windows, each held for several polls.
    pub fn demo() -> Self {
        let mut steps = Vec::new();
        for (window_id, title) in [
            (101, "Terminal - dry_run"),
            (202, "Browser - dry_run"),
            (303, "Editor - dry_run"),
        ] {
            steps.extend(std::iter::repeat_n(ScriptStep::window(title, window_id), 3));
        }
        steps.push(ScriptStep::Nothing);
        Self::new(steps)
    }

    pub fn calls(&self) -> usize {
        self.position.get()
    }
}

impl ActivityDetector for ScriptedDetector {
    fn get_current_activity(&self) -> AppResult<Option<ActivityInfo>> {
        if self.steps.is_empty() {
            return Ok(None);
        }
        let position = self.position.get();
        self.position.set(position + 1);

        match &self.steps[position % self.steps.len()] {
            ScriptStep::Window(title, window_id) => Ok(Some(ActivityInfo {
                title: title.clone(),
                window_id: *window_id,
            })),
            ScriptStep::Nothing => Ok(None),
            ScriptStep::Fail(reason) => Err(AppError::Platform(reason.clone())),
        }
    }
}
