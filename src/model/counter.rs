//! Counter widget state: stepped count, auto-increment, bounded history.
//!
//! The step is clamped to [1, 10] on every change and non-numeric input
//! coerces to 1, mirroring a number input that silently corrects itself.
//! History is append-then-truncate: newest entry first, at most five kept.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::state::TextField;

/// Most-recent entries kept in the history log.
pub const HISTORY_LIMIT: usize = 5;

/// Step bounds.
pub const MIN_STEP: i64 = 1;
pub const MAX_STEP: i64 = 10;

/// One logged action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub action: String,
    pub at: DateTime<Local>,
}

impl HistoryEntry {
    /// Wall-clock time of the action, formatted for display.
    pub fn time(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

/// The counter widget's state.
#[derive(Debug)]
pub struct CounterModel {
    count: i64,
    step: i64,
    auto: bool,
    history: Vec<HistoryEntry>,
    /// Raw text of the step input. Kept in sync with the clamped step
    /// after every change, like a number input re-displaying its
    /// corrected value.
    pub step_input: TextField,
}

impl Default for CounterModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterModel {
    pub fn new() -> Self {
        Self {
            count: 0,
            step: 1,
            auto: false,
            history: Vec::new(),
            step_input: TextField::from_value("1"),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    /// History entries, newest first, never more than [`HISTORY_LIMIT`].
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Add the step to the count (manual action).
    pub fn increment(&mut self) {
        self.count += self.step;
        self.log(format!("Incremented by {} to {}", self.step, self.count));
    }

    /// Subtract the step from the count (manual action).
    pub fn decrement(&mut self) {
        self.count -= self.step;
        self.log(format!("Decremented by {} to {}", self.step, self.count));
    }

    /// One firing of the auto-increment timer.
    pub fn auto_tick(&mut self) {
        self.count += self.step;
        self.log(format!("Auto-incremented by {} to {}", self.step, self.count));
    }

    /// Flip the auto-increment flag. Returns the new state; the caller
    /// owns the actual timer and must start or stop it accordingly.
    pub fn toggle_auto(&mut self) -> bool {
        self.auto = !self.auto;
        if self.auto {
            self.log("Auto-increment started".to_string());
        } else {
            self.log("Auto-increment stopped".to_string());
        }
        self.auto
    }

    /// Set the step from raw input text: non-numeric coerces to 1, then
    /// the value is clamped to [1, 10]. The raw text is left alone while
    /// the user is still typing; [`normalize_step_input`] rewrites it.
    ///
    /// [`normalize_step_input`]: CounterModel::normalize_step_input
    pub fn set_step_from_input(&mut self, input: &str) {
        let parsed = input.trim().parse::<i64>().unwrap_or(MIN_STEP);
        self.step = parsed.clamp(MIN_STEP, MAX_STEP);
        debug!(step = self.step, "counter step changed");
    }

    /// Re-apply the step input text after an edit.
    pub fn apply_step_input(&mut self) {
        let text = self.step_input.value().to_string();
        self.set_step_from_input(&text);
    }

    /// Rewrite the step input text to the clamped step, like a number
    /// input correcting itself once editing ends.
    pub fn normalize_step_input(&mut self) {
        if self.step_input.value() != self.step.to_string() {
            self.step_input.set_value(self.step.to_string());
        }
    }

    /// Back to the initial state: count 0, step 1, auto off. The caller
    /// must cancel the auto timer when this reports it was running.
    pub fn reset(&mut self) -> bool {
        let was_auto = self.auto;
        self.count = 0;
        self.step = 1;
        self.auto = false;
        self.step_input.set_value("1");
        self.log("Counter reset to 0".to_string());
        was_auto
    }

    fn log(&mut self, action: String) {
        self.history.insert(
            0,
            HistoryEntry {
                action,
                at: Local::now(),
            },
        );
        self.history.truncate(HISTORY_LIMIT);
    }
}

// =============================================================================
// Tests
// =============================================================================
