//! Session score with exactly-once finalization and reporting.

use serde::{Deserialize, Serialize};

/// Score accumulator for one game session.
///
/// The score grows while the session is live, is finalized exactly once
/// when the session reaches a terminal status, and is reported to the
/// host exactly once via `take_report`. Mutations after finalization are
/// no-ops.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScoreCell {
    value: u32,
    finalized: bool,
    reported: bool,
}

impl ScoreCell {
    /// Create a zeroed, live score cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether the score has been finalized.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Add points. No-op once finalized.
    pub fn add(&mut self, points: u32) {
        if !self.finalized {
            self.value += points;
        }
    }

    /// Overwrite the score. No-op once finalized.
    pub fn set(&mut self, value: u32) {
        if !self.finalized {
            self.value = value;
        }
    }

    /// Freeze the score at its current value.
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    /// Take the one-time final-score report.
    ///
    /// Returns `Some(final_score)` on the first call after finalization,
    /// `None` before finalization and on every later call.
    pub fn take_report(&mut self) -> Option<u32> {
        if self.finalized && !self.reported {
            self.reported = true;
            Some(self.value)
        } else {
            None
        }
    }

    /// Return the cell to a zeroed, live state for a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
