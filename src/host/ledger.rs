//! Cross-game score accumulation.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::engine::GameKind;

/// Accumulates the final scores engines report.
///
/// Each terminal session contributes exactly once (the host records
/// whatever `take_score_report` yields). Bests are tracked per game;
/// the total spans all games.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScoreLedger {
    total: u64,
    best: FxHashMap<GameKind, u32>,
    sessions_finished: u32,
}

impl ScoreLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one session's final score.
    pub fn record(&mut self, kind: GameKind, score: u32) {
        self.total += u64::from(score);
        self.sessions_finished += 1;
        let best = self.best.entry(kind).or_insert(0);
        *best = (*best).max(score);
    }

    /// Sum of every recorded final score.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Best recorded final score for a game, if any session finished.
    #[must_use]
    pub fn best(&self, kind: GameKind) -> Option<u32> {
        self.best.get(&kind).copied()
    }

    /// Number of sessions that reached a terminal status.
    #[must_use]
    pub fn sessions_finished(&self) -> u32 {
        self.sessions_finished
    }
}
