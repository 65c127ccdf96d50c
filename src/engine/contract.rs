//! Session lifecycle contract shared by every game engine.
//!
//! The host runs exactly one engine at a time and talks to it through
//! this contract:
//! - lifecycle: `start` / `reset` (re-armable), `exit` (teardown)
//! - observation: `status`, `score`, `snapshot`
//! - time: `advance(now_ms)` pulses drive any pending timed transitions
//! - reporting: `take_score_report` yields the final score exactly once
//!
//! Game-specific inputs (guesses, moves, direction changes, symbols)
//! stay inherent methods on the concrete engines; the contract covers
//! only what every game shares.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a game session.
///
/// `Won`, `Lost`, and `Draw` are terminal: once reached, every mutating
/// operation on the session is a no-op until `reset`. `Draw` is only
/// reachable in Tic-Tac-Toe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    NotStarted,
    InProgress,
    Won,
    Lost,
    Draw,
}

impl Status {
    /// Whether the session has reached a terminal outcome.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::Lost | Status::Draw)
    }
}

/// Which mini-game an engine implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    NumberGuess,
    Snake,
    TicTacToe,
    Memory,
}

impl GameKind {
    /// All game kinds, in menu order.
    pub const ALL: [GameKind; 4] = [
        GameKind::NumberGuess,
        GameKind::Snake,
        GameKind::TicTacToe,
        GameKind::Memory,
    ];
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameKind::NumberGuess => "number_guess",
            GameKind::Snake => "snake",
            GameKind::TicTacToe => "tic_tac_toe",
            GameKind::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// Shared engine contract.
///
/// ## Implementation Notes
///
/// - Operations invoked after a terminal status must be no-ops
/// - `reset` re-arms the session; engine-persistent counters (high
///   scores, match tallies) survive it
/// - `exit` cancels every pending timer and never reports a score
/// - `advance` is driven by the host's monotonic millisecond clock;
///   engines with no timed transitions use the default no-op
pub trait GameEngine {
    /// Read-only state snapshot sufficient for presentation.
    type Snapshot: Serialize;

    /// Which game this engine implements.
    fn kind(&self) -> GameKind;

    /// Current lifecycle status.
    fn status(&self) -> Status;

    /// Current session score.
    fn score(&self) -> u32;

    /// Begin a session. No-op if one is already in progress.
    fn start(&mut self);

    /// Tear down the current session and re-arm for a fresh one.
    fn reset(&mut self);

    /// Relinquish the session: cancel all pending timers. The final
    /// score, if any, is never reported after this.
    fn exit(&mut self);

    /// Drive timed transitions up to `now_ms`.
    fn advance(&mut self, _now_ms: u64) {}

    /// Take the one-time final-score report, if the session just
    /// reached a terminal status.
    fn take_score_report(&mut self) -> Option<u32>;

    /// Capture a presentation snapshot.
    fn snapshot(&self) -> Self::Snapshot;

    /// Whether the session has reached a terminal outcome.
    fn is_over(&self) -> bool {
        self.status().is_terminal()
    }
}
