//! Memory: growing-sequence recall with timed playback.
//!
//! Each level draws a fresh symbol sequence (length = level) from a
//! 4-symbol palette and plays it back on a timed schedule; the player
//! then re-enters it under strict prefix validation. Any mismatch is
//! immediately terminal with the score frozen at the awards of fully
//! completed levels. Clearing level 10 wins. A running high score
//! survives `reset()`.
//!
//! The playback schedule and the inter-level break are session-owned
//! timer entries; exiting or resetting mid-presentation cancels them
//! all, so no reveal can fire against a relinquished session.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, ScoreCell, TimerQueue};
use crate::engine::{GameEngine, GameKind, Status};

/// Final level; clearing it wins the session.
pub const MAX_LEVEL: u32 = 10;
/// Gap before each symbol lights up.
pub const REVEAL_GAP_MS: u64 = 600;
/// How long each symbol stays lit.
pub const REVEAL_HOLD_MS: u64 = 400;
/// Pause between a completed level and the next playback.
pub const LEVEL_BREAK_MS: u64 = 1000;
/// Points per completed level are `level * POINTS_PER_LEVEL`.
pub const POINTS_PER_LEVEL: u32 = 10;

/// One recall symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Red,
    Green,
    Blue,
    Yellow,
}

/// The fixed palette sequences are drawn from.
pub const PALETTE: [Symbol; 4] = [Symbol::Red, Symbol::Green, Symbol::Blue, Symbol::Yellow];

/// Internal phase: `Idle → Showing → Collecting`, looping back to
/// Showing per advancing level. The inter-level break counts as
/// Showing (input stays closed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Showing,
    Collecting,
}

#[derive(Clone, Copy, Debug)]
enum RevealEvent {
    /// Light up the sequence symbol at this index.
    Highlight(usize),
    /// Clear the lit symbol.
    Conceal,
    /// Playback finished; open input collection.
    OpenInput,
    /// Inter-level break finished; start the next level.
    NextLevel,
}

/// Presentation snapshot of a memory session.
///
/// The target sequence is only revealed once the session is terminal.
#[derive(Clone, Debug, Serialize)]
pub struct MemorySnapshot {
    pub status: Status,
    pub phase: Phase,
    pub level: u32,
    pub sequence_len: usize,
    pub player_input: Vec<Symbol>,
    pub active_symbol: Option<Symbol>,
    pub score: u32,
    pub high_score: u32,
    pub target_sequence: Option<Vec<Symbol>>,
}

/// Memory game engine.
pub struct MemoryEngine {
    rng: GameRng,
    level: u32,
    target_sequence: SmallVec<[Symbol; 10]>,
    player_input: SmallVec<[Symbol; 10]>,
    active_symbol: Option<Symbol>,
    phase: Phase,
    status: Status,
    clock_ms: u64,
    timers: TimerQueue<RevealEvent>,
    score: ScoreCell,
    high_score: u32,
}

impl MemoryEngine {
    /// Create an engine from a session RNG. The session is not started.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            level: 1,
            target_sequence: SmallVec::new(),
            player_input: SmallVec::new(),
            active_symbol: None,
            phase: Phase::Idle,
            status: Status::NotStarted,
            clock_ms: 0,
            timers: TimerQueue::new(),
            score: ScoreCell::new(),
            high_score: 0,
        }
    }

    /// Convenience constructor from a raw seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Internal phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Symbol currently lit during playback.
    #[must_use]
    pub fn active_symbol(&self) -> Option<Symbol> {
        self.active_symbol
    }

    /// Best finished-session score seen since this engine was built.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Begin a level: regenerate the full sequence (length `n`), clear
    /// the input, and schedule playback from the current clock.
    fn start_level(&mut self, n: u32) {
        self.level = n;
        self.target_sequence = (0..n)
            .map(|_| *self.rng.choose(&PALETTE).expect("palette is non-empty"))
            .collect();
        self.player_input.clear();
        self.active_symbol = None;
        self.phase = Phase::Showing;

        for i in 0..n as u64 {
            let lit_at = self.clock_ms + REVEAL_GAP_MS + i * (REVEAL_GAP_MS + REVEAL_HOLD_MS);
            self.timers.schedule(lit_at, RevealEvent::Highlight(i as usize));
            self.timers.schedule(lit_at + REVEAL_HOLD_MS, RevealEvent::Conceal);
        }
        let playback_ends = self.clock_ms + u64::from(n) * (REVEAL_GAP_MS + REVEAL_HOLD_MS);
        self.timers.schedule(playback_ends, RevealEvent::OpenInput);
    }

    /// Append one recalled symbol. Returns false if rejected: input is
    /// only accepted while collection is open.
    pub fn submit_symbol(&mut self, symbol: Symbol) -> bool {
        if self.status != Status::InProgress || self.phase != Phase::Collecting {
            return false;
        }

        self.player_input.push(symbol);
        let position = self.player_input.len() - 1;

        if symbol != self.target_sequence[position] {
            // Mismatch: terminal, score frozen at completed levels.
            self.score.finalize();
            self.status = Status::Lost;
            return true;
        }

        if self.player_input.len() == self.target_sequence.len() {
            self.score.add(self.level * POINTS_PER_LEVEL);
            if self.level == MAX_LEVEL {
                self.score.finalize();
                self.status = Status::Won;
            } else {
                // Input closes for the inter-level break.
                self.phase = Phase::Showing;
                self.timers
                    .schedule(self.clock_ms + LEVEL_BREAK_MS, RevealEvent::NextLevel);
            }
        }

        true
    }

    fn teardown(&mut self) {
        self.timers.clear();
        self.target_sequence.clear();
        self.player_input.clear();
        self.active_symbol = None;
        self.phase = Phase::Idle;
        self.level = 1;
    }
}

impl GameEngine for MemoryEngine {
    type Snapshot = MemorySnapshot;

    fn kind(&self) -> GameKind {
        GameKind::Memory
    }

    fn status(&self) -> Status {
        self.status
    }

    fn score(&self) -> u32 {
        self.score.value()
    }

    fn start(&mut self) {
        if self.status == Status::InProgress {
            return;
        }
        self.teardown();
        self.score.reset();
        self.status = Status::InProgress;
        self.start_level(1);
    }

    /// Return to Idle at level 1, folding the finished session's score
    /// into the running high score.
    fn reset(&mut self) {
        self.high_score = self.high_score.max(self.score.value());
        self.teardown();
        self.score.reset();
        self.status = Status::NotStarted;
    }

    fn exit(&mut self) {
        self.teardown();
        self.score.reset();
        self.status = Status::NotStarted;
    }

    fn advance(&mut self, now_ms: u64) {
        self.clock_ms = self.clock_ms.max(now_ms);

        for event in self.timers.drain_due(self.clock_ms) {
            match event {
                RevealEvent::Highlight(i) => {
                    self.active_symbol = Some(self.target_sequence[i]);
                }
                RevealEvent::Conceal => self.active_symbol = None,
                RevealEvent::OpenInput => self.phase = Phase::Collecting,
                RevealEvent::NextLevel => {
                    let next = self.level + 1;
                    self.start_level(next);
                }
            }
        }
    }

    fn take_score_report(&mut self) -> Option<u32> {
        self.score.take_report()
    }

    fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            status: self.status,
            phase: self.phase,
            level: self.level,
            sequence_len: self.target_sequence.len(),
            player_input: self.player_input.to_vec(),
            active_symbol: self.active_symbol,
            score: self.score.value(),
            high_score: self.high_score,
            target_sequence: self
                .status
                .is_terminal()
                .then(|| self.target_sequence.to_vec()),
        }
    }
}
