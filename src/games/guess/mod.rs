//! Number-guessing game: find a hidden target with banded hints.
//!
//! The engine draws a target uniformly in [1, 100] and grants 7
//! attempts. Every evaluated guess earns a hint banded by absolute
//! distance to the target; each non-bullseye hint also says which way
//! to move. Winning on attempt k scores `max(100 - 10*(k-1), 10)`;
//! running out of attempts scores 0.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, ScoreCell};
use crate::engine::{GameEngine, GameKind, Status};

/// Lowest possible target.
pub const MIN_VALUE: i32 = 1;
/// Highest possible target.
pub const MAX_VALUE: i32 = 100;
/// Attempts granted per session.
pub const STARTING_ATTEMPTS: u32 = 7;

/// Which way a wrong guess should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Higher,
    Lower,
}

/// Proximity hint for an evaluated guess.
///
/// Bands by absolute distance `d` to the target: 0 is a bullseye,
/// then `d <= 5`, `d <= 15`, `d <= 30`, and everything beyond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    Bullseye,
    VeryClose(Direction),
    Warm(Direction),
    Cold(Direction),
    WayOff(Direction),
}

impl Hint {
    /// Compute the hint for a guess against a target.
    #[must_use]
    pub fn for_guess(guess: i32, target: i32) -> Hint {
        let direction = if guess < target {
            Direction::Higher
        } else {
            Direction::Lower
        };

        match (guess - target).abs() {
            0 => Hint::Bullseye,
            d if d <= 5 => Hint::VeryClose(direction),
            d if d <= 15 => Hint::Warm(direction),
            d if d <= 30 => Hint::Cold(direction),
            _ => Hint::WayOff(direction),
        }
    }

    /// Band ordinal: 0 for a bullseye, growing as the guess gets colder.
    #[must_use]
    pub fn band(self) -> u8 {
        match self {
            Hint::Bullseye => 0,
            Hint::VeryClose(_) => 1,
            Hint::Warm(_) => 2,
            Hint::Cold(_) => 3,
            Hint::WayOff(_) => 4,
        }
    }

    /// Direction to move, `None` for a bullseye.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Hint::Bullseye => None,
            Hint::VeryClose(d) | Hint::Warm(d) | Hint::Cold(d) | Hint::WayOff(d) => Some(d),
        }
    }
}

/// One evaluated guess and its hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub value: i32,
    pub hint: Hint,
}

/// Presentation snapshot of a guessing session.
///
/// The target is only revealed once the session is terminal.
#[derive(Clone, Debug, Serialize)]
pub struct GuessSnapshot {
    pub status: Status,
    pub attempts_remaining: u32,
    pub history: Vec<GuessRecord>,
    pub score: u32,
    pub target: Option<i32>,
}

/// Number-guessing game engine.
pub struct NumberGuessEngine {
    rng: GameRng,
    target: i32,
    attempts_remaining: u32,
    history: SmallVec<[GuessRecord; 7]>,
    status: Status,
    score: ScoreCell,
}

impl NumberGuessEngine {
    /// Create an engine from a session RNG. The session is not started.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            target: 0,
            attempts_remaining: STARTING_ATTEMPTS,
            history: SmallVec::new(),
            status: Status::NotStarted,
            score: ScoreCell::new(),
        }
    }

    /// Convenience constructor from a raw seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Attempts left in the current session.
    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Evaluated guesses so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Evaluate a guess. Returns false if the input was rejected
    /// (out of range, or the session is not in progress); rejected
    /// input consumes no attempt and changes no state.
    pub fn submit_guess(&mut self, value: i32) -> bool {
        if self.status != Status::InProgress {
            return false;
        }
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return false;
        }

        let hint = Hint::for_guess(value, self.target);
        self.history.push(GuessRecord { value, hint });

        if value == self.target {
            let attempts_used = STARTING_ATTEMPTS - self.attempts_remaining;
            let score = (100 - 10 * attempts_used as i32).max(10) as u32;
            self.score.set(score);
            self.score.finalize();
            self.status = Status::Won;
        } else {
            self.attempts_remaining -= 1;
            if self.attempts_remaining == 0 {
                self.score.set(0);
                self.score.finalize();
                self.status = Status::Lost;
            }
        }

        true
    }
}

impl GameEngine for NumberGuessEngine {
    type Snapshot = GuessSnapshot;

    fn kind(&self) -> GameKind {
        GameKind::NumberGuess
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

        self.target = self.rng.gen_range(MIN_VALUE..MAX_VALUE + 1);
        self.attempts_remaining = STARTING_ATTEMPTS;
        self.history.clear();
        self.score.reset();
        self.status = Status::InProgress;
    }

    fn reset(&mut self) {
        self.target = 0;
        self.attempts_remaining = STARTING_ATTEMPTS;
        self.history.clear();
        self.score.reset();
        self.status = Status::NotStarted;
    }

    fn exit(&mut self) {
        // No pending timers to cancel; drop any unreported score.
        self.score.reset();
        self.status = Status::NotStarted;
    }

    fn take_score_report(&mut self) -> Option<u32> {
        self.score.take_report()
    }

    fn snapshot(&self) -> GuessSnapshot {
        GuessSnapshot {
            status: self.status,
            attempts_remaining: self.attempts_remaining,
            history: self.history.to_vec(),
            score: self.score.value(),
            target: self.status.is_terminal().then_some(self.target),
        }
    }
}
