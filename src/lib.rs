//! # arcade-core
//!
//! Deterministic mini-game engine core for terminal arcade shells.
//!
//! ## Design Principles
//!
//! 1. **Side-Effect Isolation**: Engines are pure state machines.
//!    Rendering, input devices, and score chrome live in the host
//!    shell and consume read-only snapshots.
//!
//! 2. **Deterministic**: All randomness flows through a seeded,
//!    forkable RNG; a session replays identically from its seed.
//!
//! 3. **Explicit Time**: No engine self-schedules wall-clock timers.
//!    Timed transitions are pending entries in a session-owned
//!    `TimerQueue`, driven by the host's `advance(now_ms)` pulses and
//!    cancelled in full on exit or reset.
//!
//! 4. **Silent Rejection**: Bad input is a no-op, not an error. The
//!    only error channel is "the input had no effect".
//!
//! ## Modules
//!
//! - `core`: RNG, timer queue, score cell
//! - `engine`: the shared `GameEngine` session contract
//! - `games`: the four engines - guess, snake, tictactoe, memory
//! - `host`: game selection, operation routing, score ledger
//!
//! ## Usage
//!
//! ```
//! use arcade_core::engine::{GameKind, Status};
//! use arcade_core::host::{GameHost, HostConfig};
//!
//! let mut host = GameHost::new(HostConfig::default().with_seed(7));
//! host.select(GameKind::NumberGuess);
//! assert_eq!(host.status(), Some(Status::InProgress));
//!
//! host.submit_guess(50);
//!
//! // The renderer consumes snapshots; it never holds engine state.
//! let snapshot = host.snapshot();
//! println!("{}", serde_json::to_string(&snapshot).unwrap());
//! ```

pub mod core;
pub mod engine;
pub mod games;
pub mod host;

// Re-export commonly used types
pub use crate::core::{GameRng, ScoreCell, TimerId, TimerQueue};

pub use crate::engine::{GameEngine, GameKind, Status};

pub use crate::games::guess::{GuessRecord, GuessSnapshot, Hint, NumberGuessEngine};
pub use crate::games::memory::{MemoryEngine, MemorySnapshot, Symbol};
pub use crate::games::snake::{Cell, Direction, SnakeEngine, SnakeSnapshot};
pub use crate::games::tictactoe::{Board, Mark, TicTacToeEngine, TicTacToeSnapshot};

pub use crate::host::{ActiveSnapshot, GameHost, HostConfig, ScoreLedger};
