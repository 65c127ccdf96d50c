//! Core session primitives: RNG, timers, score.
//!
//! This module contains the fundamental building blocks that are
//! game-agnostic. Engines compose these; none of them knows about any
//! particular game.

pub mod rng;
pub mod score;
pub mod timer;

pub use rng::GameRng;
pub use score::ScoreCell;
pub use timer::{TimerId, TimerQueue};
