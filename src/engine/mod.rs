//! Shared session contract for mini-game engines.
//!
//! Engines implement `GameEngine` to plug into the host shell. The
//! contract is the whole host-facing surface: lifecycle, status, score
//! reporting, timed advancement, and presentation snapshots.

mod contract;

pub use contract::{GameEngine, GameKind, Status};
