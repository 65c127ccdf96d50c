//! Host configuration parameters.

use serde::{Deserialize, Serialize};

use crate::games::snake;

/// Host configuration parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HostConfig {
    /// Seed for the root RNG. Forked once per session, so the same
    /// seed replays the same sequence of sessions.
    pub seed: u64,

    /// Snake tick cadence in milliseconds.
    pub snake_tick_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            snake_tick_ms: snake::TICK_INTERVAL_MS,
        }
    }
}

impl HostConfig {
    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom snake cadence.
    pub fn with_snake_tick_ms(mut self, tick_ms: u64) -> Self {
        self.snake_tick_ms = tick_ms;
        self
    }
}
