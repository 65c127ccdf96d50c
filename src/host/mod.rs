//! Host shell: game selection, operation routing, score ledger.
//!
//! The host owns "which game is active" as a tagged union and is the
//! only driver of engine time. Switching games tears the previous
//! session down first (cancelling its timers), so no callback of a
//! relinquished session can fire. Engines report final scores exactly
//! once; the host records them in a cross-game `ScoreLedger`.
//!
//! The Snake tick cadence is host-owned: a timer entry rescheduled
//! every `snake_tick_ms` while the Snake session is Playing, cancelled
//! on pause, game over, exit, and game switch. Missed ticks are not
//! replayed; pulse `advance` at least as often as the cadence.

mod config;
mod ledger;

pub use config::HostConfig;
pub use ledger::ScoreLedger;

use serde::Serialize;

use crate::core::{GameRng, TimerId, TimerQueue};
use crate::engine::{GameEngine, GameKind, Status};
use crate::games::guess::{GuessSnapshot, NumberGuessEngine};
use crate::games::memory::{MemoryEngine, MemorySnapshot, Symbol};
use crate::games::snake::{self, Direction, SnakeEngine, SnakeSnapshot};
use crate::games::tictactoe::{TicTacToeEngine, TicTacToeSnapshot};

/// The active game, if any. Owning the engines by value keeps the
/// "current game" explicit: switching variants replaces the session.
pub enum ActiveGame {
    None,
    Guess(NumberGuessEngine),
    Snake(SnakeEngine),
    TicTacToe(TicTacToeEngine),
    Memory(MemoryEngine),
}

impl ActiveGame {
    /// Which game is active.
    #[must_use]
    pub fn kind(&self) -> Option<GameKind> {
        match self {
            ActiveGame::None => None,
            ActiveGame::Guess(_) => Some(GameKind::NumberGuess),
            ActiveGame::Snake(_) => Some(GameKind::Snake),
            ActiveGame::TicTacToe(_) => Some(GameKind::TicTacToe),
            ActiveGame::Memory(_) => Some(GameKind::Memory),
        }
    }
}

/// Snapshot of whichever game is active.
#[derive(Clone, Debug, Serialize)]
pub enum ActiveSnapshot {
    None,
    NumberGuess(GuessSnapshot),
    Snake(SnakeSnapshot),
    TicTacToe(TicTacToeSnapshot),
    Memory(MemorySnapshot),
}

#[derive(Clone, Copy, Debug)]
enum HostEvent {
    SnakeTick,
}

/// Game selector and session driver.
pub struct GameHost {
    config: HostConfig,
    rng: GameRng,
    active: ActiveGame,
    clock_ms: u64,
    timers: TimerQueue<HostEvent>,
    tick_timer: Option<TimerId>,
    ledger: ScoreLedger,
}

/// Drive one engine's timers and record any score it reports.
fn drive<E: GameEngine>(engine: &mut E, now_ms: u64, ledger: &mut ScoreLedger) {
    engine.advance(now_ms);
    report(engine, ledger);
}

/// Record an engine's pending score report, if any.
fn report<E: GameEngine>(engine: &mut E, ledger: &mut ScoreLedger) {
    if let Some(score) = engine.take_score_report() {
        ledger.record(engine.kind(), score);
    }
}

impl GameHost {
    /// Create a host with the given configuration.
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            rng: GameRng::new(config.seed),
            active: ActiveGame::None,
            clock_ms: 0,
            timers: TimerQueue::new(),
            tick_timer: None,
            ledger: ScoreLedger::new(),
        }
    }

    /// Which game is active.
    #[must_use]
    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.kind()
    }

    /// Status of the active session.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        match &self.active {
            ActiveGame::None => None,
            ActiveGame::Guess(e) => Some(e.status()),
            ActiveGame::Snake(e) => Some(e.status()),
            ActiveGame::TicTacToe(e) => Some(e.status()),
            ActiveGame::Memory(e) => Some(e.status()),
        }
    }

    /// The cross-game score ledger.
    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Select and start a game, tearing down the previous session
    /// (and its timers) first.
    pub fn select(&mut self, kind: GameKind) {
        self.teardown_active();

        self.active = match kind {
            GameKind::NumberGuess => {
                let mut engine = NumberGuessEngine::new(self.rng.fork());
                engine.start();
                ActiveGame::Guess(engine)
            }
            GameKind::Snake => {
                let mut engine = SnakeEngine::new(self.rng.fork());
                engine.start();
                self.tick_timer = Some(self.schedule_tick());
                ActiveGame::Snake(engine)
            }
            GameKind::TicTacToe => {
                let mut engine = TicTacToeEngine::new();
                engine.advance(self.clock_ms);
                engine.start();
                ActiveGame::TicTacToe(engine)
            }
            GameKind::Memory => {
                let mut engine = MemoryEngine::new(self.rng.fork());
                engine.advance(self.clock_ms);
                engine.start();
                ActiveGame::Memory(engine)
            }
        };
    }

    /// Exit the active session without a score report.
    pub fn exit_active(&mut self) {
        self.teardown_active();
    }

    /// Reset the active session for another run.
    pub fn reset_active(&mut self) {
        match &mut self.active {
            ActiveGame::None => {}
            ActiveGame::Guess(e) => e.reset(),
            ActiveGame::Snake(e) => {
                e.reset();
                if self.tick_timer.is_none() {
                    self.tick_timer = Some(
                        self.timers
                            .schedule(self.clock_ms + self.config.snake_tick_ms, HostEvent::SnakeTick),
                    );
                }
            }
            ActiveGame::TicTacToe(e) => e.reset(),
            ActiveGame::Memory(e) => e.reset(),
        }
    }

    /// Start (or restart) the active session after a reset.
    pub fn start_active(&mut self) {
        match &mut self.active {
            ActiveGame::None => {}
            ActiveGame::Guess(e) => e.start(),
            ActiveGame::Snake(e) => {
                e.start();
                if self.tick_timer.is_none() {
                    self.tick_timer = Some(
                        self.timers
                            .schedule(self.clock_ms + self.config.snake_tick_ms, HostEvent::SnakeTick),
                    );
                }
            }
            ActiveGame::TicTacToe(e) => e.start(),
            ActiveGame::Memory(e) => e.start(),
        }
    }

    /// Advance the monotonic clock: fire due Snake ticks, then drive
    /// the active engine's own timers, recording any score report.
    pub fn advance(&mut self, now_ms: u64) {
        self.clock_ms = self.clock_ms.max(now_ms);

        for event in self.timers.drain_due(self.clock_ms) {
            match event {
                HostEvent::SnakeTick => self.on_snake_tick(),
            }
        }

        let clock = self.clock_ms;
        match &mut self.active {
            ActiveGame::None => {}
            ActiveGame::Guess(e) => drive(e, clock, &mut self.ledger),
            ActiveGame::Snake(e) => drive(e, clock, &mut self.ledger),
            ActiveGame::TicTacToe(e) => drive(e, clock, &mut self.ledger),
            ActiveGame::Memory(e) => drive(e, clock, &mut self.ledger),
        }
    }

    /// Route a guess to the number-guessing session.
    pub fn submit_guess(&mut self, value: i32) -> bool {
        let accepted = match &mut self.active {
            ActiveGame::Guess(e) => e.submit_guess(value),
            _ => false,
        };
        self.poll_report();
        accepted
    }

    /// Route a direction change to the Snake session.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        match &mut self.active {
            ActiveGame::Snake(e) => e.set_direction(direction),
            _ => false,
        }
    }

    /// Toggle Snake pause, cancelling or re-arming the cadence.
    pub fn toggle_pause(&mut self) -> bool {
        let ActiveGame::Snake(engine) = &mut self.active else {
            return false;
        };

        if !engine.toggle_pause() {
            return false;
        }

        match engine.phase() {
            snake::Phase::Paused => {
                if let Some(id) = self.tick_timer.take() {
                    self.timers.cancel(id);
                }
            }
            snake::Phase::Playing => {
                if self.tick_timer.is_none() {
                    self.tick_timer = Some(
                        self.timers
                            .schedule(self.clock_ms + self.config.snake_tick_ms, HostEvent::SnakeTick),
                    );
                }
            }
            snake::Phase::Over => {}
        }

        true
    }

    /// Route a cell placement to the Tic-Tac-Toe session.
    pub fn player_move(&mut self, cell: usize) -> bool {
        let accepted = match &mut self.active {
            ActiveGame::TicTacToe(e) => e.player_move(cell),
            _ => false,
        };
        self.poll_report();
        accepted
    }

    /// Route a recalled symbol to the Memory session.
    pub fn submit_symbol(&mut self, symbol: Symbol) -> bool {
        let accepted = match &mut self.active {
            ActiveGame::Memory(e) => e.submit_symbol(symbol),
            _ => false,
        };
        self.poll_report();
        accepted
    }

    /// Capture a snapshot of the active game for presentation.
    #[must_use]
    pub fn snapshot(&self) -> ActiveSnapshot {
        match &self.active {
            ActiveGame::None => ActiveSnapshot::None,
            ActiveGame::Guess(e) => ActiveSnapshot::NumberGuess(e.snapshot()),
            ActiveGame::Snake(e) => ActiveSnapshot::Snake(e.snapshot()),
            ActiveGame::TicTacToe(e) => ActiveSnapshot::TicTacToe(e.snapshot()),
            ActiveGame::Memory(e) => ActiveSnapshot::Memory(e.snapshot()),
        }
    }

    fn schedule_tick(&mut self) -> TimerId {
        self.timers
            .schedule(self.clock_ms + self.config.snake_tick_ms, HostEvent::SnakeTick)
    }

    fn on_snake_tick(&mut self) {
        self.tick_timer = None;

        if let ActiveGame::Snake(engine) = &mut self.active {
            engine.tick();
            report(engine, &mut self.ledger);

            // Cadence continues only while play does.
            if engine.phase() == snake::Phase::Playing {
                self.tick_timer = Some(
                    self.timers
                        .schedule(self.clock_ms + self.config.snake_tick_ms, HostEvent::SnakeTick),
                );
            }
        }
    }

    fn poll_report(&mut self) {
        match &mut self.active {
            ActiveGame::None => {}
            ActiveGame::Guess(e) => report(e, &mut self.ledger),
            ActiveGame::Snake(e) => report(e, &mut self.ledger),
            ActiveGame::TicTacToe(e) => report(e, &mut self.ledger),
            ActiveGame::Memory(e) => report(e, &mut self.ledger),
        }
    }

    fn teardown_active(&mut self) {
        if let Some(id) = self.tick_timer.take() {
            self.timers.cancel(id);
        }

        match &mut self.active {
            ActiveGame::None => {}
            ActiveGame::Guess(e) => e.exit(),
            ActiveGame::Snake(e) => e.exit(),
            ActiveGame::TicTacToe(e) => e.exit(),
            ActiveGame::Memory(e) => e.exit(),
        }

        self.active = ActiveGame::None;
    }
}
