//! Snake: grid movement, growth-on-food, wall and self collision.
//!
//! The simulation is tick-driven on a fixed external cadence owned by
//! the host; the engine itself never schedules anything. Each tick the
//! head advances one cell in the buffered direction, dying on a wall or
//! any body cell and growing by one when it lands on food. Food is
//! rejection-sampled onto a free cell. A running high score survives
//! `reset()`.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, ScoreCell};
use crate::engine::{GameEngine, GameKind, Status};

/// Grid width in cells.
pub const BOARD_WIDTH: i32 = 20;
/// Grid height in cells.
pub const BOARD_HEIGHT: i32 = 10;
/// Points awarded per food eaten.
pub const FOOD_POINTS: u32 = 10;
/// Reference tick cadence; the host owns the actual timer.
pub const TICK_INTERVAL_MS: u64 = 150;

const INITIAL_HEAD: Cell = Cell::new(10, 5);
const INITIAL_FOOD: Cell = Cell::new(15, 5);
const INITIAL_DIRECTION: Direction = Direction::Right;

/// One grid coordinate. Signed so an off-board head can be represented
/// before the bounds check rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies on the board.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_WIDTH).contains(&self.x) && (0..BOARD_HEIGHT).contains(&self.y)
    }
}

/// Movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The reversing direction.
    #[must_use]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step for one tick.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Internal simulation phase: `Playing ⇄ Paused → Over`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Paused,
    Over,
}

/// Presentation snapshot of a snake session.
#[derive(Clone, Debug, Serialize)]
pub struct SnakeSnapshot {
    pub status: Status,
    pub phase: Phase,
    pub body: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
}

/// Snake game engine.
pub struct SnakeEngine {
    rng: GameRng,
    /// Head-first, contiguous, no self-overlap.
    body: VecDeque<Cell>,
    food: Cell,
    direction: Direction,
    /// Buffered direction change, applied at the next tick.
    pending_direction: Option<Direction>,
    phase: Phase,
    started: bool,
    score: ScoreCell,
    high_score: u32,
}

impl SnakeEngine {
    /// Create an engine from a session RNG. The session is not started.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            body: VecDeque::from([INITIAL_HEAD]),
            food: INITIAL_FOOD,
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            phase: Phase::Playing,
            started: false,
            score: ScoreCell::new(),
            high_score: 0,
        }
    }

    /// Convenience constructor from a raw seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Body cells, head first.
    #[must_use]
    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Current food cell.
    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    /// Internal phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Best finished-session score seen since this engine was built.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Advance the simulation one step. Driven by the host's fixed
    /// cadence; a no-op unless the session is Playing.
    pub fn tick(&mut self) {
        if !self.started || self.phase != Phase::Playing {
            return;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let head = *self.body.front().expect("snake body is never empty");
        let (dx, dy) = self.direction.delta();
        let new_head = Cell::new(head.x + dx, head.y + dy);

        // Collision is checked against the full pre-move body: moving
        // into the cell the tail currently occupies is death even though
        // the tail would vacate it this tick.
        if !new_head.in_bounds() || self.body.contains(&new_head) {
            self.game_over();
            return;
        }

        self.body.push_front(new_head);

        if new_head == self.food {
            self.score.add(FOOD_POINTS);
            match self.place_food() {
                Some(cell) => self.food = cell,
                // Board fully occupied: nowhere left to grow.
                None => self.game_over(),
            }
        } else {
            self.body.pop_back();
        }
    }

    /// Buffer a direction change for the next tick. Returns false if
    /// ignored: a reversal into the cell the neck occupies, or the
    /// session is over or not started. Accepted while paused; the
    /// change applies once play resumes.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.started || self.phase == Phase::Over {
            return false;
        }

        // Compare against the direction that would actually apply at the
        // next tick, not the one the last tick used.
        let effective = self.pending_direction.unwrap_or(self.direction);
        if direction == effective.opposite() {
            return false;
        }

        self.pending_direction = Some(direction);
        true
    }

    /// Flip between Playing and Paused. No-op once Over.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started {
            return false;
        }
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Playing;
                true
            }
            Phase::Over => false,
        }
    }

    fn game_over(&mut self) {
        self.score.finalize();
        self.phase = Phase::Over;
    }

    /// Draw a food cell uniformly from the cells the snake does not
    /// occupy, by rejection sampling.
    ///
    /// Terminates because board cells (200) exceed any reachable snake
    /// length under the 20x10 board. Returns `None` in the unreachable
    /// case where the snake occupies every cell.
    fn place_food(&mut self) -> Option<Cell> {
        let cells = (BOARD_WIDTH * BOARD_HEIGHT) as usize;
        if self.body.len() >= cells {
            return None;
        }

        let occupied: FxHashSet<Cell> = self.body.iter().copied().collect();
        loop {
            let cell = Cell::new(
                self.rng.gen_range(0..BOARD_WIDTH),
                self.rng.gen_range(0..BOARD_HEIGHT),
            );
            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }
    }

    fn restore_initial_layout(&mut self) {
        self.body = VecDeque::from([INITIAL_HEAD]);
        self.food = INITIAL_FOOD;
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.phase = Phase::Playing;
        self.score.reset();
        self.started = true;
    }
}

impl GameEngine for SnakeEngine {
    type Snapshot = SnakeSnapshot;

    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn status(&self) -> Status {
        if !self.started {
            Status::NotStarted
        } else if self.phase == Phase::Over {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    fn score(&self) -> u32 {
        self.score.value()
    }

    fn start(&mut self) {
        if self.started && self.phase != Phase::Over {
            return;
        }
        self.restore_initial_layout();
    }

    /// Restore the initial layout and return to Playing, folding the
    /// finished session's score into the running high score.
    fn reset(&mut self) {
        self.high_score = self.high_score.max(self.score.value());
        self.restore_initial_layout();
    }

    fn exit(&mut self) {
        // The tick cadence is host-owned; there is nothing to cancel
        // here. Drop any unreported score.
        self.score.reset();
        self.pending_direction = None;
        self.started = false;
    }

    fn take_score_report(&mut self) -> Option<u32> {
        self.score.take_report()
    }

    fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            status: self.status(),
            phase: self.phase,
            body: self.body.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score.value(),
            high_score: self.high_score,
        }
    }
}
