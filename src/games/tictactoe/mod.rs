//! Tic-Tac-Toe against a perfect-play opponent.
//!
//! The Player marks first; the Opponent replies after a short
//! presentation delay with the move picked by exhaustive minimax
//! search (`search::best_reply`). With perfect play the reachable
//! terminals are Draw and Opponent win; a Player win is unreachable
//! but remains a fully handled outcome.
//!
//! A win/loss/draw tally survives `reset()`; only building a new
//! engine clears it.

mod board;
mod search;

pub use board::{Board, Mark, LINES};
pub use search::best_reply;

use serde::{Deserialize, Serialize};

use crate::core::{ScoreCell, TimerId, TimerQueue};
use crate::engine::{GameEngine, GameKind, Status};

/// Delay before the Opponent's reply is applied. Presentation pacing,
/// not computational necessity.
pub const REPLY_DELAY_MS: u64 = 500;

/// Points for a Player win.
pub const WIN_POINTS: u32 = 100;
/// Points for a draw.
pub const DRAW_POINTS: u32 = 50;

/// Whose move it is while the session is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Opponent,
}

/// Win/loss/draw counts across sessions, from the Player's perspective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Clone, Copy, Debug)]
enum ReplyEvent {
    OpponentReply,
}

/// Presentation snapshot of a Tic-Tac-Toe session.
#[derive(Clone, Debug, Serialize)]
pub struct TicTacToeSnapshot {
    pub status: Status,
    pub turn: Turn,
    pub cells: [Option<Mark>; 9],
    pub score: u32,
    pub tally: MatchTally,
    pub reply_pending: bool,
}

/// Tic-Tac-Toe game engine.
pub struct TicTacToeEngine {
    board: Board,
    turn: Turn,
    status: Status,
    clock_ms: u64,
    timers: TimerQueue<ReplyEvent>,
    reply_timer: Option<TimerId>,
    score: ScoreCell,
    tally: MatchTally,
}

impl TicTacToeEngine {
    /// Create an engine. The session is not started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Player,
            status: Status::NotStarted,
            clock_ms: 0,
            timers: TimerQueue::new(),
            reply_timer: None,
            score: ScoreCell::new(),
            tally: MatchTally::default(),
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Whose move it is.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Cumulative win/loss/draw counts.
    #[must_use]
    pub fn tally(&self) -> MatchTally {
        self.tally
    }

    /// Place the Player's mark. Returns false if rejected: not the
    /// Player's turn, index off the board, cell occupied, or the
    /// session is not in progress.
    pub fn player_move(&mut self, cell: usize) -> bool {
        if self.status != Status::InProgress || self.turn != Turn::Player {
            return false;
        }
        if !self.board.is_free(cell) {
            return false;
        }

        self.board = self.board.with_mark(cell, Mark::Player);

        if self.board.winner() == Some(Mark::Player) {
            self.tally.wins += 1;
            self.finish(Status::Won, WIN_POINTS);
        } else if self.board.is_full() {
            self.tally.draws += 1;
            self.finish(Status::Draw, DRAW_POINTS);
        } else {
            self.turn = Turn::Opponent;
            self.reply_timer = Some(
                self.timers
                    .schedule(self.clock_ms + REPLY_DELAY_MS, ReplyEvent::OpponentReply),
            );
        }

        true
    }

    fn opponent_reply(&mut self) {
        self.reply_timer = None;

        if self.status != Status::InProgress || self.turn != Turn::Opponent {
            return;
        }

        let Some(cell) = best_reply(self.board) else {
            return;
        };
        self.board = self.board.with_mark(cell, Mark::Opponent);

        if self.board.winner() == Some(Mark::Opponent) {
            self.tally.losses += 1;
            self.finish(Status::Lost, 0);
        } else if self.board.is_full() {
            self.tally.draws += 1;
            self.finish(Status::Draw, DRAW_POINTS);
        } else {
            self.turn = Turn::Player;
        }
    }

    fn finish(&mut self, status: Status, points: u32) {
        self.score.set(points);
        self.score.finalize();
        self.status = status;
    }

    fn fresh_session(&mut self) {
        self.board = Board::new();
        self.turn = Turn::Player;
        self.status = Status::InProgress;
        self.timers.clear();
        self.reply_timer = None;
        self.score.reset();
    }
}

impl Default for TicTacToeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine for TicTacToeEngine {
    type Snapshot = TicTacToeSnapshot;

    fn kind(&self) -> GameKind {
        GameKind::TicTacToe
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
        self.fresh_session();
    }

    /// Clear the board back to the Player's turn. The match tally is
    /// cumulative across resets.
    fn reset(&mut self) {
        self.fresh_session();
    }

    fn exit(&mut self) {
        self.timers.clear();
        self.reply_timer = None;
        self.score.reset();
        self.status = Status::NotStarted;
    }

    fn advance(&mut self, now_ms: u64) {
        self.clock_ms = self.clock_ms.max(now_ms);
        for event in self.timers.drain_due(self.clock_ms) {
            match event {
                ReplyEvent::OpponentReply => self.opponent_reply(),
            }
        }
    }

    fn take_score_report(&mut self) -> Option<u32> {
        self.score.take_report()
    }

    fn snapshot(&self) -> TicTacToeSnapshot {
        TicTacToeSnapshot {
            status: self.status,
            turn: self.turn,
            cells: self.board.cells(),
            score: self.score.value(),
            tally: self.tally,
            reply_pending: self.reply_timer.is_some(),
        }
    }
}
