//! Shared-contract conformance across all four engines.
//!
//! Every engine must honor the same session lifecycle: silent no-ops
//! after a terminal status, exactly-once score reporting, exit that
//! cancels pending timers without reporting, and re-armable resets.

use arcade_core::engine::{GameEngine, Status};
use arcade_core::games::guess::NumberGuessEngine;
use arcade_core::games::memory::{self, MemoryEngine, Symbol};
use arcade_core::games::snake::{Cell, Direction, SnakeEngine};
use arcade_core::games::tictactoe::{Mark, TicTacToeEngine, REPLY_DELAY_MS};

// =============================================================================
// Helpers
// =============================================================================

/// Drive a memory engine's playback until input opens.
fn open_memory_input(engine: &mut MemoryEngine, clock: &mut u64) {
    for _ in 0..200 {
        if engine.phase() == memory::Phase::Collecting {
            return;
        }
        *clock += 100;
        engine.advance(*clock);
    }
    panic!("playback never opened input");
}

/// Run a snake session into the top wall. Steering up keeps the path
/// clear of the initial food, so the score stays at zero.
fn crash_snake(engine: &mut SnakeEngine) {
    engine.set_direction(Direction::Up);
    for _ in 0..20 {
        engine.tick();
        if engine.is_over() {
            return;
        }
    }
    panic!("snake never crashed");
}

// =============================================================================
// Start / NotStarted
// =============================================================================

#[test]
fn test_engines_begin_not_started() {
    assert_eq!(NumberGuessEngine::with_seed(1).status(), Status::NotStarted);
    assert_eq!(SnakeEngine::with_seed(1).status(), Status::NotStarted);
    assert_eq!(TicTacToeEngine::new().status(), Status::NotStarted);
    assert_eq!(MemoryEngine::with_seed(1).status(), Status::NotStarted);
}

#[test]
fn test_inputs_before_start_are_no_ops() {
    let mut guess = NumberGuessEngine::with_seed(1);
    assert!(!guess.submit_guess(50));

    let mut snake = SnakeEngine::with_seed(1);
    snake.tick();
    assert_eq!(snake.body().collect::<Vec<_>>(), vec![Cell::new(10, 5)]);

    let mut ttt = TicTacToeEngine::new();
    assert!(!ttt.player_move(4));

    let mut mem = MemoryEngine::with_seed(1);
    assert!(!mem.submit_symbol(Symbol::Red));
}

#[test]
fn test_start_is_idempotent_while_in_progress() {
    let mut engine = TicTacToeEngine::new();
    engine.advance(0);
    engine.start();
    engine.player_move(0);

    engine.start();
    assert_eq!(engine.board().count(Mark::Player), 1);
    assert_eq!(engine.status(), Status::InProgress);
}

// =============================================================================
// Exactly-once reporting
// =============================================================================

#[test]
fn test_snake_reports_exactly_once() {
    let mut engine = SnakeEngine::with_seed(1);
    engine.start();
    crash_snake(&mut engine);

    assert_eq!(engine.take_score_report(), Some(0));
    assert_eq!(engine.take_score_report(), None);

    engine.tick();
    assert_eq!(engine.take_score_report(), None);
}

#[test]
fn test_tictactoe_reports_exactly_once() {
    let mut engine = TicTacToeEngine::new();
    engine.start();

    // Greedy play reaches a terminal against the perfect opponent.
    let mut clock = 0;
    while engine.status() == Status::InProgress {
        if engine.turn() == arcade_core::games::tictactoe::Turn::Player {
            let cell = engine.board().free_cells()[0];
            engine.player_move(cell);
        }
        clock += REPLY_DELAY_MS;
        engine.advance(clock);
    }

    let report = engine.take_score_report();
    assert!(report.is_some());
    assert_eq!(engine.take_score_report(), None);

    engine.advance(clock + REPLY_DELAY_MS);
    assert_eq!(engine.take_score_report(), None);
}

// =============================================================================
// Exit cancellation
// =============================================================================

#[test]
fn test_exit_during_memory_playback_cancels_everything() {
    let mut engine = MemoryEngine::with_seed(5);
    engine.advance(0);
    engine.start();
    assert_eq!(engine.phase(), memory::Phase::Showing);

    engine.exit();

    // No pending reveal may fire against the relinquished session.
    engine.advance(1_000_000);
    assert_eq!(engine.phase(), memory::Phase::Idle);
    assert_eq!(engine.active_symbol(), None);
    assert_eq!(engine.status(), Status::NotStarted);
}

#[test]
fn test_exit_during_reply_delay_cancels_opponent() {
    let mut engine = TicTacToeEngine::new();
    engine.advance(0);
    engine.start();
    engine.player_move(0);

    engine.exit();
    engine.advance(1_000_000);

    assert_eq!(engine.board().count(Mark::Opponent), 0);
    assert_eq!(engine.take_score_report(), None);
}

#[test]
fn test_exit_after_terminal_swallows_report() {
    let mut engine = SnakeEngine::with_seed(1);
    engine.start();
    crash_snake(&mut engine);

    // Exit before the host polled: the report must never surface.
    engine.exit();
    assert_eq!(engine.take_score_report(), None);
}

// =============================================================================
// Reset re-arms
// =============================================================================

#[test]
fn test_reset_after_loss_restores_play() {
    let mut engine = SnakeEngine::with_seed(1);
    engine.start();
    crash_snake(&mut engine);
    assert_eq!(engine.take_score_report(), Some(0));

    engine.reset();
    assert_eq!(engine.status(), Status::InProgress);
    assert_eq!(engine.body().collect::<Vec<_>>(), vec![Cell::new(10, 5)]);

    // The new session reports independently.
    crash_snake(&mut engine);
    assert_eq!(engine.take_score_report(), Some(0));
}

#[test]
fn test_memory_reset_reaches_idle() {
    let mut engine = MemoryEngine::with_seed(5);
    let mut clock = 0;
    engine.advance(clock);
    engine.start();
    open_memory_input(&mut engine, &mut clock);

    engine.reset();

    assert_eq!(engine.status(), Status::NotStarted);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.score(), 0);

    // Re-armed: a fresh start schedules a fresh playback.
    engine.start();
    assert_eq!(engine.phase(), memory::Phase::Showing);
    open_memory_input(&mut engine, &mut clock);
    assert_eq!(engine.phase(), memory::Phase::Collecting);
}
