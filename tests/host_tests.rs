//! Host integration: selection, routing, ledger, cadence.

use arcade_core::engine::{GameKind, Status};
use arcade_core::games::guess::Direction as HintDirection;
use arcade_core::games::memory::{Phase as MemoryPhase, Symbol};
use arcade_core::games::snake::Direction;
use arcade_core::games::tictactoe::REPLY_DELAY_MS;
use arcade_core::host::{ActiveSnapshot, GameHost, HostConfig};

/// Win the active number-guessing session by binary search on hints.
fn win_number_guess(host: &mut GameHost) {
    let (mut lo, mut hi) = (1, 100);
    for _ in 0..7 {
        let mid = (lo + hi) / 2;
        assert!(host.submit_guess(mid));

        let snapshot = match host.snapshot() {
            ActiveSnapshot::NumberGuess(s) => s,
            _ => panic!("number guess is not active"),
        };
        if snapshot.status == Status::Won {
            return;
        }
        match snapshot.history.last().unwrap().hint.direction().unwrap() {
            HintDirection::Higher => lo = mid + 1,
            HintDirection::Lower => hi = mid - 1,
        }
    }
    panic!("binary search must win within 7 guesses");
}

#[test]
fn test_arcade_session_across_all_games() {
    let mut host = GameHost::new(HostConfig::default().with_seed(99));
    let mut clock = 0u64;

    // --- Number guessing: win by binary search ---
    host.select(GameKind::NumberGuess);
    win_number_guess(&mut host);
    assert_eq!(host.ledger().sessions_finished(), 1);
    let guess_score = host.ledger().best(GameKind::NumberGuess).unwrap();
    assert!(guess_score >= 10);

    // --- Snake: steer up into the wall ---
    host.select(GameKind::Snake);
    host.set_direction(Direction::Up);
    for _ in 0..10 {
        clock += 150;
        host.advance(clock);
    }
    assert_eq!(host.status(), Some(Status::Lost));
    assert_eq!(host.ledger().sessions_finished(), 2);

    // --- Tic-Tac-Toe: greedy play ends in draw or loss ---
    host.select(GameKind::TicTacToe);
    while host.status() == Some(Status::InProgress) {
        if let ActiveSnapshot::TicTacToe(s) = host.snapshot() {
            if let Some(cell) = s.cells.iter().position(Option::is_none) {
                host.player_move(cell);
            }
        }
        clock += REPLY_DELAY_MS;
        host.advance(clock);
    }
    assert!(matches!(host.status(), Some(Status::Lost | Status::Draw)));
    assert_eq!(host.ledger().sessions_finished(), 3);

    // --- Memory: answer Red until a mismatch ends it ---
    host.select(GameKind::Memory);
    while host.status() != Some(Status::Lost) {
        clock += 100;
        host.advance(clock);
        if let ActiveSnapshot::Memory(s) = host.snapshot() {
            if s.phase == MemoryPhase::Collecting {
                host.submit_symbol(Symbol::Red);
            }
        }
        assert!(clock < 1_000_000, "memory session never ended");
    }
    assert_eq!(host.ledger().sessions_finished(), 4);

    // Every final score flowed into the cross-game total.
    assert!(host.ledger().total() >= u64::from(guess_score));
}

#[test]
fn test_every_snapshot_serializes() {
    let mut host = GameHost::new(HostConfig::default());

    for kind in GameKind::ALL {
        host.select(kind);
        let json = serde_json::to_string(&host.snapshot()).unwrap();
        assert!(!json.is_empty());
    }

    host.exit_active();
    let json = serde_json::to_string(&host.snapshot()).unwrap();
    assert_eq!(json, "\"None\"");
}

#[test]
fn test_selecting_same_game_restarts_session() {
    let mut host = GameHost::new(HostConfig::default());

    host.select(GameKind::TicTacToe);
    host.player_move(4);

    host.select(GameKind::TicTacToe);
    match host.snapshot() {
        ActiveSnapshot::TicTacToe(s) => assert!(s.cells.iter().all(Option::is_none)),
        _ => panic!("tic-tac-toe is not active"),
    }
    // The abandoned session never reported.
    assert_eq!(host.ledger().sessions_finished(), 0);
}

#[test]
fn test_exit_then_reselect_is_clean() {
    let mut host = GameHost::new(HostConfig::default());
    let mut clock = 0;

    host.select(GameKind::Snake);
    clock += 150;
    host.advance(clock);

    host.exit_active();
    assert_eq!(host.active_kind(), None);

    // Stale snake cadence must not tick into the next game.
    host.select(GameKind::TicTacToe);
    clock += 1500;
    host.advance(clock);
    assert_eq!(host.status(), Some(Status::InProgress));
    assert_eq!(host.active_kind(), Some(GameKind::TicTacToe));
}
