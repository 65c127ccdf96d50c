//! Exhaustive minimax search for the perfect-play opponent.
//!
//! The full remaining game tree is enumerated; the 9-cell bound keeps
//! it small enough that no pruning is needed. Fully-resolved boards are
//! scored `10 - depth` when the Opponent wins, `depth - 10` when the
//! Player wins, and 0 for a draw, where `depth` counts plies already
//! played in that branch. The depth term makes the search prefer the
//! fastest win and the slowest loss.
//!
//! The search is a pure evaluation over `Copy` board snapshots - each
//! recursion receives its own board, so no branch can leak state into
//! a sibling.

use super::board::{Board, Mark};

/// Pick the Opponent's best reply on the given board.
///
/// Returns `None` when the board has no free cell. Among equally-scored
/// moves the lowest cell index wins, so the reply is deterministic.
#[must_use]
pub fn best_reply(board: Board) -> Option<usize> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for cell in board.free_cells() {
        let score = minimax(board.with_mark(cell, Mark::Opponent), 0, false);
        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

/// Evaluate a position with the Opponent to move when `maximizing`,
/// the Player otherwise.
fn minimax(board: Board, depth: i32, maximizing: bool) -> i32 {
    match board.winner() {
        Some(Mark::Opponent) => return 10 - depth,
        Some(Mark::Player) => return depth - 10,
        None => {}
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        board
            .free_cells()
            .into_iter()
            .map(|cell| minimax(board.with_mark(cell, Mark::Opponent), depth + 1, false))
            .max()
            .expect("non-full board has a move")
    } else {
        board
            .free_cells()
            .into_iter()
            .map(|cell| minimax(board.with_mark(cell, Mark::Player), depth + 1, true))
            .min()
            .expect("non-full board has a move")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |b, &(i, m)| b.with_mark(i, m))
    }

    #[test]
    fn test_no_reply_on_full_board() {
        // X O X / X O O / O X X - full, drawn.
        let board = board_from(&[
            (0, Mark::Player),
            (1, Mark::Opponent),
            (2, Mark::Player),
            (3, Mark::Player),
            (4, Mark::Opponent),
            (5, Mark::Opponent),
            (6, Mark::Opponent),
            (7, Mark::Player),
            (8, Mark::Player),
        ]);
        assert_eq!(best_reply(board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // Opponent has 0,1 - completing 2 wins now, even though the
        // Player also threatens 3.
        let board = board_from(&[
            (0, Mark::Opponent),
            (1, Mark::Opponent),
            (4, Mark::Player),
            (5, Mark::Player),
            (7, Mark::Player),
        ]);
        assert_eq!(best_reply(board), Some(2));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // Player threatens 0,1,2; Opponent must play 2.
        let board = board_from(&[
            (0, Mark::Player),
            (1, Mark::Player),
            (4, Mark::Opponent),
        ]);
        assert_eq!(best_reply(board), Some(2));
    }

    #[test]
    fn test_win_beats_block() {
        // Both sides threaten a line; taking the win outranks blocking.
        let board = board_from(&[
            (0, Mark::Player),
            (1, Mark::Player),
            (8, Mark::Player),
            (3, Mark::Opponent),
            (4, Mark::Opponent),
        ]);
        assert_eq!(best_reply(board), Some(5));
    }

    #[test]
    fn test_center_opening_answered_with_corner() {
        let board = Board::new().with_mark(4, Mark::Player);
        let reply = best_reply(board).unwrap();
        assert!([0, 2, 6, 8].contains(&reply));
    }

    #[test]
    fn test_corner_opening_answered_with_center() {
        let board = Board::new().with_mark(0, Mark::Player);
        assert_eq!(best_reply(board), Some(4));
    }

    #[test]
    fn test_double_threat_takes_immediate_win() {
        // Opponent holds 0, 2, 4: both 1 (top row) and 8 (diagonal)
        // win on the spot. The lowest index is chosen deterministically,
        // and the immediate win scores the full 10.
        let board = board_from(&[
            (0, Mark::Opponent),
            (2, Mark::Opponent),
            (4, Mark::Opponent),
            (3, Mark::Player),
            (5, Mark::Player),
            (6, Mark::Player),
            (7, Mark::Player),
        ]);
        assert_eq!(best_reply(board), Some(1));
        assert_eq!(minimax(board.with_mark(1, Mark::Opponent), 0, false), 10);
    }
}
