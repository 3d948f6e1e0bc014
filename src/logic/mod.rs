use crate::core::{Board, Cell, Move, Outcome, Player};
use crate::error::{Error, Result};

/// The order matters for [`winner`]: when several lines are complete at once
/// the first one listed here decides the result.
pub const WINNING_LINES: [[Move; 3]; 8] = [
    // rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// 初期局面
pub fn initial_state() -> Board {
    Board::new()
}

/// X moves first, so equal mark counts mean X is to move.
pub fn player_to_move(board: &Board) -> Player {
    if board.count(Cell::X) == board.count(Cell::O) {
        Player::X
    } else {
        Player::O
    }
}

/// The row-major order is what the search uses to break ties between equally
/// good moves.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .iter()
        .filter(|(_, cell)| *cell == Cell::Empty)
        .map(|(mv, _)| mv)
        .collect()
}

/// 着手を適用した新しい盤面を返す (元の盤面は変更しない)
pub fn apply(board: &Board, mv: Move) -> Result<Board> {
    if !mv.in_bounds() {
        return Err(Error::OutOfBounds {
            row: mv.row,
            col: mv.col,
        });
    }
    if board.get(mv) != Cell::Empty {
        return Err(Error::InvalidMove { mv });
    }
    Ok(board.with_cell(mv, player_to_move(board).mark()))
}

/// Lines are scanned in [`WINNING_LINES`] order: rows top to bottom, columns
/// left to right, then the main diagonal and the anti-diagonal. The first
/// complete line wins even if a later one belongs to the other player, which
/// only happens on boards legal play never produces.
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|line| {
        let first = board.get(line[0]);
        if first != Cell::Empty && line.iter().all(|&pos| board.get(pos) == first) {
            first.owner()
        } else {
            None
        }
    })
}

/// 終局判定
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Result of a finished game, `None` while play continues.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if is_terminal(board) {
        Some(Outcome::from(winner(board)))
    } else {
        None
    }
}

/// # Panics
///
/// Panics when `board` is not terminal. The search only asks for the utility
/// after checking [`is_terminal`].
pub fn utility(board: &Board) -> i32 {
    assert!(
        is_terminal(board),
        "utility called on a non-terminal board: {}",
        board
    );
    Outcome::from(winner(board)).utility()
}
