use crate::core::board::SIZE;
use crate::core::{Board, Cell};
use crate::error::{Error, Result};

/// Parses a board from three row strings.
///
/// Each row is three characters: `X`, `O`, or `.`/space for an empty cell.
/// The resulting board must be reachable by alternating play from X, so the
/// X count equals the O count or exceeds it by one.
pub fn board_from_strings(rows: &[&str]) -> Result<Board> {
    if rows.len() != SIZE {
        return Err(Error::InvalidBoardShape {
            rows: rows.len(),
            context: rows.join("/"),
        });
    }

    let mut cells = [[Cell::Empty; SIZE]; SIZE];
    for (r, row) in rows.iter().enumerate() {
        let chars: Vec<char> = row.chars().collect();
        if chars.len() != SIZE {
            return Err(Error::InvalidBoardShape {
                rows: rows.len(),
                context: rows.join("/"),
            });
        }
        for (c, &ch) in chars.iter().enumerate() {
            cells[r][c] = Cell::from_char(ch).ok_or(Error::InvalidCellCharacter {
                character: ch,
                row: r,
                col: c,
            })?;
        }
    }

    let board = Board::from_cells(cells);
    check_counts(&board)?;
    Ok(board)
}

/// X moves first, so X has as many marks as O or exactly one more.
pub fn check_counts(board: &Board) -> Result<()> {
    let x_count = board.count(Cell::X);
    let o_count = board.count(Cell::O);
    if x_count != o_count && x_count != o_count + 1 {
        return Err(Error::InvalidPieceCounts { x_count, o_count });
    }
    Ok(())
}
