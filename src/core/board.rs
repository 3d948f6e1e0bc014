use super::r#move::Move;
use super::types::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面の一辺
pub const SIZE: usize = 3;

/// A plain `Copy` value. Nothing in the crate mutates a board handed to it;
/// every transition builds a fresh one (see [`crate::logic::apply`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "crate::core::serialization")]
    pub cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row][mv.col]
    }

    /// Copy of this board with `mv` set to `cell`. Bounds are the caller's concern.
    pub fn with_cell(&self, mv: Move, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[mv.row][mv.col] = cell;
        next
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }

    /// Row-major iteration over every coordinate and its cell.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (Move::new(row, col), cell))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.display_char())?;
            }
        }
        Ok(())
    }
}
