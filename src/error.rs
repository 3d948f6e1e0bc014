//! Error types for the tic-tac-toe core.

use crate::core::Move;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell {mv} is already occupied")]
    InvalidMove { mv: Move },

    #[error("position ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("no legal move: the game is already over")]
    NoLegalMove,

    #[error("board must be 3 rows of 3 cells, got {rows} rows in '{context}'")]
    InvalidBoardShape { rows: usize, context: String },

    #[error("invalid character '{character}' at ({row}, {col})")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
