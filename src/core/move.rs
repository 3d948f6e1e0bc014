use super::board::SIZE;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 着手 (0-indexed の行・列)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        let mv = Move { row, col };
        if mv.in_bounds() {
            Ok(mv)
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
