//! Compact serde form of the grid: one string per row, e.g. `["XO.", ".X.", "..O"]`.
//!
//! Deserialization applies the same mark-count rule as
//! [`board_from_strings`](super::setup::board_from_strings).

use super::board::{Board, SIZE};
use super::setup::check_counts;
use super::types::Cell;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S>(cells: &[[Cell; SIZE]; SIZE], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rows: Vec<String> = cells
        .iter()
        .map(|row| row.iter().map(|c| c.display_char()).collect())
        .collect();
    rows.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<[[Cell; SIZE]; SIZE], D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<String> = Vec::deserialize(deserializer)?;
    if rows.len() != SIZE {
        return Err(D::Error::custom(format!(
            "expected {} rows, got {}",
            SIZE,
            rows.len()
        )));
    }

    let mut cells = [[Cell::Empty; SIZE]; SIZE];
    for (r, row) in rows.iter().enumerate() {
        let chars: Vec<char> = row.chars().collect();
        if chars.len() != SIZE {
            return Err(D::Error::custom(format!(
                "row {} must have {} cells: '{}'",
                r, SIZE, row
            )));
        }
        for (c, &ch) in chars.iter().enumerate() {
            cells[r][c] = Cell::from_char(ch)
                .ok_or_else(|| D::Error::custom(format!("invalid cell '{}'", ch)))?;
        }
    }
    check_counts(&Board::from_cells(cells)).map_err(D::Error::custom)?;
    Ok(cells)
}
