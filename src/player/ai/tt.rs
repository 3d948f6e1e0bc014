use super::minimax::{pick_best, successors};
use crate::core::{Board, Move, Player};
use crate::error::{Error, Result};
use crate::logic::{is_terminal, player_to_move, utility};
use std::collections::HashMap;

/// Values are exact (the tree is searched to the end), so there are no bounds
/// or depths to track and an entry never goes stale.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<Board, i32>,
    hits: usize,
    misses: usize,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, board: &Board) -> Option<i32> {
        let found = self.entries.get(board).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    pub fn store(&mut self, board: Board, value: i32) {
        self.entries.insert(board, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

/// Minimax with memoized values. Returns exactly what
/// [`best_move`](super::minimax::best_move) returns, tie-break included.
#[derive(Debug, Default)]
pub struct CachedSearch {
    table: TranspositionTable,
}

impl CachedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Minimax value of `board` from X's point of view, whoever is to move.
    pub fn value(&mut self, board: &Board) -> i32 {
        if is_terminal(board) {
            return utility(board);
        }
        if let Some(v) = self.table.get(board) {
            return v;
        }

        let player = player_to_move(board);
        let children: Vec<Board> = successors(board).map(|(_, next)| next).collect();
        let values = children.iter().map(|next| self.value(next));
        let v = match player {
            Player::X => values.max(),
            Player::O => values.min(),
        }
        .unwrap_or(0);

        self.table.store(*board, v);
        v
    }

    pub fn best_move(&mut self, board: &Board) -> Result<Move> {
        if is_terminal(board) {
            return Err(Error::NoLegalMove);
        }
        let player = player_to_move(board);
        let candidates: Vec<(Move, Board)> = successors(board).collect();
        let values: Vec<i32> = candidates
            .iter()
            .map(|(_, next)| self.value(next))
            .collect();
        let idx = pick_best(player, &values).ok_or(Error::NoLegalMove)?;
        Ok(candidates[idx].0)
    }
}
