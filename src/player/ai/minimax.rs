//! Exhaustive minimax over the full tic-tac-toe game tree.
//!
//! X is the maximizing side, O the minimizing side. There is no pruning and no
//! depth limit: every line is played out to a terminal board and scored with
//! [`utility`].

use super::config::SearchConfig;
use super::tt::CachedSearch;
use crate::core::{Board, Move, Player};
use crate::error::{Error, Result};
use crate::logic::{is_terminal, legal_moves, player_to_move, utility};
use crate::player::PlayerController;
use rayon::prelude::*;
use std::cell::RefCell;

/// Every legal move together with the board it leads to, in row-major order.
///
/// Equivalent to [`apply`](crate::logic::apply) on each move. Candidates come
/// from `legal_moves`, so the cells are empty and in bounds and the checks
/// `apply` performs cannot fail; children are built with `with_cell` directly
/// so the value functions stay infallible.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    let mark = player_to_move(board).mark();
    legal_moves(board)
        .into_iter()
        .map(move |mv| (mv, board.with_cell(mv, mark)))
}

/// Index of the best value for `player`. Strict comparison keeps the first of
/// several equal candidates.
pub(crate) fn pick_best(player: Player, values: &[i32]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (i, &value) in values.iter().enumerate() {
        let better = match (best, player) {
            (None, _) => true,
            (Some((_, b)), Player::X) => value > b,
            (Some((_, b)), Player::O) => value < b,
        };
        if better {
            best = Some((i, value));
        }
    }
    best.map(|(i, _)| i)
}

/// Value of `board` when the side to move is maximizing.
pub fn max_value(board: &Board) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .max()
        .unwrap_or(i32::MIN)
}

/// Value of `board` when the side to move is minimizing.
pub fn min_value(board: &Board) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .min()
        .unwrap_or(i32::MAX)
}

/// Value the opponent of `player` can force after `player` has moved into `next`.
fn reply_value(player: Player, next: &Board) -> i32 {
    match player {
        Player::X => min_value(next),
        Player::O => max_value(next),
    }
}

/// Returns the optimal move for the side to move. Among equally good moves the
/// first one in [`legal_moves`] order is chosen.
///
/// # Errors
///
/// [`Error::NoLegalMove`] when the game is already decided or the board is full.
pub fn best_move(board: &Board) -> Result<Move> {
    if is_terminal(board) {
        return Err(Error::NoLegalMove);
    }
    let player = player_to_move(board);
    let (moves, values): (Vec<Move>, Vec<i32>) = successors(board)
        .map(|(mv, next)| (mv, reply_value(player, &next)))
        .unzip();
    let idx = pick_best(player, &values).ok_or(Error::NoLegalMove)?;
    Ok(moves[idx])
}

/// Same result as [`best_move`], with root candidates evaluated on the rayon pool.
pub fn best_move_parallel(board: &Board) -> Result<Move> {
    if is_terminal(board) {
        return Err(Error::NoLegalMove);
    }
    let player = player_to_move(board);
    let candidates: Vec<(Move, Board)> = successors(board).collect();
    // par_iter().map().collect() preserves candidate order.
    let values: Vec<i32> = candidates
        .par_iter()
        .map(|(_, next)| reply_value(player, next))
        .collect();
    let idx = pick_best(player, &values).ok_or(Error::NoLegalMove)?;
    Ok(candidates[idx].0)
}

pub struct MinimaxAI {
    pub name: String,
    pub search: SearchConfig,
    cache: RefCell<CachedSearch>,
}

impl MinimaxAI {
    pub fn new(name: &str) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: &str, search: SearchConfig) -> Self {
        Self {
            name: name.to_string(),
            search,
            cache: RefCell::new(CachedSearch::new()),
        }
    }

    pub fn search(&self, board: &Board) -> Result<Move> {
        if self.search.cache {
            let mut cache = self.cache.borrow_mut();
            let mv = cache.best_move(board)?;
            log::trace!(
                "cache: {} entries, {} hits, {} misses",
                cache.table().len(),
                cache.table().hits(),
                cache.table().misses()
            );
            Ok(mv)
        } else if self.search.parallel {
            best_move_parallel(board)
        } else {
            best_move(board)
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, _legal_moves: &[Move]) -> Option<Move> {
        match self.search(board) {
            Ok(mv) => {
                log::debug!("{} ({}) plays {} on {}", self.name, player_to_move(board), mv, board);
                Some(mv)
            }
            Err(e) => {
                log::warn!("{}: {}", self.name, e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
