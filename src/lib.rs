//! Perfect-play tic-tac-toe: an immutable board model and exhaustive minimax.

pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

#[cfg(test)]
mod logic_tests;
#[cfg(test)]
mod search_tests;

pub use crate::core::{Board, Cell, Move, Outcome, Player};
pub use crate::error::{Error, Result};
pub use crate::logic::{
    apply, initial_state, is_terminal, legal_moves, outcome, player_to_move, utility, winner,
};
pub use crate::player::ai::{best_move, best_move_parallel};
