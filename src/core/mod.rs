pub mod board;
pub mod r#move;
pub mod serialization;
pub mod setup;
pub mod types;

pub use board::Board;
pub use r#move::Move;
pub use setup::board_from_strings;
pub use types::{Cell, Outcome, Player};
