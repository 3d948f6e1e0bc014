pub mod config;
pub mod minimax;
pub mod random;
pub mod tt;

pub use config::AIConfig;
pub use minimax::{best_move, best_move_parallel, max_value, min_value, MinimaxAI};
pub use random::RandomAI;
pub use tt::{CachedSearch, TranspositionTable};
