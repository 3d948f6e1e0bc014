pub mod ai;
pub mod controller;
pub mod tui;

pub use ai::{MinimaxAI, RandomAI};
pub use controller::PlayerController;
pub use tui::TuiController;
