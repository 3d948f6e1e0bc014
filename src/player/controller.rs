use crate::core::{Board, Move};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// `None` means the player resigns.
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;

    /// Controllers driven by a person at the terminal get no artificial delay.
    fn is_interactive(&self) -> bool {
        false
    }
}
