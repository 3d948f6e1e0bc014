use crate::core::board::SIZE;
use crate::core::{Board, Move, Player};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    player: Player,
    name: String,
}

impl TuiController {
    pub fn new(player: Player, name: &str) -> Self {
        Self {
            player,
            name: name.to_string(),
        }
    }

    fn read_move(&self, board: &Board, legal_moves: &[Move]) -> std::io::Result<Option<Move>> {
        let mut state = DisplayState {
            show_cursor: true,
            status_msg: Some(format!("{}'s turn ({})", self.name, self.player)),
            ..DisplayState::default()
        };
        if let Some(&first) = legal_moves.first() {
            state.cursor = first;
        }

        loop {
            render_board(board, &state)?;
            print!("[Arrows]: Move | [Enter]: Place | [q]: Resign\r\n");

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') => return Ok(None),
                    KeyCode::Up if state.cursor.row > 0 => state.cursor.row -= 1,
                    KeyCode::Down if state.cursor.row < SIZE - 1 => state.cursor.row += 1,
                    KeyCode::Left if state.cursor.col > 0 => state.cursor.col -= 1,
                    KeyCode::Right if state.cursor.col < SIZE - 1 => state.cursor.col += 1,
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if legal_moves.contains(&state.cursor) {
                            return Ok(Some(state.cursor));
                        }
                        state.status_msg = Some(format!("{} is taken", state.cursor));
                    }
                    _ => {}
                }
            }
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        self.read_move(board, legal_moves).unwrap_or_else(|e| {
            log::error!("terminal input failed: {}", e);
            None
        })
    }
}
