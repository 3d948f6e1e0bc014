use crate::core::{Board, Move};
use crate::display::{render_board, DisplayState};
use crate::game::GameRecord;
use crossterm::event::{self, Event, KeyCode};
use std::path::Path;
use std::time::Duration;

pub struct ReplayViewer {
    record: GameRecord,
    boards: Vec<Board>,
    current_index: usize,
}

impl ReplayViewer {
    pub fn new(record: GameRecord) -> crate::error::Result<Self> {
        let boards = record.boards()?;
        Ok(Self {
            record,
            boards,
            current_index: 0,
        })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let record = GameRecord::load(path)?;
        Ok(Self::new(record)?)
    }

    pub fn current_board(&self) -> &Board {
        &self.boards[self.current_index]
    }

    fn last_move(&self) -> Option<Move> {
        self.current_index
            .checked_sub(1)
            .map(|i| self.record.moves[i])
    }

    pub fn forward(&mut self) {
        if self.current_index < self.record.moves.len() {
            self.current_index += 1;
        }
    }

    pub fn back(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = DisplayState {
                last_move: self.last_move(),
                status_msg: Some(format!(
                    "Replay: {} (X) vs {} (O), {}",
                    self.record.x_name,
                    self.record.o_name,
                    self.record
                        .played_at
                        .format("%Y-%m-%d %H:%M:%S")
                )),
                ..DisplayState::default()
            };
            render_board(self.current_board(), &state)?;

            print!("\r\n");
            if let Some(outcome) = self.record.outcome {
                print!("Result: {}\r\n", outcome);
            }
            print!(
                "Move {}/{} | [←/→] Navigate | [q] Quit\r\n",
                self.current_index,
                self.record.moves.len()
            );

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Right | KeyCode::Char('n') => self.forward(),
                        KeyCode::Left | KeyCode::Char('p') => self.back(),
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}
