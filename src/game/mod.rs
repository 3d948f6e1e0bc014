pub mod replay;

use crate::core::{Board, Move, Outcome, Player};
use crate::display::{render_board, DisplayState};
use crate::error::{Error, Result};
use crate::logic::{apply, initial_state, is_terminal, legal_moves, outcome, player_to_move};
use crate::player::PlayerController;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use replay::ReplayViewer;

/// 対局記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub played_at: DateTime<Local>,
    pub x_name: String,
    pub o_name: String,
    pub moves: Vec<Move>,
    pub outcome: Option<Outcome>,
    /// Set when a player gave up instead of moving.
    #[serde(default)]
    pub resigned: Option<Player>,
}

impl GameRecord {
    /// Every board of the game, starting with the empty one.
    pub fn boards(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut current = initial_state();
        boards.push(current);
        for &mv in &self.moves {
            current = apply(&current, mv)?;
            boards.push(current);
        }
        Ok(boards)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Writes the record as `<dir>/<prefix>_<timestamp>.json` and returns the path.
    pub fn save(&self, dir: &Path, prefix: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!(
            "{}_{}.json",
            prefix,
            self.played_at.format("%Y%m%d_%H%M%S%3f")
        ));
        let file = std::fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(path)
    }
}

pub struct Game {
    pub board: Board,
    pub history: Vec<Move>,
    pub resigned: Option<Player>,
    started_at: DateTime<Local>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: initial_state(),
            history: Vec::new(),
            resigned: None,
            started_at: Local::now(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.resigned.is_some() || is_terminal(&self.board)
    }

    /// Final result, counting a resignation as a win for the other side.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.resigned {
            Some(Player::X) => Some(Outcome::OWins),
            Some(Player::O) => Some(Outcome::XWins),
            None => outcome(&self.board),
        }
    }

    /// Asks `controller` for one move and applies it.
    ///
    /// Returns the move played, or `None` if the controller resigned.
    pub fn step(&mut self, controller: &dyn PlayerController) -> Result<Option<Move>> {
        if self.is_over() {
            return Err(Error::NoLegalMove);
        }
        let moves = legal_moves(&self.board);
        match controller.choose_move(&self.board, &moves) {
            Some(mv) => {
                self.board = apply(&self.board, mv)?;
                self.history.push(mv);
                Ok(Some(mv))
            }
            None => {
                self.resigned = Some(player_to_move(&self.board));
                Ok(None)
            }
        }
    }

    /// Plays to the end without any terminal output.
    pub fn run_silent(
        &mut self,
        x: &dyn PlayerController,
        o: &dyn PlayerController,
    ) -> Result<Option<Outcome>> {
        while !self.is_over() {
            let controller = match player_to_move(&self.board) {
                Player::X => x,
                Player::O => o,
            };
            self.step(controller)?;
        }
        Ok(self.outcome())
    }

    /// Interactive loop: renders the board before every move and after the end.
    pub fn play(
        &mut self,
        x: &dyn PlayerController,
        o: &dyn PlayerController,
        ai_delay: Duration,
    ) -> anyhow::Result<Option<Outcome>> {
        while !self.is_over() {
            let player = player_to_move(&self.board);
            let controller = match player {
                Player::X => x,
                Player::O => o,
            };

            let state = DisplayState {
                last_move: self.history.last().copied(),
                status_msg: Some(format!("{} is thinking ({})", controller.name(), player)),
                ..DisplayState::default()
            };
            render_board(&self.board, &state)?;
            if !ai_delay.is_zero() && !controller.is_interactive() {
                std::thread::sleep(ai_delay);
            }

            if let Some(mv) = self.step(controller)? {
                log::info!("{} ({}) played {}", controller.name(), player, mv);
            }
        }

        let result = self.outcome();
        let state = DisplayState {
            last_move: self.history.last().copied(),
            status_msg: Some(match (result, self.resigned) {
                (Some(res), Some(p)) => format!("{} resigned. {}!", p, res),
                (Some(res), None) => format!("Game over: {}!", res),
                (None, _) => "Game over".to_string(),
            }),
            ..DisplayState::default()
        };
        render_board(&self.board, &state)?;
        Ok(result)
    }

    pub fn record(&self, x_name: &str, o_name: &str) -> GameRecord {
        GameRecord {
            played_at: self.started_at,
            x_name: x_name.to_string(),
            o_name: o_name.to_string(),
            moves: self.history.clone(),
            outcome: self.outcome(),
            resigned: self.resigned,
        }
    }
}
