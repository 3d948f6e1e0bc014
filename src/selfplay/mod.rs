use crate::core::Outcome;
use crate::game::Game;
use crate::player::ai::config::SearchConfig;
use crate::player::{MinimaxAI, PlayerController, RandomAI};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

pub const RECORD_DIR: &str = "selfplay_records";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    Minimax,
    Random,
}

impl OpponentKind {
    fn build(self, name: &str, search: SearchConfig) -> Box<dyn PlayerController> {
        match self {
            OpponentKind::Minimax => Box::new(MinimaxAI::with_config(name, search)),
            OpponentKind::Random => Box::new(RandomAI::new(name)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub x: OpponentKind,
    pub o: OpponentKind,
    pub search: SearchConfig,
    /// Directory for JSON game records, `None` to skip saving.
    pub record_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Option<Outcome>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.outcome {
            Some(Outcome::XWins) => self.x_wins += 1,
            Some(Outcome::OWins) => self.o_wins += 1,
            Some(Outcome::Draw) | None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    let x_name = format!("{:?}-X", config.x);
    let o_name = format!("{:?}-O", config.o);

    // One controller per side for the whole batch so the minimax cache is reused.
    let x = config.x.build(&x_name, config.search);
    let o = config.o.build(&o_name, config.search);

    for game_num in 1..=config.num_games {
        let start_time = Instant::now();
        let mut game = Game::new();
        let outcome = game.run_silent(x.as_ref(), o.as_ref())?;
        let elapsed = start_time.elapsed();

        stats.add_result(GameResult {
            outcome,
            moves: game.history.len(),
            time_ms: elapsed.as_millis(),
        });
        log::info!(
            "game {}/{}: {} ({} moves, {:.1}ms)",
            game_num,
            config.num_games,
            outcome.map_or_else(|| "unfinished".to_string(), |res| res.to_string()),
            game.history.len(),
            elapsed.as_secs_f64() * 1000.0
        );

        if let Some(dir) = &config.record_dir {
            let record = game.record(&x_name, &o_name);
            let path = record.save(dir, &format!("game_{:04}", game_num))?;
            log::info!("saved record {}", path.display());
        }
    }

    log::info!(
        "{} vs {}: X {} / O {} / draw {} over {} games",
        x_name,
        o_name,
        stats.x_wins,
        stats.o_wins,
        stats.draws,
        stats.total_games
    );
    Ok(stats)
}
