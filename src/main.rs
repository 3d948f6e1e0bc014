use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_minimax::core::Player;
use tictactoe_minimax::game::{Game, ReplayViewer};
use tictactoe_minimax::player::ai::AIConfig;
use tictactoe_minimax::player::{MinimaxAI, PlayerController, TuiController};
use tictactoe_minimax::selfplay::{self, OpponentKind, SelfPlayConfig, SelfPlayStats};

const AI_DELAY: Duration = Duration::from_millis(400);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = AIConfig::load_or_default();

    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run(&config).await;

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    let report = res?;
    if let Some(text) = report {
        println!("{}", text);
    }
    Ok(())
}

fn read_choice(valid: &[char]) -> anyhow::Result<Option<char>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(None),
                    KeyCode::Char(c) if valid.contains(&c) => return Ok(Some(c)),
                    _ => {}
                }
            }
        }
    }
}

fn wait_for_key() -> anyhow::Result<()> {
    print!("\r\nPress any key...\r\n");
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

/// Returns a summary to print after the terminal is restored.
async fn run(config: &AIConfig) -> anyhow::Result<Option<String>> {
    print!("=== Tic-Tac-Toe (minimax) ===\r\n");
    print!("\r\nSelect mode:\r\n");
    print!("1. Human (X) vs AI (O)\r\n");
    print!("2. AI (X) vs Human (O)\r\n");
    print!("3. AI vs AI\r\n");
    print!("4. Self-play batch\r\n");
    print!("5. Replay latest record\r\n");
    print!("q. Quit\r\n");

    let Some(mode) = read_choice(&['1', '2', '3', '4', '5'])? else {
        return Ok(None);
    };

    match mode {
        '4' => run_batch(config).await.map(Some),
        '5' => {
            match latest_record(Path::new(selfplay::RECORD_DIR))? {
                Some(path) => ReplayViewer::from_path(&path)?.run()?,
                None => {
                    print!("\r\nNo records in {}/\r\n", selfplay::RECORD_DIR);
                    wait_for_key()?;
                }
            }
            Ok(None)
        }
        _ => {
            run_local(mode, config)?;
            Ok(None)
        }
    }
}

fn run_local(mode: char, config: &AIConfig) -> anyhow::Result<()> {
    let (x, o): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match mode {
        '1' => (
            Box::new(TuiController::new(Player::X, "Human")),
            Box::new(MinimaxAI::with_config("Minimax AI", config.search)),
        ),
        '2' => (
            Box::new(MinimaxAI::with_config("Minimax AI", config.search)),
            Box::new(TuiController::new(Player::O, "Human")),
        ),
        _ => (
            Box::new(MinimaxAI::with_config("Minimax AI (X)", config.search)),
            Box::new(MinimaxAI::with_config("Minimax AI (O)", config.search)),
        ),
    };

    let mut game = Game::new();
    game.play(x.as_ref(), o.as_ref(), AI_DELAY)?;

    if config.selfplay.save_records {
        let record = game.record(x.name(), o.name());
        let path = record.save(Path::new(selfplay::RECORD_DIR), "game")?;
        log::info!("saved record {}", path.display());
    }
    wait_for_key()
}

async fn run_batch(config: &AIConfig) -> anyhow::Result<String> {
    print!("\r\nRunning {} games per pairing...\r\n", config.selfplay.num_games);

    let mut lines = Vec::new();
    for (x, o) in [
        (OpponentKind::Minimax, OpponentKind::Random),
        (OpponentKind::Random, OpponentKind::Minimax),
        (OpponentKind::Minimax, OpponentKind::Minimax),
    ] {
        let batch = SelfPlayConfig {
            num_games: config.selfplay.num_games,
            x,
            o,
            search: config.search,
            record_dir: config
                .selfplay
                .save_records
                .then(|| PathBuf::from(selfplay::RECORD_DIR)),
        };
        // 探索は CPU バウンドなので blocking スレッドで回す
        let stats = tokio::task::spawn_blocking(move || selfplay::run_selfplay(&batch)).await??;
        lines.push(summary(x, o, &stats));
    }
    Ok(lines.join("\n"))
}

fn summary(x: OpponentKind, o: OpponentKind, stats: &SelfPlayStats) -> String {
    let pct = |n: usize| n as f64 / stats.total_games.max(1) as f64 * 100.0;
    format!(
        "{:?} (X) vs {:?} (O): X {} ({:.1}%), O {} ({:.1}%), draw {} ({:.1}%), avg {:.1} moves, {:.1}ms/game",
        x,
        o,
        stats.x_wins,
        pct(stats.x_wins),
        stats.o_wins,
        pct(stats.o_wins),
        stats.draws,
        pct(stats.draws),
        stats.avg_moves,
        stats.avg_time_ms
    )
}

fn latest_record(dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    if !dir.exists() {
        return Ok(None);
    }
    let mut latest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        if latest.as_ref().map_or(true, |(t, _)| modified > *t) {
            latest = Some((modified, path));
        }
    }
    Ok(latest.map(|(_, path)| path))
}
