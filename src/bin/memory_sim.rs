use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use memory_match::game::{
    play_to_completion, MemoryStrategy, RandomStrategy, SimReport, Strategy,
};
use memory_match::{
    GameConfig, GameRng, HeadlessAssets, HeadlessScene, MemoryGame, RecordingPresenter, Viewport,
};
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyKind {
    /// Click any selectable card
    Random,
    /// Remember every revealed motif
    Memory,
}

#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 10)]
    games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use only the first N motifs
    #[arg(short, long)]
    motifs: Option<usize>,

    /// Override the column count
    #[arg(long)]
    columns: Option<usize>,

    /// Which autoplay strategy to use
    #[arg(short, long, value_enum, default_value_t = StrategyKind::Memory)]
    strategy: StrategyKind,

    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// Give up on a game after this many frames
    #[arg(long, default_value_t = 200_000)]
    max_frames: usize,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn load_config(args: &Args) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(count) = args.motifs {
        config = config.with_motif_count(count);
    }
    if let Some(columns) = args.columns {
        config = config.with_columns(columns);
    }
    config.validate()?;
    Ok(config)
}

fn play_one(config: &GameConfig, seed: u64, args: &Args) -> anyhow::Result<SimReport> {
    let mut game = MemoryGame::new(
        config.clone(),
        seed,
        &mut HeadlessAssets::new(),
        HeadlessScene::new(),
        RecordingPresenter::new(),
    )?;
    game.set_viewport(Viewport::new(1280.0 * config.canvas_width_ratio, 800.0));

    let mut rng = GameRng::new(seed).for_context("autoplay");
    let mut strategy: Box<dyn Strategy> = match args.strategy {
        StrategyKind::Random => Box::new(RandomStrategy),
        StrategyKind::Memory => Box::new(MemoryStrategy::new()),
    };

    Ok(play_to_completion(&mut game, &mut strategy, &mut rng, args.frame_ms, args.max_frames))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let config = load_config(&args)?;
    let mut reports = Vec::with_capacity(args.games);

    for game_idx in 0..args.games {
        let game_seed = seed.wrapping_add(game_idx as u64);
        let report = play_one(&config, game_seed, &args)?;
        debug!(game_idx, ?report);
        if !report.won {
            warn!(game_idx, frames = report.frames, "game not finished");
        }
        println!(
            "game {:>3}: {} attempts, {}/{} pairs, {:.1}s simulated",
            game_idx,
            report.attempts,
            report.pairs_found,
            config.pair_count(),
            report.frames as f64 * args.frame_ms / 1000.0
        );
        reports.push(report);
    }

    let won: Vec<&SimReport> = reports.iter().filter(|r| r.won).collect();
    if !won.is_empty() {
        let average = won.iter().map(|r| f64::from(r.attempts)).sum::<f64>() / won.len() as f64;
        println!(
            "\n{} of {} games won, {:.2} attempts on average ({} pairs)",
            won.len(),
            reports.len(),
            average,
            config.pair_count()
        );
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format().with_target(false).compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
