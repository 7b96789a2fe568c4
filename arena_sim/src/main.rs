//! Multi-Agent Arena CLI
//!
//! Plays random-policy episodes, optionally rendering them to the terminal.

use arena_core::{ArenaConfig, NoopRenderer, Renderer, WriterRenderer};
use arena_sim::{EpisodeExport, EpisodeResult, EpisodeRunner, RunSummary, SimError};
use clap::Parser;
use std::io;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Multi-Agent Arena episode runner
#[derive(Parser, Debug)]
#[command(name = "arena-sim")]
#[command(about = "Play two-agent grid arena episodes with a random policy", long_about = None)]
struct Args {
    /// Base seed for the random policy (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of episodes to play
    #[arg(short, long, default_value = "1")]
    episodes: usize,

    /// JSON file with arena config (width, height, timestep_limit, render)
    #[arg(short, long)]
    config: Option<String>,

    /// Grid width (overrides config file)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides config file)
    #[arg(long)]
    height: Option<usize>,

    /// Steps per episode (overrides config file)
    #[arg(short, long)]
    timestep_limit: Option<u64>,

    /// Render every step to stdout
    #[arg(short, long)]
    render: bool,

    /// Pause between rendered frames in milliseconds
    #[arg(long, default_value = "300")]
    delay_ms: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for scripting
    #[arg(long)]
    json: bool,

    /// Export the last episode's frames to a JSON file
    #[arg(long)]
    export: Option<String>,
}

/// Builds the arena config from the optional file plus flag overrides.
fn load_config(args: &Args) -> Result<ArenaConfig, SimError> {
    let mut config = match &args.config {
        Some(path) => ArenaConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ArenaConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(limit) = args.timestep_limit {
        config.timestep_limit = limit;
    }
    config.render |= args.render;
    config.validate()?;

    Ok(config)
}

fn run(args: &Args) -> Result<Vec<EpisodeResult>, SimError> {
    let config = load_config(args)?;

    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    } else {
        args.seed
    };

    if !args.json {
        info!(
            "Arena {}x{}, {} steps per episode, {} episode(s), seed={}",
            config.width, config.height, config.timestep_limit, args.episodes, seed
        );
    }

    // stdout carries only the JSON summary under --json
    let delay = Duration::from_millis(args.delay_ms);
    let mut renderer: Box<dyn Renderer> = match (config.render, args.json) {
        (false, _) => Box::new(NoopRenderer),
        (true, false) => Box::new(WriterRenderer::stdout().with_delay(delay)),
        (true, true) => Box::new(WriterRenderer::new(io::stderr()).with_delay(delay)),
    };

    let mut runner = EpisodeRunner::new(config.clone(), seed)?.with_frames(args.export.is_some());
    let results = runner.run(args.episodes, renderer.as_mut())?;

    if let (Some(path), Some(last)) = (&args.export, results.last()) {
        EpisodeExport::new(&config, last).write_to_file(path)?;
        info!("Exported {} frames to {}", last.frames.len(), path);
    }

    Ok(results)
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let results = match run(&args) {
        Ok(results) => results,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let summary = RunSummary::from_results(&results);
    if args.json {
        match summary.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        info!(
            "{} episode(s): mean R1={:.2} mean R2={:.2}, {} collisions total",
            summary.episodes,
            summary.mean_return_agent1,
            summary.mean_return_agent2,
            summary.total_collisions
        );
    }
}
