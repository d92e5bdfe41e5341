//! `sortviz`: watch a comparison sort, one step at a time.
//!
//! ```text
//! sortviz --algorithm insertion --len 40 --speed 30
//! sortviz --values 3,1,2 --headless
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug sortviz 2> sortviz.log`).

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use sortviz::algorithms::Algorithm;
use sortviz::datasets;
use sortviz::driver::{PlayOutcome, Player, PlayerConfig, TerminalEvents};
use sortviz::engine::SortEngine;
use sortviz::rendering::bars::BarChartSurface;
use sortviz::trace::JsonTrace;
use sortviz::{install_panic_handler, terminal_cleanup, terminal_setup, CustomBufWriter};
use sortviz::error::PlayError;
use std::io;
use std::io::stdout;

#[derive(Parser, Debug)]
#[command(version, about = "Animated comparison sorts in the terminal")]
struct Args {
    /// Algorithm to animate.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Selection)]
    algorithm: Algorithm,

    /// Number of values to generate.
    #[arg(short, long, default_value_t = 32)]
    len: usize,

    /// Seed for the generated values. Random if not given.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Allow duplicates by drawing values from 1..=MAX instead of shuffling 1..=len.
    #[arg(long, value_name = "MAX")]
    duplicates: Option<i64>,

    /// Sort these values instead of generated ones, e.g. "3,1,2".
    #[arg(long, conflicts_with_all = ["len", "seed", "duplicates"])]
    values: Option<String>,

    /// Steps per second.
    #[arg(long, default_value_t = 20.0)]
    speed: f64,

    /// Frame rate of the terminal loop.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Start paused.
    #[arg(long)]
    paused: bool,

    /// Exit as soon as the sort is done.
    #[arg(long)]
    exit_on_finish: bool,

    /// Don't draw; print every step as a JSON line instead.
    #[arg(long)]
    headless: bool,
}

fn values(args: &Args) -> anyhow::Result<Vec<i64>> {
    if let Some(text) = &args.values {
        return datasets::parse_values(text).context("parsing --values");
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("dataset seed: {seed}");
    Ok(match args.duplicates {
        Some(max) => datasets::random(args.len, max, seed),
        None => datasets::shuffled(args.len, seed),
    })
}

/// Combines the player's result with the terminal cleanup that always follows it.
///
/// A failed run is the more useful error to report; a cleanup failure is still logged.
fn after_cleanup(
    outcome: Result<PlayOutcome, PlayError>,
    cleanup: io::Result<()>,
) -> anyhow::Result<PlayOutcome> {
    if let Err(err) = cleanup {
        warn!("failed to restore the terminal: {err}");
        if outcome.is_ok() {
            return Err(err).context("restoring terminal");
        }
    }
    Ok(outcome?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = PlayerConfig {
        steps_per_second: args.speed,
        target_fps: args.fps,
        start_paused: args.paused,
        exit_on_finish: args.exit_on_finish,
    };
    config.validate().context("checking --speed and --fps")?;

    let values = values(&args)?;
    let engine = SortEngine::new(values, args.algorithm).context("creating sort engine")?;

    if args.headless {
        let mut engine = engine.with_hooks(JsonTrace::new(stdout().lock()));
        pollster::block_on(engine.play())?;
        return Ok(());
    }

    let mut player = Player::new(config, TerminalEvents)?;
    let (width, height) = crossterm::terminal::size().context("querying terminal size")?;
    let surface = BarChartSurface::new(
        width as usize,
        height as usize,
        CustomBufWriter::new(),
        args.algorithm.name(),
    );
    let mut engine = engine.with_surface(surface);

    terminal_setup()?;
    install_panic_handler();
    let outcome = player.play(&mut engine);
    let outcome = after_cleanup(outcome, terminal_cleanup())?;

    match outcome {
        PlayOutcome::Finished => println!("{}: sorted {:?}", args.algorithm.name(), engine.data()),
        PlayOutcome::Aborted => println!("{}: stopped at {:?}", args.algorithm.name(), engine.data()),
    }
    Ok(())
}
