//! pattern-preview: print the trajectory of one enemy flying a named pattern.
//!
//! Usage:
//!   pattern-preview --pattern circular --ticks 120
//!   pattern-preview --pattern swoop --config patterns.json --dt 0.5
//!   pattern-preview --pattern wave --width 64 --height 48 --screen-width 800

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use raider_core::constants::*;
use raider_core::types::Screen;
use raider_patterns::library::PatternLibrary;
use raider_sim::clock::ManualClock;
use raider_sim::targets::NoTargets;
use raider_sim::EnemyAgent;

#[derive(Debug, Parser)]
#[command(name = "pattern-preview", about = "Print an enemy trajectory as JSON lines")]
struct Args {
    /// Pattern name to fly.
    #[arg(long, default_value = DEFAULT_PATTERN_NAME)]
    pattern: String,

    /// JSON pattern config (name -> parameters). Built-in patterns when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 120)]
    ticks: u32,

    /// Frame time per tick.
    #[arg(long, default_value_t = 1.0)]
    dt: f64,

    /// Spawn centre.
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH / 2.0)]
    x: f64,
    #[arg(long, default_value_t = DEFAULT_SCREEN_HEIGHT / 4.0)]
    y: f64,

    /// Enemy bounding-box size.
    #[arg(long, default_value_t = DEFAULT_AGENT_WIDTH)]
    width: f64,
    #[arg(long, default_value_t = DEFAULT_AGENT_HEIGHT)]
    height: f64,

    /// Screen size.
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
    screen_width: f64,
    #[arg(long, default_value_t = DEFAULT_SCREEN_HEIGHT)]
    screen_height: f64,
}

#[derive(Debug, Serialize)]
struct Sample {
    tick: u32,
    x: f64,
    y: f64,
    angle: f64,
    alive: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let library = match &args.config {
        Some(path) => PatternLibrary::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PatternLibrary::builtin(),
    };
    if library.get(&args.pattern).is_none() {
        tracing::warn!(pattern = %args.pattern, "pattern not in library, using defaults");
    }

    let mut agent = EnemyAgent::new(
        args.x,
        args.y,
        args.width,
        args.height,
        args.pattern.as_str(),
        Screen::new(args.screen_width, args.screen_height),
        Rc::new(library),
    )
    .with_clock(Rc::new(ManualClock::default()));
    tracing::info!(pattern = %args.pattern, kind = %agent.pattern_kind(), "previewing");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for tick in 1..=args.ticks {
        agent.update(args.dt, &NoTargets);
        let position = agent.position();
        let sample = Sample {
            tick,
            x: position.x,
            y: position.y,
            angle: agent.angle(),
            alive: agent.is_alive(),
        };
        serde_json::to_writer(&mut out, &sample)?;
        writeln!(out)?;
        if !agent.is_alive() {
            tracing::info!(tick, "enemy despawned");
            break;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_and_screen_flags_are_separate() {
        let args = Args::try_parse_from([
            "pattern-preview",
            "--width",
            "64",
            "--height",
            "48",
            "--screen-width",
            "800",
        ])
        .unwrap();
        assert_eq!((args.width, args.height), (64.0, 48.0));
        assert_eq!(args.screen_width, 800.0);
        assert_eq!(args.screen_height, DEFAULT_SCREEN_HEIGHT);

        let args = Args::try_parse_from(["pattern-preview"]).unwrap();
        assert_eq!((args.width, args.height), (DEFAULT_AGENT_WIDTH, DEFAULT_AGENT_HEIGHT));
    }
}
