//! Brownian Robot entry point
//!
//! Loads settings, builds the simulation and runs the paced loop on a
//! terminal or headless surface.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;

use brownian_robot::Simulation;
use brownian_robot::platform::{
    FrameClock, InterruptQuit, ManualClock, QuitSignal, SleepClock, TickLimit,
};
use brownian_robot::renderer::{AsciiSurface, LogSurface, RenderSurface};
use brownian_robot::settings::{Preset, Settings};

#[derive(Debug, Parser)]
#[command(name = "brownian-robot", about = "A robot bumping around a rectangular arena")]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in preset used when no config file is given
    #[arg(long, default_value = "default", value_parser = parse_preset)]
    preset: Preset,

    /// RNG seed (defaults to current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Quit after this many ticks (Ctrl-C always quits)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    ticks: Option<u64>,

    /// Override the target tick rate
    #[arg(long)]
    fps: Option<u32>,

    /// Run as fast as possible instead of pacing to the tick rate
    #[arg(long)]
    unpaced: bool,

    /// Render to the terminal every N ticks (0 = log-only)
    #[arg(long, default_value_t = 0)]
    ascii_every: u64,

    /// Terminal frame width in characters
    #[arg(long, default_value_t = 90)]
    ascii_cols: usize,
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    Preset::from_str(s).ok_or_else(|| format!("unknown preset `{s}` (expected default or night)"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => {
            log::info!("Using {} preset", args.preset.as_str());
            Settings::from_preset(args.preset)
        }
    };
    if let Some(fps) = args.fps {
        settings.tick_rate = fps;
    }
    settings.validate().context("invalid settings")?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_else(|e| {
                log::warn!("System clock before epoch ({}), using seed 0", e);
                0
            })
    });

    log::info!(
        "{} ({}x{} @ {} ticks/s)",
        settings.caption,
        settings.arena_size.0,
        settings.arena_size.1,
        settings.tick_rate
    );

    let mut sim = Simulation::new(&settings, seed);
    let interrupt = InterruptQuit::install().context("installing Ctrl-C handler")?;
    let mut quit: Box<dyn QuitSignal> = match args.ticks {
        Some(n) => Box::new((interrupt, TickLimit::new(n))),
        None => Box::new(interrupt),
    };
    let mut clock: Box<dyn FrameClock> = if args.unpaced {
        Box::new(ManualClock::new(settings.tick_rate))
    } else {
        Box::new(SleepClock::new(settings.tick_rate))
    };
    let mut surface: Box<dyn RenderSurface> = if args.ascii_every > 0 {
        Box::new(AsciiSurface::new(
            std::io::stdout(),
            settings.arena_size,
            args.ascii_cols,
            args.ascii_every,
        ))
    } else {
        Box::new(LogSurface::new())
    };

    sim.run(surface.as_mut(), clock.as_mut(), quit.as_mut());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_must_be_positive() {
        assert!(Args::try_parse_from(["brownian-robot", "--ticks", "0"]).is_err());

        let args = Args::try_parse_from(["brownian-robot", "--ticks", "1"]).unwrap();
        assert_eq!(args.ticks, Some(1));
    }

    #[test]
    fn test_defaults_run_until_interrupted() {
        let args = Args::try_parse_from(["brownian-robot"]).unwrap();
        assert_eq!(args.ticks, None);
        assert_eq!(args.preset, Preset::Default);
        assert!(!args.unpaced);
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(Args::try_parse_from(["brownian-robot", "--preset", "sunrise"]).is_err());
    }
}
