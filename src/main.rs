//! Cosmic Defender headless demo
//!
//! Runs the simulation on a fixed clock with the autopilot at the controls and
//! renders every frame into a recorder. Useful for soak runs and for checking
//! tuning files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cosmic_defender::Tuning;
use cosmic_defender::input::InputState;
use cosmic_defender::renderer::{FrameRecorder, Scene};
use cosmic_defender::sim::{Game, GameEvent, GamePhase, Snapshot, advance};

#[derive(Parser, Debug)]
#[command(name = "cosmic-defender")]
#[command(about = "Headless Cosmic Defender run with the autopilot flying")]
struct Cli {
    /// RNG seed for the run
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many frames if the ship is still alive
    #[arg(long, default_value_t = 36_000)]
    ticks: u64,
    /// Milliseconds per frame (16 is roughly 60 fps)
    #[arg(long, default_value_t = 16.0)]
    dt: f32,
    /// JSON tuning file overriding the stock balance
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PlayerHit { damage, health } => {
            log::info!("Player hit for {} ({} left)", damage, health)
        }
        // Already logged by the game itself
        GameEvent::PhaseChanged { .. } | GameEvent::WaveAdvanced { .. } | GameEvent::GameOver { .. } => {}
        other => log::trace!("{:?}", other),
    }
}

fn run(cli: Cli) -> Result<()> {
    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let mut game = Game::with_tuning(cli.seed, tuning);
    log::info!("Game initialized with seed: {}", cli.seed);

    let scene = Scene::new();
    let mut recorder = FrameRecorder::new();
    let mut input = InputState::new();
    input.set_idle_mode(true);
    // Leave the title screen on the first frame
    input.key_down(' ');

    let mut shots = 0u64;
    let mut kills = 0u64;
    for _ in 0..cli.ticks {
        if input.quit_requested() {
            log::info!("Quit requested");
            break;
        }

        let tick_input = input.poll(game.phase);
        advance(&mut game, &tick_input, cli.dt);

        for event in game.events() {
            match event {
                GameEvent::ShotFired { .. } => shots += 1,
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                _ => {}
            }
            log_event(event);
        }

        scene.render(&Snapshot::capture(&game), &mut recorder);

        if game.phase == GamePhase::GameOver {
            break;
        }
    }

    let frame = recorder.last_frame();
    println!("Cosmic Defender demo (seed {})", cli.seed);
    println!(
        "  frames: {}  ticks simulated: {}  phase: {}",
        recorder.frames,
        game.time_ticks,
        game.phase.as_str()
    );
    println!(
        "  shots: {}  kills: {}  on screen: {} enemies, {} projectiles, {} particles",
        shots, kills, frame.enemies, frame.projectiles, frame.particles
    );
    for line in &frame.hud_lines {
        println!("  | {line}");
    }

    if cli.snapshot {
        println!("{}", Snapshot::capture(&game).to_json()?);
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Cosmic Defender (native) starting...");

    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["cosmic-defender"]).unwrap();
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.ticks, 36_000);
        assert_eq!(cli.dt, 16.0);
        assert!(cli.tuning.is_none());
        assert!(!cli.snapshot);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "cosmic-defender",
            "--seed",
            "7",
            "--ticks",
            "10",
            "--dt",
            "33",
            "--tuning",
            "balance.json",
            "--snapshot",
        ])
        .unwrap();
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.ticks, 10);
        assert_eq!(cli.dt, 33.0);
        assert_eq!(cli.tuning, Some(PathBuf::from("balance.json")));
        assert!(cli.snapshot);
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["cosmic-defender", "--seed"]).is_err());
        assert!(Cli::try_parse_from(["cosmic-defender", "--seed", "abc"]).is_err());
        assert!(Cli::try_parse_from(["cosmic-defender", "--fast"]).is_err());
    }

    #[test]
    fn test_run_stops_at_tick_limit() {
        let cli = Cli::try_parse_from(["cosmic-defender", "--ticks", "5"]).unwrap();
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_run_reports_bad_tuning_path() {
        let cli = Cli::try_parse_from([
            "cosmic-defender",
            "--tuning",
            "/nonexistent/cosmic-defender/tuning.json",
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("loading tuning"));
    }
}
