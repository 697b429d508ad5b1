//! Headless driver: `shatter-headless [config.json] [ticks] [--realtime]`.
//!
//! Runs the autopilot against a fresh session and prints one JSON snapshot
//! per tick, then a summary line. With `--realtime` the session runs on the
//! fixed-rate game loop thread instead of as fast as possible.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use shatter_host::autopilot;
use shatter_host::config::load_config;
use shatter_host::core::config::SimConfig;
use shatter_host::core::state::GameStateSnapshot;
use shatter_host::game_loop::spawn_with_fresh_snapshot;
use shatter_host::state::{share, tick_shared};
use shatter_host::HostError;
use shatter_sim::SimulationEngine;

const DEFAULT_TICKS: u64 = 600;

/// How long the realtime driver waits for the game loop to produce a tick.
const STALL_TIMEOUT: Duration = Duration::from_secs(2);

struct Args {
    config: Option<PathBuf>,
    ticks: u64,
    realtime: bool,
}

fn parse_args() -> Result<Args, HostError> {
    let mut args = Args {
        config: None,
        ticks: DEFAULT_TICKS,
        realtime: false,
    };
    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            args.realtime = true;
            continue;
        }
        match positional {
            0 => args.config = Some(PathBuf::from(arg)),
            1 => args.ticks = arg.parse().map_err(|_| HostError::InvalidTicks(arg.clone()))?,
            _ => log::warn!("ignoring extra argument {arg:?}"),
        }
        positional += 1;
    }
    Ok(args)
}

fn print_snapshot(snapshot: &GameStateSnapshot) -> Result<(), HostError> {
    println!("{}", serde_json::to_string(snapshot)?);
    Ok(())
}

fn print_summary(snapshot: &GameStateSnapshot) -> Result<(), HostError> {
    let summary = serde_json::json!({
        "ticks": snapshot.time.tick,
        "phase": snapshot.phase,
        "asteroids": snapshot.asteroids.len(),
        "projectiles": snapshot.projectiles.len(),
        "overlay": snapshot.overlay.message(),
    });
    println!("{summary}");
    Ok(())
}

fn run_stepped(engine: SimulationEngine, ticks: u64) -> Result<GameStateSnapshot, HostError> {
    let turn_step = engine.config().turn_step_degrees;
    let engine = share(engine);
    let mut snapshot = engine.lock().map_err(|_| HostError::Poisoned)?.snapshot();
    for _ in 0..ticks {
        snapshot = tick_shared(&engine, autopilot::plan(&snapshot, turn_step))?;
        print_snapshot(&snapshot)?;
    }
    Ok(snapshot)
}

fn run_realtime(engine: SimulationEngine, ticks: u64) -> Result<GameStateSnapshot, HostError> {
    let turn_step = engine.config().turn_step_degrees;
    let engine = share(engine);
    let (handle, latest_snapshot) = spawn_with_fresh_snapshot(Arc::clone(&engine))?;

    let mut last_seen = 0;
    let mut current = None;
    while last_seen < ticks {
        let snapshot = match handle.wait_for_tick(&latest_snapshot, last_seen, STALL_TIMEOUT) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let _ = handle.shutdown();
                return Err(err);
            }
        };
        last_seen = snapshot.time.tick;
        print_snapshot(&snapshot)?;
        for command in autopilot::plan(&snapshot, turn_step) {
            handle.send(command)?;
        }
        current = Some(snapshot);
    }
    handle.shutdown()?;

    match current {
        Some(snapshot) => Ok(snapshot),
        None => Ok(engine.lock().map_err(|_| HostError::Poisoned)?.snapshot()),
    }
}

fn run() -> Result<(), HostError> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    let engine = SimulationEngine::new(config)?;

    let last = if args.realtime {
        run_realtime(engine, args.ticks)?
    } else {
        run_stepped(engine, args.ticks)?
    };
    print_summary(&last)
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("shatter-headless: {err}");
            ExitCode::FAILURE
        }
    }
}
