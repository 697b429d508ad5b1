//! Game loop thread: runs the simulation engine at a fixed rate and
//! publishes snapshots.
//!
//! Commands arrive via an `mpsc` channel and are drained before every tick.
//! The latest snapshot is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use shatter_core::commands::PlayerCommand;
use shatter_core::constants::TICK_RATE;
use shatter_core::state::GameStateSnapshot;

use crate::error::HostError;
use crate::state::{CommandSender, GameLoopCommand, LatestSnapshot, SharedEngine};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// A running game loop thread.
pub struct GameLoopHandle {
    sender: CommandSender,
    thread: JoinHandle<u64>,
}

impl GameLoopHandle {
    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    /// Forward a player command to the next tick.
    pub fn send(&self, command: PlayerCommand) -> Result<(), HostError> {
        self.sender.send(command)
    }

    /// Whether the loop thread is still alive.
    pub fn is_running(&self) -> bool {
        !self.thread.is_finished()
    }

    /// Block until a snapshot newer than `after_tick` is published.
    ///
    /// Fails with `Disconnected` if the loop thread has exited, or `Stalled`
    /// if nothing new arrives within `timeout`.
    pub fn wait_for_tick(
        &self,
        latest_snapshot: &LatestSnapshot,
        after_tick: u64,
        timeout: Duration,
    ) -> Result<GameStateSnapshot, HostError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(snapshot) = crate::state::latest(latest_snapshot)? {
                if snapshot.time.tick > after_tick {
                    return Ok(snapshot);
                }
            }
            if !self.is_running() {
                return Err(HostError::Disconnected);
            }
            if Instant::now() >= deadline {
                return Err(HostError::Stalled(timeout));
            }
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    /// Stop the loop and wait for it. Returns the number of ticks run.
    pub fn shutdown(self) -> Result<u64, HostError> {
        // The loop may already have exited on a poisoned lock.
        let _ = self.sender.shutdown();
        self.thread.join().map_err(|_| HostError::Poisoned)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    engine: SharedEngine,
    latest_snapshot: LatestSnapshot,
) -> Result<GameLoopHandle, HostError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("shatter-game-loop".into())
        .spawn(move || run_game_loop(&engine, cmd_rx, &latest_snapshot))?;

    Ok(GameLoopHandle {
        sender: CommandSender::new(cmd_tx),
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect or a poisoned lock.
fn run_game_loop(
    engine: &SharedEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> u64 {
    let mut next_tick_time = Instant::now();
    let mut ticks = 0;

    loop {
        // 1. Drain all pending commands
        let mut commands = Vec::new();
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => commands.push(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopping after {ticks} ticks");
                    return ticks;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        let snapshot = match crate::state::tick_shared(engine, commands) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("game loop aborted: {err}");
                return ticks;
            }
        };
        ticks += 1;

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            log::warn!("game loop fell behind by {:?}, resetting schedule", now - next_tick_time);
            next_tick_time = now;
        }
    }
}

/// Convenience for callers that don't need to keep the engine handle.
pub fn spawn_with_fresh_snapshot(engine: SharedEngine) -> Result<(GameLoopHandle, LatestSnapshot), HostError> {
    let latest: LatestSnapshot = Arc::new(Mutex::new(None));
    let handle = spawn_game_loop(engine, Arc::clone(&latest))?;
    Ok((handle, latest))
}
