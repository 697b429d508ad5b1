//! State shared between the game loop thread and its callers.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use shatter_core::commands::PlayerCommand;
use shatter_core::state::GameStateSnapshot;
use shatter_sim::SimulationEngine;

use crate::error::HostError;

/// The engine behind the single mutex that guards a whole tick.
pub type SharedEngine = Arc<Mutex<SimulationEngine>>;

/// Latest published snapshot, `None` until the first tick completes.
pub type LatestSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn share(engine: SimulationEngine) -> SharedEngine {
    Arc::new(Mutex::new(engine))
}

/// Commands sent from callers to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Queue `commands`, run one tick and return the resulting snapshot, all
/// under one lock.
pub fn tick_shared(
    engine: &SharedEngine,
    commands: impl IntoIterator<Item = PlayerCommand>,
) -> Result<GameStateSnapshot, HostError> {
    let mut engine = engine.lock().map_err(|_| HostError::Poisoned)?;
    engine.queue_commands(commands);
    engine.tick();
    Ok(engine.snapshot())
}

/// Read the latest snapshot without touching the engine.
pub fn latest(snapshot: &LatestSnapshot) -> Result<Option<GameStateSnapshot>, HostError> {
    let lock = snapshot.lock().map_err(|_| HostError::Poisoned)?;
    Ok(lock.clone())
}

/// Sender half wrapped for callers that only speak in player commands.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<GameLoopCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::Sender<GameLoopCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: PlayerCommand) -> Result<(), HostError> {
        self.tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| HostError::Disconnected)
    }

    pub fn shutdown(&self) -> Result<(), HostError> {
        self.tx
            .send(GameLoopCommand::Shutdown)
            .map_err(|_| HostError::Disconnected)
    }
}
