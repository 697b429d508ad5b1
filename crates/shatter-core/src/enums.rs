//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Asteroid size class. Radius strictly decreases Large > Medium > Small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    pub const ALL: [AsteroidSize; 3] = [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small];

    /// Size of the fragments this asteroid breaks into, if any.
    pub fn fragment_size(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    /// Number of fragments produced when this asteroid is hit.
    pub fn fragment_count(self) -> usize {
        match self {
            AsteroidSize::Large => 2,
            AsteroidSize::Medium => 3,
            AsteroidSize::Small => 0,
        }
    }
}

/// Top-level game state. Transitions are one-way out of `Playing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GamePhase {
    #[default]
    Playing,
    /// Ship hit an asteroid; counting down before the terminal message.
    ShipDestroyed { fadeout_remaining: u32 },
    /// Every asteroid has been shot down.
    AsteroidsCleared,
}

impl GamePhase {
    pub fn is_playing(self) -> bool {
        self == GamePhase::Playing
    }

    pub fn ship_hit(self) -> bool {
        matches!(self, GamePhase::ShipDestroyed { .. })
    }

    pub fn asteroids_cleared(self) -> bool {
        self == GamePhase::AsteroidsCleared
    }

    /// Remaining fadeout ticks; zero outside `ShipDestroyed`.
    pub fn fadeout_remaining(self) -> u32 {
        match self {
            GamePhase::ShipDestroyed { fadeout_remaining } => fadeout_remaining,
            _ => 0,
        }
    }

    /// Which overlay the renderer should draw for this phase.
    pub fn overlay(self) -> Overlay {
        match self {
            GamePhase::Playing => Overlay::None,
            GamePhase::ShipDestroyed {
                fadeout_remaining: 0,
            } => Overlay::ShipHit,
            GamePhase::ShipDestroyed { .. } => Overlay::None,
            GamePhase::AsteroidsCleared => Overlay::AsteroidsCleared,
        }
    }
}

/// Terminal overlay text selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    None,
    ShipHit,
    AsteroidsCleared,
}

impl Overlay {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Overlay::None => None,
            Overlay::ShipHit => Some("YOU HIT AN ASTEROID"),
            Overlay::AsteroidsCleared => Some("YOU DESTROYED THE ASTEROIDS!!!"),
        }
    }
}

/// Discrete control commands forwarded to the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipCommand {
    ThrustStart,
    ThrustStop,
    /// Rotate counter-clockwise by one turn step.
    TurnLeft,
    /// Rotate clockwise by one turn step.
    TurnRight,
    /// Fire one projectile from the ship's position along its heading.
    Fire,
    /// Advance the wreck animation of a destroyed ship. Ignored while intact.
    RespawnTick,
}
