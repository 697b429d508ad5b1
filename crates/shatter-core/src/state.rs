//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: ShipView,
    /// Live asteroids in spawn order.
    pub asteroids: Vec<AsteroidView>,
    /// Live projectiles in spawn order.
    pub projectiles: Vec<ProjectileView>,
    pub ship_hit: bool,
    pub fadeout_remaining: u32,
    pub asteroids_cleared: bool,
    pub overlay: Overlay,
    /// Events emitted since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// An asteroid as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    pub size: AsteroidSize,
}

/// A projectile as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub radius: f64,
    pub lifespan: u32,
}

/// Ship status for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub velocity: Velocity,
    /// Degrees, 0 = up, increasing clockwise.
    pub heading_degrees: f64,
    pub radius: f64,
    pub intact: bool,
    pub thrusting: bool,
    pub wreck_age: u32,
}
