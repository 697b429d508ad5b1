//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::AsteroidSize;

/// Bounding radius used by the box-overlap collision test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radius(pub f64);

/// Monotonic spawn sequence number. Snapshots are sorted by it so that
/// iteration order never depends on ECS storage layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// Marks an entity as an asteroid of the given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub size: AsteroidSize,
}

/// Marks an entity as a player-fired projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Ticks left before automatic removal.
    pub lifespan: u32,
}

/// The player's ship. Exactly one per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// False once the ship has collided with an asteroid. Never reverts.
    pub intact: bool,
    /// Degrees, 0 = up, increasing clockwise, kept in [0, 360).
    pub heading_degrees: f64,
    /// Thrust is held on.
    pub thrusting: bool,
    /// Wreck animation counter, advanced by `ShipCommand::RespawnTick`.
    pub wreck_age: u32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            intact: true,
            heading_degrees: 0.0,
            thrusting: false,
            wreck_age: 0,
        }
    }
}
