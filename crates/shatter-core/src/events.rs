//! Events emitted by the simulation for audio and render feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AsteroidSize;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A projectile entered the world.
    ProjectileFired { x: f64, y: f64 },
    /// An asteroid was hit and replaced by `children` fragments.
    AsteroidShattered {
        size: AsteroidSize,
        x: f64,
        y: f64,
        children: usize,
    },
    /// A projectile ran out of lifespan without hitting anything.
    ProjectileExpired,
    /// The ship collided with an asteroid.
    ShipDestroyed { x: f64, y: f64 },
    /// The last asteroid was destroyed.
    AsteroidsCleared,
    /// The post-destruction fadeout finished; the terminal message is due.
    FadeoutComplete,
}
