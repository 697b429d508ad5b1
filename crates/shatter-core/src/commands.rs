//! Player commands sent from the host to the simulation.
//!
//! Commands are queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ShipCommand;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire a projectile from an arbitrary origin.
    Fire {
        origin_x: f64,
        origin_y: f64,
        heading_degrees: f64,
    },
    /// Forward a control command to the ship.
    Ship { command: ShipCommand },
}
