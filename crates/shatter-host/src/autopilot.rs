//! Scripted pilot used by the headless binary: turns toward the nearest
//! asteroid and fires when roughly aligned.

use shatter_core::commands::PlayerCommand;
use shatter_core::enums::ShipCommand;
use shatter_core::state::GameStateSnapshot;
use shatter_sim::systems::ship_control::normalize_heading;

/// Ticks between autopilot shots.
pub const AUTOPILOT_FIRE_INTERVAL: u64 = 15;

/// Largest heading error (degrees) at which the autopilot still fires.
pub const AUTOPILOT_FIRE_CONE_DEGREES: f64 = 15.0;

/// Heading (0 = up, clockwise) pointing from `(x, y)` towards `(tx, ty)`.
pub fn heading_towards(x: f64, y: f64, tx: f64, ty: f64) -> f64 {
    normalize_heading((tx - x).atan2(-(ty - y)).to_degrees())
}

/// Signed shortest turn from `from` to `to`, in (-180, 180].
fn heading_error(from: f64, to: f64) -> f64 {
    let diff = normalize_heading(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Commands for the next tick given the latest snapshot.
pub fn plan(snapshot: &GameStateSnapshot, turn_step_degrees: f64) -> Vec<PlayerCommand> {
    let ship = &snapshot.ship;
    if !ship.intact {
        return vec![PlayerCommand::Ship {
            command: ShipCommand::RespawnTick,
        }];
    }

    let nearest = snapshot.asteroids.iter().min_by(|a, b| {
        let da = a.position.as_dvec2().distance_squared(ship.position.as_dvec2());
        let db = b.position.as_dvec2().distance_squared(ship.position.as_dvec2());
        da.total_cmp(&db)
    });
    let Some(target) = nearest else {
        return Vec::new();
    };

    let wanted = heading_towards(ship.position.x, ship.position.y, target.position.x, target.position.y);
    let error = heading_error(ship.heading_degrees, wanted);

    let mut commands = Vec::new();
    if error.abs() >= turn_step_degrees / 2.0 {
        let command = if error > 0.0 {
            ShipCommand::TurnRight
        } else {
            ShipCommand::TurnLeft
        };
        commands.push(PlayerCommand::Ship { command });
    }
    if error.abs() <= AUTOPILOT_FIRE_CONE_DEGREES && snapshot.time.tick % AUTOPILOT_FIRE_INTERVAL == 0 {
        commands.push(PlayerCommand::Ship {
            command: ShipCommand::Fire,
        });
    }
    commands
}
