//! Ship control: the command vocabulary and per-tick thrust.

use hecs::World;

use shatter_core::components::Ship;
use shatter_core::config::SimConfig;
use shatter_core::enums::ShipCommand;
use shatter_core::types::Velocity;

/// Result of forwarding one command to the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    Applied,
    Ignored,
    /// The ship wants a projectile fired from its position and heading.
    Fire,
}

/// Apply `command` to `ship`. A destroyed ship only accepts `RespawnTick`.
pub fn apply(ship: &mut Ship, command: ShipCommand, turn_step_degrees: f64) -> ControlOutcome {
    if !ship.intact {
        if command == ShipCommand::RespawnTick {
            ship.wreck_age = ship.wreck_age.saturating_add(1);
            return ControlOutcome::Applied;
        }
        return ControlOutcome::Ignored;
    }

    match command {
        ShipCommand::ThrustStart => ship.thrusting = true,
        ShipCommand::ThrustStop => ship.thrusting = false,
        ShipCommand::TurnLeft => {
            ship.heading_degrees = normalize_heading(ship.heading_degrees - turn_step_degrees)
        }
        ShipCommand::TurnRight => {
            ship.heading_degrees = normalize_heading(ship.heading_degrees + turn_step_degrees)
        }
        ShipCommand::Fire => return ControlOutcome::Fire,
        ShipCommand::RespawnTick => return ControlOutcome::Ignored,
    }
    ControlOutcome::Applied
}

/// Wrap a heading into [0, 360).
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Accelerate a thrusting, intact ship along its heading.
pub fn apply_thrust(world: &mut World, config: &SimConfig) {
    for (_entity, (ship, vel)) in world.query_mut::<(&Ship, &mut Velocity)>() {
        if !(ship.intact && ship.thrusting) {
            continue;
        }
        let push = Velocity::from_heading_degrees(ship.heading_degrees).as_dvec2() * config.thrust_accel;
        *vel = Velocity::from(vel.as_dvec2() + push).clamped(config.max_ship_speed);
    }
}
