//! Entity spawn factories for setting up the simulation world.
//!
//! Every spawn takes the engine's spawn counter so that each entity gets a
//! unique, increasing [`SpawnOrder`].

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use shatter_core::components::*;
use shatter_core::config::SimConfig;
use shatter_core::constants::SHIP_SPAWN_CLEARANCE;
use shatter_core::enums::AsteroidSize;
use shatter_core::types::{Position, Velocity};

/// Attempts at finding a clear spot for the opening asteroid before
/// falling back to the point opposite the ship.
const MAX_SPAWN_ATTEMPTS: usize = 32;

fn next_order(counter: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*counter);
    *counter += 1;
    order
}

/// Spawn the player's ship at the centre of the world, facing up, at rest.
pub fn spawn_ship(world: &mut World, counter: &mut u64, config: &SimConfig) -> Entity {
    world.spawn((
        next_order(counter),
        Ship::default(),
        Position::new(config.world_width / 2.0, config.world_height / 2.0),
        Velocity::default(),
        Radius(config.ship_radius),
    ))
}

pub fn spawn_asteroid(
    world: &mut World,
    counter: &mut u64,
    config: &SimConfig,
    size: AsteroidSize,
    position: Position,
    velocity: Velocity,
) -> Entity {
    world.spawn((
        next_order(counter),
        Asteroid { size },
        position,
        velocity,
        Radius(config.asteroid_radius(size)),
    ))
}

pub fn spawn_projectile(
    world: &mut World,
    counter: &mut u64,
    config: &SimConfig,
    position: Position,
    velocity: Velocity,
) -> Entity {
    world.spawn((
        next_order(counter),
        Projectile {
            lifespan: config.projectile_lifespan,
        },
        position,
        velocity,
        Radius(config.projectile_radius),
    ))
}

/// Spawn the single Large asteroid a session opens with, somewhere the
/// ship is not.
pub fn spawn_opening_asteroid(
    world: &mut World,
    counter: &mut u64,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
    ship_position: Position,
) -> Entity {
    let clearance = config.asteroid_radii.large + config.ship_radius * SHIP_SPAWN_CLEARANCE;
    let mut position = None;
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Position::new(
            rng.gen_range(0.0..config.world_width),
            rng.gen_range(0.0..config.world_height),
        );
        let clear = (candidate.x - ship_position.x).abs() >= clearance
            || (candidate.y - ship_position.y).abs() >= clearance;
        if clear {
            position = Some(candidate);
            break;
        }
    }
    let position = position.unwrap_or_else(|| {
        let half = Velocity::new(config.world_width / 2.0, config.world_height / 2.0);
        ship_position.advanced(&half, config.world_width, config.world_height)
    });

    let max = config.initial_asteroid_max_speed;
    let velocity = Velocity::new(rng.gen_range(-max..=max), rng.gen_range(-max..=max));

    log::debug!(
        "opening asteroid at ({:.1}, {:.1}) moving ({:.2}, {:.2})",
        position.x,
        position.y,
        velocity.x,
        velocity.y
    );
    spawn_asteroid(world, counter, config, AsteroidSize::Large, position, velocity)
}
