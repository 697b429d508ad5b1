//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use shatter_core::components::*;
use shatter_core::enums::GamePhase;
use shatter_core::events::SimEvent;
use shatter_core::state::*;
use shatter_core::types::{Position, SimTime, Velocity};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        asteroids: build_asteroids(world),
        projectiles: build_projectiles(world),
        ship_hit: phase.ship_hit(),
        fadeout_remaining: phase.fadeout_remaining(),
        asteroids_cleared: phase.asteroids_cleared(),
        overlay: phase.overlay(),
        events,
    }
}

fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&Ship, &Position, &Velocity, &Radius)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, vel, radius))| ShipView {
            position: *pos,
            velocity: *vel,
            heading_degrees: ship.heading_degrees,
            radius: radius.0,
            intact: ship.intact,
            thrusting: ship.thrusting,
            wreck_age: ship.wreck_age,
        })
        .unwrap_or_default()
}

fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    let mut views: Vec<(SpawnOrder, AsteroidView)> = world
        .query::<(&SpawnOrder, &Asteroid, &Position, &Velocity, &Radius)>()
        .iter()
        .map(|(_, (order, asteroid, pos, vel, radius))| {
            (
                *order,
                AsteroidView {
                    position: *pos,
                    velocity: *vel,
                    radius: radius.0,
                    size: asteroid.size,
                },
            )
        })
        .collect();

    views.sort_by_key(|(order, _)| *order);
    views.into_iter().map(|(_, v)| v).collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<(SpawnOrder, ProjectileView)> = world
        .query::<(&SpawnOrder, &Projectile, &Position, &Radius)>()
        .iter()
        .map(|(_, (order, projectile, pos, radius))| {
            (
                *order,
                ProjectileView {
                    position: *pos,
                    radius: radius.0,
                    lifespan: projectile.lifespan,
                },
            )
        })
        .collect();

    views.sort_by_key(|(order, _)| *order);
    views.into_iter().map(|(_, v)| v).collect()
}
