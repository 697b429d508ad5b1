//! Impact resolution: applies projectile/asteroid hits as a single batch.
//!
//! All hits index into the same pre-resolution [`CollisionFrame`]. Removals
//! are collected into the despawn buffer and fragments into a spawn list;
//! the world is only touched after every hit has been examined.

use std::collections::HashSet;

use hecs::{Entity, World};

use shatter_core::config::SimConfig;
use shatter_core::events::SimEvent;

use crate::systems::collision::CollisionFrame;
use crate::systems::fragmentation::{self, Fragment};
use crate::world_setup;

/// What a batch of hits did to the world.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Asteroids removed this tick.
    pub shattered: HashSet<Entity>,
    /// Projectiles removed this tick.
    pub spent: HashSet<Entity>,
    /// Fragments spawned in place of the shattered asteroids.
    pub fragments_spawned: usize,
}

/// Resolve `hits` in order. Each asteroid shatters at most once, using the
/// velocity of the first projectile reported against it. Every projectile
/// that touched an asteroid is removed.
pub fn run(
    world: &mut World,
    frame: &CollisionFrame,
    hits: &[(usize, usize)],
    config: &SimConfig,
    spawn_counter: &mut u64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> Resolution {
    despawn_buffer.clear();
    let mut resolution = Resolution::default();
    let mut fragments: Vec<Fragment> = Vec::new();

    for &(p, a) in hits {
        let projectile = &frame.projectiles[p];
        let asteroid = &frame.asteroids[a];

        if resolution.spent.insert(projectile.entity) {
            despawn_buffer.push(projectile.entity);
        }
        if !resolution.shattered.insert(asteroid.entity) {
            continue;
        }
        despawn_buffer.push(asteroid.entity);

        let children = fragmentation::resolve(asteroid.size, asteroid.body.position, projectile.velocity);
        log::debug!(
            "{:?} asteroid shattered at ({:.1}, {:.1}) into {} fragments",
            asteroid.size,
            asteroid.body.position.x,
            asteroid.body.position.y,
            children.len()
        );
        events.push(SimEvent::AsteroidShattered {
            size: asteroid.size,
            x: asteroid.body.position.x,
            y: asteroid.body.position.y,
            children: children.len(),
        });
        fragments.extend(children);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    resolution.fragments_spawned = fragments.len();
    for fragment in fragments {
        world_setup::spawn_asteroid(
            world,
            spawn_counter,
            config,
            fragment.size,
            fragment.position,
            fragment.velocity,
        );
    }

    resolution
}
