//! Projectile lifespan system: counts projectiles down and removes the expired.

use hecs::{Entity, World};

use shatter_core::components::Projectile;
use shatter_core::events::SimEvent;

/// Decrement every projectile's lifespan once and remove each one that hits
/// zero. Returns the number removed.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) -> usize {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.lifespan = projectile.lifespan.saturating_sub(1);
        if projectile.lifespan == 0 {
            despawn_buffer.push(entity);
        }
    }

    let expired = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        events.push(SimEvent::ProjectileExpired);
    }
    if expired > 0 {
        log::debug!("{expired} projectile(s) expired");
    }
    expired
}
