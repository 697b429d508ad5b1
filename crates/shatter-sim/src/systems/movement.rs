//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick (one velocity step per tick),
//! wrapping toroidally at the world bounds.

use hecs::World;

use shatter_core::components::Ship;
use shatter_core::types::{Position, Velocity};

/// Advance every moving entity. A destroyed ship stays where it is.
pub fn run(world: &mut World, width: f64, height: f64) {
    for (_entity, (pos, vel, ship)) in
        world.query_mut::<(&mut Position, &Velocity, Option<&Ship>)>()
    {
        if ship.is_some_and(|s| !s.intact) {
            continue;
        }
        *pos = pos.advanced(vel, width, height);
    }
}
