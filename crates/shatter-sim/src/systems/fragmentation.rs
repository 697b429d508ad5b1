//! Fragmentation rule: what a struck asteroid breaks into.
//!
//! Children spawn at the parent's exact position. With the impacting
//! projectile travelling at `(vx, vy)` and `s = FRAGMENT_VELOCITY_SCALAR`:
//!
//! | hit    | children   | velocities                                   |
//! |--------|------------|----------------------------------------------|
//! | Large  | 2 x Medium | `(vy*s, -vx*s)`, `(-vy*s, vx*s)`             |
//! | Medium | 3 x Small  | `(vy*s, -vx*s)`, `(-vy*s, vx*s)`, `(vx*s, vy*s)` |
//! | Small  | none       |                                              |

use shatter_core::constants::FRAGMENT_VELOCITY_SCALAR;
use shatter_core::enums::AsteroidSize;
use shatter_core::types::{Position, Velocity};

/// A child asteroid waiting to be spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub size: AsteroidSize,
    pub position: Position,
    pub velocity: Velocity,
}

/// Children of an asteroid of `size` at `position` struck by a projectile
/// moving at `projectile_velocity`.
pub fn resolve(size: AsteroidSize, position: Position, projectile_velocity: Velocity) -> Vec<Fragment> {
    let Some(child_size) = size.fragment_size() else {
        return Vec::new();
    };

    let s = FRAGMENT_VELOCITY_SCALAR;
    let (vx, vy) = (projectile_velocity.x, projectile_velocity.y);

    let mut velocities = vec![Velocity::new(vy * s, -vx * s), Velocity::new(-vy * s, vx * s)];
    if size == AsteroidSize::Medium {
        velocities.push(Velocity::new(vx * s, vy * s));
    }
    debug_assert_eq!(velocities.len(), size.fragment_count());

    velocities
        .into_iter()
        .map(|velocity| Fragment {
            size: child_size,
            position,
            velocity,
        })
        .collect()
}
