//! Collision detection between projectiles, asteroids and the ship.
//!
//! Overlap is an axis-aligned box test: two bodies touch when both
//! `|dx|` and `|dy|` are below the larger of their radii. The square reaches
//! further than a circle test along the diagonals.
//!
//! Detection runs against a [`CollisionFrame`], an immutable snapshot of the
//! world taken before any removal, so reported indices stay valid while the
//! hits are being resolved.

use hecs::{Entity, World};

use shatter_core::components::{Asteroid, Projectile, Radius, Ship, SpawnOrder};
use shatter_core::enums::AsteroidSize;
use shatter_core::types::{Position, Velocity};

/// Position and bounding radius of anything that can collide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Position,
    pub radius: f64,
}

impl Body {
    pub fn new(position: Position, radius: f64) -> Self {
        Self { position, radius }
    }
}

/// Per-axis bounding-box overlap.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let reach = a.radius.max(b.radius);
    (a.position.x - b.position.x).abs() < reach && (a.position.y - b.position.y).abs() < reach
}

/// Every overlapping `(projectile_index, asteroid_index)` pair,
/// projectile-major in input order.
pub fn find_projectile_asteroid_hits(projectiles: &[Body], asteroids: &[Body]) -> Vec<(usize, usize)> {
    let mut hits = Vec::new();
    for (p, projectile) in projectiles.iter().enumerate() {
        for (a, asteroid) in asteroids.iter().enumerate() {
            if overlaps(projectile, asteroid) {
                hits.push((p, a));
            }
        }
    }
    hits
}

/// First asteroid overlapping the ship. A destroyed ship never collides.
pub fn find_ship_asteroid_hit(ship: &Body, intact: bool, asteroids: &[Body]) -> Option<usize> {
    if !intact {
        return None;
    }
    asteroids.iter().position(|asteroid| overlaps(ship, asteroid))
}

#[derive(Debug, Clone, Copy)]
pub struct AsteroidEntry {
    pub entity: Entity,
    pub body: Body,
    pub velocity: Velocity,
    pub size: AsteroidSize,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectileEntry {
    pub entity: Entity,
    pub body: Body,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, Copy)]
pub struct ShipEntry {
    pub entity: Entity,
    pub body: Body,
    pub intact: bool,
}

/// Snapshot of every collidable entity, sorted by spawn order.
#[derive(Debug, Clone, Default)]
pub struct CollisionFrame {
    pub asteroids: Vec<AsteroidEntry>,
    pub projectiles: Vec<ProjectileEntry>,
    pub ship: Option<ShipEntry>,
}

impl CollisionFrame {
    /// Capture the current world state.
    pub fn gather(world: &World) -> Self {
        let mut asteroids: Vec<(SpawnOrder, AsteroidEntry)> = world
            .query::<(&SpawnOrder, &Position, &Velocity, &Radius, &Asteroid)>()
            .iter()
            .map(|(entity, (order, pos, vel, radius, asteroid))| {
                (
                    *order,
                    AsteroidEntry {
                        entity,
                        body: Body::new(*pos, radius.0),
                        velocity: *vel,
                        size: asteroid.size,
                    },
                )
            })
            .collect();
        asteroids.sort_by_key(|(order, _)| *order);

        let mut projectiles: Vec<(SpawnOrder, ProjectileEntry)> = world
            .query::<(&SpawnOrder, &Position, &Velocity, &Radius, &Projectile)>()
            .iter()
            .map(|(entity, (order, pos, vel, radius, _projectile))| {
                (
                    *order,
                    ProjectileEntry {
                        entity,
                        body: Body::new(*pos, radius.0),
                        velocity: *vel,
                    },
                )
            })
            .collect();
        projectiles.sort_by_key(|(order, _)| *order);

        let ship = world
            .query::<(&Position, &Radius, &Ship)>()
            .iter()
            .next()
            .map(|(entity, (pos, radius, ship))| ShipEntry {
                entity,
                body: Body::new(*pos, radius.0),
                intact: ship.intact,
            });

        Self {
            asteroids: asteroids.into_iter().map(|(_, a)| a).collect(),
            projectiles: projectiles.into_iter().map(|(_, p)| p).collect(),
            ship,
        }
    }

    pub fn asteroid_bodies(&self) -> Vec<Body> {
        self.asteroids.iter().map(|a| a.body).collect()
    }

    pub fn projectile_bodies(&self) -> Vec<Body> {
        self.projectiles.iter().map(|p| p.body).collect()
    }

    /// Projectile/asteroid pairs, indexing into this frame.
    pub fn projectile_hits(&self) -> Vec<(usize, usize)> {
        find_projectile_asteroid_hits(&self.projectile_bodies(), &self.asteroid_bodies())
    }

    /// The first asteroid in this frame the ship is touching.
    pub fn ship_contact(&self) -> Option<&AsteroidEntry> {
        let ship = self.ship.as_ref()?;
        find_ship_asteroid_hit(&ship.body, ship.intact, &self.asteroid_bodies()).map(|i| &self.asteroids[i])
    }
}
