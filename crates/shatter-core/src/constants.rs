//! Simulation constants and tuning defaults.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Default world width in pixels.
pub const DEFAULT_WORLD_WIDTH: f64 = 800.0;

/// Default world height in pixels.
pub const DEFAULT_WORLD_HEIGHT: f64 = 600.0;

// --- Asteroids ---

/// Bounding radius of a Large asteroid.
pub const LARGE_ASTEROID_RADIUS: f64 = 50.0;

/// Bounding radius of a Medium asteroid.
pub const MEDIUM_ASTEROID_RADIUS: f64 = 25.0;

/// Bounding radius of a Small asteroid.
pub const SMALL_ASTEROID_RADIUS: f64 = 12.0;

/// Scale applied to the impacting projectile's velocity to derive child velocities.
pub const FRAGMENT_VELOCITY_SCALAR: f64 = 0.2;

/// Per-axis speed bound for the opening Large asteroid.
pub const INITIAL_ASTEROID_MAX_SPEED: f64 = 1.0;

/// The opening asteroid never spawns within this many ship radii of the ship (per axis).
pub const SHIP_SPAWN_CLEARANCE: f64 = 4.0;

// --- Projectiles ---

/// Ticks a projectile stays in the world when it hits nothing.
pub const PROJECTILE_LIFESPAN: u32 = 60;

/// Bounding radius of a projectile.
pub const PROJECTILE_RADIUS: f64 = 2.0;

// --- Ship ---

/// Bounding radius of the ship.
pub const SHIP_RADIUS: f64 = 15.0;

/// Velocity gained per tick while thrusting.
pub const SHIP_THRUST_ACCEL: f64 = 0.1;

/// Speed cap applied after thrust.
pub const SHIP_MAX_SPEED: f64 = 5.0;

/// Heading change per turn command (degrees).
pub const SHIP_TURN_STEP_DEGREES: f64 = 5.0;

// --- Outcome ---

/// Ticks between ship destruction and the terminal message.
pub const DEFAULT_FADEOUT_TICKS: u32 = 100;

/// Default RNG seed for the opening asteroid.
pub const DEFAULT_SEED: u64 = 42;
