//! Simulation configuration, supplied once at engine construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::AsteroidSize;

/// Bounding radius per asteroid size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidRadii {
    pub large: f64,
    pub medium: f64,
    pub small: f64,
}

impl Default for AsteroidRadii {
    fn default() -> Self {
        Self {
            large: LARGE_ASTEROID_RADIUS,
            medium: MEDIUM_ASTEROID_RADIUS,
            small: SMALL_ASTEROID_RADIUS,
        }
    }
}

impl AsteroidRadii {
    pub fn radius_of(&self, size: AsteroidSize) -> f64 {
        match size {
            AsteroidSize::Large => self.large,
            AsteroidSize::Medium => self.medium,
            AsteroidSize::Small => self.small,
        }
    }
}

/// Immutable simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world_width: f64,
    pub world_height: f64,
    /// Ticks between ship destruction and the terminal message.
    pub fadeout_ticks: u32,
    /// Ticks a projectile lives when it hits nothing.
    pub projectile_lifespan: u32,
    pub projectile_radius: f64,
    pub ship_radius: f64,
    pub asteroid_radii: AsteroidRadii,
    pub thrust_accel: f64,
    pub max_ship_speed: f64,
    pub turn_step_degrees: f64,
    pub initial_asteroid_max_speed: f64,
    /// RNG seed for the opening asteroid. Same seed = same session.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            fadeout_ticks: DEFAULT_FADEOUT_TICKS,
            projectile_lifespan: PROJECTILE_LIFESPAN,
            projectile_radius: PROJECTILE_RADIUS,
            ship_radius: SHIP_RADIUS,
            asteroid_radii: AsteroidRadii::default(),
            thrust_accel: SHIP_THRUST_ACCEL,
            max_ship_speed: SHIP_MAX_SPEED,
            turn_step_degrees: SHIP_TURN_STEP_DEGREES,
            initial_asteroid_max_speed: INITIAL_ASTEROID_MAX_SPEED,
            seed: DEFAULT_SEED,
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("world dimensions must be finite and positive (got {width} x {height})")]
    WorldBounds { width: f64, height: f64 },
    #[error("projectile lifespan must be at least one tick")]
    ZeroLifespan,
    #[error("{name} must be finite and positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("asteroid radii must strictly decrease large > medium > small ({large} / {medium} / {small})")]
    RadiusOrder { large: f64, medium: f64, small: f64 },
    #[error("{name} must be finite and non-negative (got {value})")]
    Negative { name: &'static str, value: f64 },
}

impl SimConfig {
    /// Check every parameter the tick relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims_ok = |v: f64| v.is_finite() && v > 0.0;
        if !dims_ok(self.world_width) || !dims_ok(self.world_height) {
            return Err(ConfigError::WorldBounds {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if self.projectile_lifespan == 0 {
            return Err(ConfigError::ZeroLifespan);
        }

        let radii = &self.asteroid_radii;
        for (name, value) in [
            ("projectile_radius", self.projectile_radius),
            ("ship_radius", self.ship_radius),
            ("asteroid_radii.large", radii.large),
            ("asteroid_radii.medium", radii.medium),
            ("asteroid_radii.small", radii.small),
        ] {
            if !dims_ok(value) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(radii.large > radii.medium && radii.medium > radii.small) {
            return Err(ConfigError::RadiusOrder {
                large: radii.large,
                medium: radii.medium,
                small: radii.small,
            });
        }

        for (name, value) in [
            ("thrust_accel", self.thrust_accel),
            ("max_ship_speed", self.max_ship_speed),
            ("turn_step_degrees", self.turn_step_degrees),
            ("initial_asteroid_max_speed", self.initial_asteroid_max_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }

    pub fn asteroid_radius(&self, size: AsteroidSize) -> f64 {
        self.asteroid_radii.radius_of(size)
    }
}
