//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space (pixels).
/// x grows to the right, y grows downward (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world space (pixels per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Move by one tick of `vel`, then wrap each axis independently into
    /// `[0, width)` / `[0, height)`.
    pub fn advanced(&self, vel: &Velocity, width: f64, height: f64) -> Position {
        let moved = self.as_dvec2() + vel.as_dvec2();
        let wrapped = moved.rem_euclid(DVec2::new(width, height));
        // rem_euclid can round a tiny negative up to exactly the bound.
        Position::new(clamp_below(wrapped.x, width), clamp_below(wrapped.y, height))
    }
}

fn clamp_below(value: f64, bound: f64) -> f64 {
    if value >= bound {
        0.0
    } else {
        value
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Unit velocity for a heading in degrees: 0 = up, increasing clockwise.
    pub fn from_heading_degrees(heading_degrees: f64) -> Self {
        let radians = heading_degrees.to_radians();
        Self::new(radians.sin(), -radians.cos())
    }

    /// Speed magnitude (pixels per tick).
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    /// Same direction, magnitude clamped to `max`.
    pub fn clamped(&self, max: f64) -> Velocity {
        self.as_dvec2().clamp_length_max(max).into()
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
