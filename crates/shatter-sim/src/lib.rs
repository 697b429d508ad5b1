//! Simulation engine for SHATTER.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use shatter_core as core;

#[cfg(test)]
mod tests;
