//! SHATTER headless host.
//!
//! Stands in for the rendering/input collaborators: drives the simulation
//! at a fixed rate on its own thread, forwards commands over a channel,
//! and publishes the latest snapshot for polling.

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod state;

pub use error::HostError;
pub use shatter_core as core;
