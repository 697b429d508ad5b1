//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems once per tick, and answers snapshot queries. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shatter_core::commands::PlayerCommand;
use shatter_core::components::{Asteroid, Projectile, Ship};
use shatter_core::config::{ConfigError, SimConfig};
use shatter_core::enums::{AsteroidSize, GamePhase, ShipCommand};
use shatter_core::events::SimEvent;
use shatter_core::state::GameStateSnapshot;
use shatter_core::types::{Position, SimTime, Velocity};

use crate::systems;
use crate::systems::collision::CollisionFrame;
use crate::systems::ship_control::ControlOutcome;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
///
/// Single-threaded: `tick`, `fire` and `apply_ship_control` must not overlap.
/// A multi-threaded host wraps the whole engine in one mutex.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    ship: Entity,
    time: SimTime,
    phase: GamePhase,
    next_spawn_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    /// Events raised since the end of the previous tick.
    pending_events: Vec<SimEvent>,
    /// Events raised during the most recent tick.
    last_tick_events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Standard session: the ship at the world centre and one Large asteroid
    /// somewhere clear of it.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let mut engine = Self::empty(config)?;
        let mut rng = ChaCha8Rng::seed_from_u64(engine.config.seed);
        let ship_position = engine.ship_position();
        world_setup::spawn_opening_asteroid(
            &mut engine.world,
            &mut engine.next_spawn_order,
            &engine.config,
            &mut rng,
            ship_position,
        );
        Ok(engine)
    }

    /// A world containing only the ship, for scripted scenarios.
    pub fn empty(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut next_spawn_order = 0;
        let ship = world_setup::spawn_ship(&mut world, &mut next_spawn_order, &config);
        log::info!(
            "simulation ready: {}x{} world, fadeout {} ticks, seed {}",
            config.world_width,
            config.world_height,
            config.fadeout_ticks,
            config.seed
        );

        Ok(Self {
            config,
            world,
            ship,
            time: SimTime::default(),
            phase: GamePhase::default(),
            next_spawn_order,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            pending_events: Vec::new(),
            last_tick_events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.process_commands();
        self.run_systems();
        self.time.advance();
        self.last_tick_events = std::mem::take(&mut self.pending_events);
    }

    /// Launch one projectile from `(origin_x, origin_y)` along
    /// `heading_degrees` (0 = up, clockwise) at unit speed.
    pub fn fire(&mut self, origin_x: f64, origin_y: f64, heading_degrees: f64) -> Entity {
        let velocity = Velocity::from_heading_degrees(heading_degrees);
        self.pending_events.push(SimEvent::ProjectileFired {
            x: origin_x,
            y: origin_y,
        });
        log::debug!("projectile fired from ({origin_x:.1}, {origin_y:.1}) heading {heading_degrees:.1}");
        self.spawn_projectile(Position::new(origin_x, origin_y), velocity)
    }

    /// Forward a control command to the ship.
    pub fn apply_ship_control(&mut self, command: ShipCommand) {
        let fire_from = match self
            .world
            .query_one_mut::<(&mut Ship, &Position)>(self.ship)
        {
            Ok((ship, pos)) => {
                match systems::ship_control::apply(ship, command, self.config.turn_step_degrees) {
                    ControlOutcome::Fire => Some((*pos, ship.heading_degrees)),
                    ControlOutcome::Applied | ControlOutcome::Ignored => None,
                }
            }
            Err(_) => None,
        };

        if let Some((pos, heading)) = fire_from {
            self.fire(pos.x, pos.y, heading);
        }
    }

    /// Place an asteroid directly (scripted scenarios).
    pub fn spawn_asteroid(&mut self, size: AsteroidSize, position: Position, velocity: Velocity) -> Entity {
        world_setup::spawn_asteroid(
            &mut self.world,
            &mut self.next_spawn_order,
            &self.config,
            size,
            position,
            velocity,
        )
    }

    /// Place a projectile with an arbitrary velocity and a full lifespan.
    pub fn spawn_projectile(&mut self, position: Position, velocity: Velocity) -> Entity {
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_spawn_order,
            &self.config,
            position,
            velocity,
        )
    }

    /// Move the ship (scripted scenarios).
    pub fn place_ship(&mut self, position: Position) {
        if let Ok(mut pos) = self.world.get::<&mut Position>(self.ship) {
            *pos = position;
        }
    }

    /// Build the current snapshot. Events cover the most recent tick.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.last_tick_events.clone(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the configuration this engine was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Whether the ship was destroyed while the game was still in play.
    pub fn ship_hit(&self) -> bool {
        self.phase.ship_hit()
    }

    /// Ticks left before the ship-hit overlay shows (0 outside `ShipDestroyed`).
    pub fn fadeout_remaining(&self) -> u32 {
        self.phase.fadeout_remaining()
    }

    /// Whether the asteroid field was cleared while the game was still in play.
    pub fn asteroids_cleared(&self) -> bool {
        self.phase.asteroids_cleared()
    }

    /// Get a copy of the ship's state.
    pub fn ship(&self) -> Ship {
        self.world
            .get::<&Ship>(self.ship)
            .map(|ship| *ship)
            .unwrap_or_default()
    }

    /// Get the ship's current position.
    pub fn ship_position(&self) -> Position {
        self.world
            .get::<&Position>(self.ship)
            .map(|pos| *pos)
            .unwrap_or_default()
    }

    /// Get the number of asteroids in the world.
    pub fn asteroid_count(&self) -> usize {
        self.world.query::<&Asteroid>().iter().count()
    }

    /// Get the number of live projectiles.
    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::Fire {
                    origin_x,
                    origin_y,
                    heading_degrees,
                } => {
                    self.fire(origin_x, origin_y, heading_degrees);
                }
                PlayerCommand::Ship { command } => self.apply_ship_control(command),
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let (width, height) = (self.config.world_width, self.config.world_height);

        // 1. Thrust and movement (a wrecked ship stays put)
        systems::ship_control::apply_thrust(&mut self.world, &self.config);
        systems::movement::run(&mut self.world, width, height);

        // 2. Detection against a snapshot taken before any removal
        let frame = CollisionFrame::gather(&self.world);
        let hits = frame.projectile_hits();
        let ship_struck = frame.ship_contact().is_some();

        // 3. Resolve every hit as one batch
        let resolution = systems::impacts::run(
            &mut self.world,
            &frame,
            &hits,
            &self.config,
            &mut self.next_spawn_order,
            &mut self.despawn_buffer,
            &mut self.pending_events,
        );
        if !resolution.shattered.is_empty() {
            log::debug!(
                "tick {}: {} asteroid(s) shattered, {} fragment(s) spawned",
                self.time.tick,
                resolution.shattered.len(),
                resolution.fragments_spawned
            );
        }

        // 4. Cleared latch
        let remaining = self.asteroid_count();
        systems::outcome::latch_cleared(
            &mut self.phase,
            frame.asteroids.len(),
            remaining,
            &mut self.pending_events,
        );

        // 5. Ship collision, as detected in step 2
        if ship_struck {
            self.destroy_ship();
        }

        // 6. Projectile lifespans
        systems::lifespan::run(&mut self.world, &mut self.despawn_buffer, &mut self.pending_events);

        // 7. Fadeout countdown
        systems::outcome::advance_fadeout(&mut self.phase, &mut self.pending_events);
    }

    fn destroy_ship(&mut self) {
        if let Ok((ship, pos)) = self.world.query_one_mut::<(&mut Ship, &Position)>(self.ship) {
            systems::outcome::destroy_ship(
                &mut self.phase,
                ship,
                *pos,
                self.config.fadeout_ticks,
                &mut self.pending_events,
            );
        }
    }
}
