//! Win/lose state machine.
//!
//! `Playing` is the only phase with outgoing transitions: to `ShipDestroyed`
//! when the intact ship touches an asteroid, or to `AsteroidsCleared` when a
//! tick's hits empty the asteroid field. Both are latched; once left,
//! `Playing` is never re-entered and neither terminal phase changes kind.

use shatter_core::components::Ship;
use shatter_core::enums::GamePhase;
use shatter_core::events::SimEvent;
use shatter_core::types::Position;

/// Latch `AsteroidsCleared` if this tick's resolutions emptied the field.
pub fn latch_cleared(
    phase: &mut GamePhase,
    asteroids_before: usize,
    asteroids_after: usize,
    events: &mut Vec<SimEvent>,
) -> bool {
    if !phase.is_playing() || asteroids_before == 0 || asteroids_after > 0 {
        return false;
    }
    *phase = GamePhase::AsteroidsCleared;
    events.push(SimEvent::AsteroidsCleared);
    log::info!("all asteroids destroyed");
    true
}

/// Wreck the ship and, if still playing, start the fadeout countdown.
pub fn destroy_ship(
    phase: &mut GamePhase,
    ship: &mut Ship,
    position: Position,
    fadeout_ticks: u32,
    events: &mut Vec<SimEvent>,
) {
    if !ship.intact {
        return;
    }
    ship.intact = false;
    ship.thrusting = false;
    events.push(SimEvent::ShipDestroyed {
        x: position.x,
        y: position.y,
    });
    log::info!("ship destroyed at ({:.1}, {:.1})", position.x, position.y);

    if phase.is_playing() {
        *phase = GamePhase::ShipDestroyed {
            fadeout_remaining: fadeout_ticks,
        };
        if fadeout_ticks == 0 {
            events.push(SimEvent::FadeoutComplete);
        }
    }
}

/// Count the fadeout down by one tick.
pub fn advance_fadeout(phase: &mut GamePhase, events: &mut Vec<SimEvent>) {
    if let GamePhase::ShipDestroyed { fadeout_remaining } = phase {
        if *fadeout_remaining > 0 {
            *fadeout_remaining -= 1;
            if *fadeout_remaining == 0 {
                events.push(SimEvent::FadeoutComplete);
                log::info!("fadeout complete");
            }
        }
    }
}
