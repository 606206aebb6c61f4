//! Actor movement: bounded horizontal stepping and the jump arc
//!
//! Horizontal motion is event-driven (one step per key-down event); the
//! vertical position is recomputed from the jump arc every tick while a
//! jump is in flight.

use serde::{Deserialize, Serialize};

use super::state::{Actor, JumpState};
use crate::clamp_to_grid;
use crate::consts::{JUMP_DURATION, JUMP_HEIGHT, MOVE_STEP};

/// The round's input alphabet
///
/// The shell maps raw key identifiers onto this and drops everything else,
/// so unrecognized keys never reach the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Forward,
    Back,
    Jump,
}

/// Apply one key-down event to the actor
///
/// Directional keys step x or z by MOVE_STEP, clamped to the surface;
/// Jump starts the arc at `now`.
pub fn step(actor: &mut Actor, key: Key, now: f32) {
    match key {
        Key::Left => actor.pos.x = clamp_to_grid(actor.pos.x - MOVE_STEP),
        Key::Right => actor.pos.x = clamp_to_grid(actor.pos.x + MOVE_STEP),
        Key::Forward => actor.pos.z = clamp_to_grid(actor.pos.z + MOVE_STEP),
        Key::Back => actor.pos.z = clamp_to_grid(actor.pos.z - MOVE_STEP),
        Key::Jump => request_jump(actor, now),
    }
}

/// Start a jump unless one is already in flight
pub fn request_jump(actor: &mut Actor, now: f32) {
    if matches!(actor.jump, JumpState::Grounded) {
        actor.jump = JumpState::Airborne { since: now };
    }
}

/// Recompute the actor's height from the jump arc
///
/// The arc is a half sine: zero at lift-off and landing, JUMP_HEIGHT at
/// the midpoint. Past JUMP_DURATION the actor is back on the ground.
pub fn update_jump(actor: &mut Actor, now: f32) {
    if let JumpState::Airborne { since } = actor.jump {
        let t = now - since;
        if t < JUMP_DURATION {
            actor.pos.y = JUMP_HEIGHT * (std::f32::consts::PI * t / JUMP_DURATION).sin();
        } else {
            actor.pos.y = 0.0;
            actor.jump = JumpState::Grounded;
        }
    }
}
