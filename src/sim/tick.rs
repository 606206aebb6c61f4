//! Per-tick round update
//!
//! The round controller: composes input application, the jump arc, contact
//! tests, obstacle drift and the countdown into one deterministic update,
//! and owns the Active -> Dying -> Reported lifecycle.

use super::collision::hit_obstacle;
use super::motion::{self, Key};
use super::state::{Phase, RoundEvent, RoundState};
use crate::consts::REPORT_DELAY;

/// Input events for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key-down events since the previous tick, in arrival order.
    /// No auto-repeat: one physical key-down maps to exactly one entry.
    pub keys: Vec<Key>,
}

impl TickInput {
    pub fn press(key: Key) -> Self {
        Self { keys: vec![key] }
    }
}

/// Advance the round by one frame tick
///
/// `now` is monotonic elapsed wall-clock time in seconds, shared by the
/// jump arc, the countdown and the death delay. Returns the round-end
/// notification on the tick that reports it, `None` otherwise.
pub fn tick(state: &mut RoundState, input: &TickInput, now: f32) -> Option<RoundEvent> {
    match state.phase {
        // Terminal: nothing left to update, nothing to re-emit
        Phase::Reported => return None,

        Phase::Dying => {
            if now - state.died_at >= REPORT_DELAY {
                state.phase = Phase::Reported;
                let score = state.config.score;
                log::info!("Round over, reporting score {}", score);
                return Some(RoundEvent::Ended { score });
            }

            // Actor is frozen but the world keeps moving until the report fires
            state.ticks += 1;
            state.field.advance();
            state.timer.tick(now);
            return None;
        }

        Phase::Active => {}
    }

    state.ticks += 1;

    // Pending input, oldest first; all of it is gated once the clock runs out
    if state.timer.input_enabled {
        for &key in &input.keys {
            motion::step(&mut state.actor, key, now);
        }
    }

    motion::update_jump(&mut state.actor, now);

    if hit_obstacle(state.actor.pos, &state.field.obstacles) {
        state.actor.alive = false;
        state.phase = Phase::Dying;
        state.died_at = now;
        log::info!("Actor down at tick {}, report pending", state.ticks);
    }

    state.field.advance();
    state.timer.tick(now);

    // Strict timeout policy (off by default: expiry only gates input)
    if state.config.end_on_timeout && state.timer.expired() && state.phase == Phase::Active {
        state.actor.alive = false;
        state.phase = Phase::Dying;
        state.died_at = now;
        log::info!("Countdown expired, ending round");
    }

    None
}
