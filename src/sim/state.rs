//! Round state and core simulation types
//!
//! Everything a round owns lives here; it is all recreated per round and
//! nothing is shared across rounds.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::field::ObstacleField;
use super::timer::RoundTimer;
use crate::config::RoundConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Actor alive, simulation running
    Active,
    /// Collision detected, round-end report pending
    Dying,
    /// Report emitted, terminal
    Reported,
}

/// Vertical state of the actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JumpState {
    /// On the ground
    Grounded,
    /// Mid-arc since the given monotonic timestamp (seconds)
    Airborne { since: f32 },
}

/// The controllable actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// World position; y is vertical and owned by the jump arc
    pub pos: Vec3,
    /// False after the fatal contact; the actor is frozen from then on
    pub alive: bool,
    pub jump: JumpState,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            pos: Vec3::ZERO,
            alive: true,
            jump: JumpState::Grounded,
        }
    }

    /// True while a jump is in flight
    pub fn jumping(&self) -> bool {
        matches!(self.jump, JumpState::Airborne { .. })
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

/// A drifting line-segment obstacle on the ground plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Ground-plane endpoint as (x, z)
    pub start: Vec2,
    /// Ground-plane endpoint as (x, z)
    pub end: Vec2,
    /// Constant horizontal drift applied to both endpoints each tick
    pub vel_x: f32,
}

impl Obstacle {
    /// Segment endpoints lifted into world space (obstacles sit at y = 0)
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        (
            Vec3::new(self.start.x, 0.0, self.start.y),
            Vec3::new(self.end.x, 0.0, self.end.y),
        )
    }
}

/// Notification emitted to the presentation layer when a round finishes
///
/// The shell forwards the score to the game-over view, which reads it back
/// as a `score=<integer>` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    Ended { score: u32 },
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Round policy
    pub config: RoundConfig,
    /// The controllable actor
    pub actor: Actor,
    /// Drifting obstacles and the wave cycle
    pub field: ObstacleField,
    /// Countdown timer
    pub timer: RoundTimer,
    /// Current phase
    pub phase: Phase,
    /// Monotonic timestamp of the fatal contact (meaningful while Dying/Reported)
    pub died_at: f32,
    /// Simulation tick counter
    pub ticks: u64,
}

impl RoundState {
    /// Create a fresh round with the given seed and policy
    pub fn new(seed: u64, config: RoundConfig) -> Self {
        let mut field = ObstacleField::new(seed);
        field.spawn_wave();
        let timer = RoundTimer::new(config.round_seconds);

        Self {
            seed,
            config,
            actor: Actor::new(),
            field,
            timer,
            phase: Phase::Active,
            died_at: 0.0,
            ticks: 0,
        }
    }

    /// Rebuild the round in place for a fresh play-through
    pub fn restart(&mut self, seed: u64) {
        let config = self.config.clone();
        *self = Self::new(seed, config);
    }
}
