//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Updates driven entirely by the caller's clock and frame-tick signal
//! - Seeded RNG only
//! - Stable obstacle order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod motion;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{distance_to_segment, hit_obstacle};
pub use field::ObstacleField;
pub use motion::Key;
pub use state::{Actor, JumpState, Obstacle, Phase, RoundEvent, RoundState};
pub use tick::{TickInput, tick};
pub use timer::RoundTimer;
