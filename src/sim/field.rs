//! Obstacle waves: spawning, drift and retirement
//!
//! Obstacles arrive in waves. A wave is cleared when its last member has
//! drifted off the surface, and the next wave is one obstacle larger until
//! the cycle wraps.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::consts::{GRID_SIZE, MAX_WAVE_COUNT, OBSTACLE_SPEED};
use crate::on_grid;

/// The current set of drifting obstacles plus the wave cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Live obstacles, in spawn order (stable by entity ID)
    pub obstacles: Vec<Obstacle>,
    /// Size of the current wave, cycling 1..=MAX_WAVE_COUNT
    pub wave_count: u32,
    rng: Pcg32,
    next_id: u32,
}

impl ObstacleField {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            wave_count: 1,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Random ground-plane endpoint on integer coordinates in [-10, 10]
    fn random_endpoint(&mut self) -> Vec2 {
        let extent = GRID_SIZE as i32;
        let x = self.rng.random_range(-extent..=extent) as f32;
        let z = self.rng.random_range(-extent..=extent) as f32;
        Vec2::new(x, z)
    }

    /// Replace the field contents with a fresh wave of `wave_count` obstacles
    ///
    /// Endpoints are drawn independently, so obstacles may overlap and a
    /// segment may be zero-length; both are valid collision inputs.
    pub fn spawn_wave(&mut self) {
        self.obstacles.clear();

        for _ in 0..self.wave_count {
            let start = self.random_endpoint();
            let end = self.random_endpoint();
            let vel_x = if self.rng.random_bool(0.5) {
                OBSTACLE_SPEED
            } else {
                -OBSTACLE_SPEED
            };

            let id = self.next_obstacle_id();
            self.obstacles.push(Obstacle {
                id,
                start,
                end,
                vel_x,
            });
        }

        log::debug!("Spawned wave of {} obstacles", self.wave_count);
    }

    /// Drift every obstacle, retire the ones that left the surface, and
    /// roll the wave counter once the field empties
    pub fn advance(&mut self) {
        for o in &mut self.obstacles {
            o.start.x += o.vel_x;
            o.end.x += o.vel_x;
        }

        self.obstacles
            .retain(|o| on_grid(o.start.x) && on_grid(o.end.x));

        if self.obstacles.is_empty() {
            self.wave_count = if self.wave_count >= MAX_WAVE_COUNT {
                1
            } else {
                self.wave_count + 1
            };
            log::info!("Wave cleared, next wave size {}", self.wave_count);
            self.spawn_wave();
        }
    }
}
