//! Timer-driven obstacle spawning

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{FlyerBand, Obstacle, duck_hitbox_top, flyer_band, stand_hitbox_top};
use crate::consts::*;

/// Counts playing ticks and emits an obstacle every randomized interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnController {
    /// Ticks since the last spawn
    pub timer: u32,
    /// Tick count that triggers the next spawn
    pub next_spawn: u32,
}

impl SpawnController {
    pub fn new(rng: &mut Pcg32) -> Self {
        let (lo, hi) = FIRST_SPAWN_TICKS;
        Self {
            timer: 0,
            next_spawn: rng.random_range(lo..=hi),
        }
    }

    /// Advance one tick; returns the obstacle spawned this tick, if any
    pub fn tick(&mut self, rng: &mut Pcg32, distance: f64) -> Option<Obstacle> {
        self.timer += 1;
        if self.timer < self.next_spawn {
            return None;
        }

        let obstacle = choose_obstacle(rng, distance);
        self.timer = 0;
        let (lo, hi) = SPAWN_TICKS;
        self.next_spawn = rng.random_range(lo..=hi);
        Some(obstacle)
    }
}

/// Pick and place the next obstacle
///
/// Fliers are only eligible past `FLYER_MIN_DISTANCE` and even then only
/// with probability `FLYER_CHANCE`.
pub fn choose_obstacle(rng: &mut Pcg32, distance: f64) -> Obstacle {
    let allow_fliers = distance >= FLYER_MIN_DISTANCE;
    if allow_fliers && rng.random::<f32>() < FLYER_CHANCE {
        Obstacle::flying(flyer_bottom(rng) as f32)
    } else {
        Obstacle::ground()
    }
}

/// Bottom edge for a new flier, always duckable
fn flyer_bottom(rng: &mut Pcg32) -> i32 {
    match flyer_band(stand_hitbox_top(), duck_hitbox_top()) {
        FlyerBand::Range { min, max } => rng.random_range(min..=max),
        FlyerBand::Fallback(bottom) => {
            log::debug!("Flier band is inverted, using midpoint {}", bottom);
            bottom
        }
    }
}
