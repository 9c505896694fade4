//! Cosmetic scenery: drifting clouds and foreground ferns
//!
//! None of this is collidable. It is randomized from the owning run's RNG so
//! a seeded run still replays identically.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One ellipse of a cloud, relative to the cloud's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lobe {
    pub offset: Vec2,
    pub size: Vec2,
}

/// A puffy cloud drifting left across the sky band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub lobes: Vec<Lobe>,
}

impl Cloud {
    /// Spawn a cloud just past the right edge
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let w: i32 = rng.random_range(70..=110);
        let h: i32 = rng.random_range(35..=55);
        let x = VIEW_WIDTH as i32 + rng.random_range(0..=CLOUD_SPAWN_OFFSET_MAX);
        let y_max = (SKY_H as i32 - h - 10).max(10);
        let y = rng.random_range(10..=y_max);
        let speed: f32 = rng.random_range(0.8..1.3);

        let lobe_count: usize = rng.random_range(3..=4);
        let lobes = (0..lobe_count)
            .map(|_| {
                let lw = (w as f32 * rng.random_range(0.35f32..0.6)).trunc();
                let lh = (h as f32 * rng.random_range(0.5f32..0.9)).trunc();
                let ox = rng.random_range(-(w / 4)..=w / 4);
                let oy = rng.random_range(-(h / 5)..=h / 5);
                Lobe {
                    offset: Vec2::new(ox as f32, oy as f32),
                    size: Vec2::new(lw, lh),
                }
            })
            .collect();

        Self {
            pos: Vec2::new(x as f32, y as f32),
            size: Vec2::new(w as f32, h as f32),
            speed,
            lobes,
        }
    }

    /// Drift left; returns true once fully off the left edge
    pub fn update(&mut self) -> bool {
        self.pos.x -= self.speed;
        self.pos.x + self.size.x < 0.0
    }
}

/// A swaying fern rooted on the bottom edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fern {
    pub x: f32,
    pub base_y: f32,
    pub height: f32,
    pub leaf_count: u32,
    pub leaf_span: f32,
    pub stroke: f32,
    pub sway_phase: f32,
}

impl Fern {
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let scale: f32 = rng.random_range(0.9..1.3);
        Self {
            x: VIEW_WIDTH + rng.random_range(0..=160i32) as f32,
            base_y: VIEW_HEIGHT - 1.0,
            height: (46.0 * scale).trunc(),
            leaf_count: rng.random_range(6..=8),
            leaf_span: (16.0 * scale).trunc(),
            stroke: (2.0 * scale).trunc().max(2.0),
            sway_phase: rng.random_range(0.0..std::f32::consts::TAU),
        }
    }

    /// Scroll with the ground; returns true once off the left edge
    pub fn update(&mut self, dt: f32) -> bool {
        self.x -= SCROLL_SPEED;
        self.sway_phase += dt;
        self.x + self.leaf_span < 0.0
    }
}

/// Timer-driven fern spawner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FernField {
    pub ferns: Vec<Fern>,
    timer: u32,
    next_spawn: u32,
}

impl FernField {
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            ferns: Vec::new(),
            timer: 0,
            next_spawn: rng.random_range(12..=24),
        }
    }

    pub fn update(&mut self, rng: &mut Pcg32, dt: f32) {
        self.timer += 1;
        if self.timer >= self.next_spawn {
            self.ferns.push(Fern::spawn(rng));
            self.timer = 0;
            self.next_spawn = rng.random_range(14..=30);
        }
        self.ferns.retain_mut(|f| !f.update(dt));
    }
}
