//! Scrolling noise-driven hill bands
//!
//! A `TerrainLayer` turns the current scroll offset into a silhouette: one
//! height per screen column, sampled sparsely from [`NoiseSource`] and
//! linearly interpolated in between.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::noise::NoiseSource;
use crate::consts::*;

/// Octave count shared by all hill layers
const HILL_OCTAVES: u32 = 4;
/// Persistence shared by all hill layers
const HILL_PERSISTENCE: f64 = 0.55;

/// Static configuration of one hill layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Peak deviation from the resting line, in pixels
    pub amplitude: f32,
    /// Multiplier on the global scroll speed (parallax)
    pub speed_scale: f32,
    /// Lowest allowed surface Y (the band's bottom)
    pub baseline: f32,
    /// Highest allowed surface Y
    pub top_limit: f32,
    /// Y where the filled silhouette polygon closes
    pub poly_base_y: f32,
    pub seed: i64,
    pub base_freq: f64,
}

impl LayerConfig {
    /// Distant, slow hills
    pub fn far_hills() -> Self {
        Self {
            amplitude: 28.0,
            speed_scale: 0.18,
            baseline: SKY_H + HILLS_H - 35.0,
            top_limit: SKY_H,
            poly_base_y: GROUND_TOP,
            seed: 1337,
            base_freq: 1.0 / 260.0,
        }
    }

    /// Closer, faster hills that carry the tree billboards
    pub fn near_hills() -> Self {
        Self {
            amplitude: 42.0,
            speed_scale: 0.35,
            baseline: SKY_H + HILLS_H,
            top_limit: SKY_H,
            poly_base_y: GROUND_TOP,
            seed: 4242,
            base_freq: 1.0 / 330.0,
        }
    }
}

/// One scrolling hill band with its per-column height cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainLayer {
    pub config: LayerConfig,
    /// Pixels scrolled per tick
    pub speed: f32,
    /// Cumulative scroll (monotonically increasing)
    pub offset: f64,
    noise: NoiseSource,
    sample_step: usize,
    heights: Vec<f32>,
}

impl TerrainLayer {
    pub fn new(config: LayerConfig) -> Self {
        Self::with_columns(config, VIEW_COLUMNS, HILL_SAMPLE_STEP)
    }

    /// Layer with a custom cache width and sampling stride
    pub fn with_columns(config: LayerConfig, columns: usize, sample_step: usize) -> Self {
        let mut layer = Self {
            config,
            speed: SCROLL_SPEED * config.speed_scale,
            offset: 0.0,
            noise: NoiseSource::new(config.seed, HILL_OCTAVES, HILL_PERSISTENCE, config.base_freq),
            sample_step: sample_step.max(1),
            heights: vec![config.baseline; columns.max(1)],
        };
        layer.precompute_cache();
        layer
    }

    /// Advance the scroll offset by one tick
    pub fn update(&mut self) {
        self.offset += self.speed as f64;
    }

    /// Surface Y at screen column `x` for the current offset
    pub fn height_at(&self, x: f32) -> f32 {
        let base = self.config.baseline - self.config.amplitude * 0.6;
        let n = self.noise.sample(x as f64 + self.offset) as f32;
        let y = base - (n - 0.5) * 2.0 * self.config.amplitude;
        y.clamp(self.config.top_limit, self.config.baseline)
    }

    /// Rebuild the per-column cache from sparse samples
    ///
    /// Columns `0, step, 2*step, ...` and the last column are evaluated
    /// directly; columns in between are linear interpolations of their two
    /// neighbouring samples.
    pub fn precompute_cache(&mut self) {
        let last = self.heights.len() - 1;
        let step = self.sample_step;
        let mut prev_x = 0;
        let mut prev_y = self.height_at(0.0);
        self.heights[0] = prev_y;

        while prev_x < last {
            let x = (prev_x + step).min(last);
            let y = self.height_at(x as f32);
            let span = (x - prev_x) as f32;
            let dy = (y - prev_y) / span;
            for xi in prev_x + 1..x {
                self.heights[xi] = prev_y + dy * (xi - prev_x) as f32;
            }
            self.heights[x] = y;
            prev_x = x;
            prev_y = y;
        }
    }

    /// Cached heights, one per column
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Cached height at a column, clamped to the cache bounds
    pub fn cached_height(&self, x: i32) -> f32 {
        let last = self.heights.len() as i32 - 1;
        self.heights[x.clamp(0, last) as usize]
    }

    /// Whether `x` is one of the directly sampled columns
    pub fn is_sample_column(&self, x: usize) -> bool {
        x % self.sample_step == 0 || x == self.heights.len() - 1
    }

    pub fn sample_step(&self) -> usize {
        self.sample_step
    }

    /// Closed silhouette: every cached column, then the bottom-right and
    /// bottom-left anchors on the polygon base line
    pub fn surface_polygon(&self) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self
            .heights
            .iter()
            .enumerate()
            .map(|(x, &y)| Vec2::new(x as f32, y))
            .collect();
        let right = (self.heights.len() - 1) as f32;
        points.push(Vec2::new(right, self.config.poly_base_y));
        points.push(Vec2::new(0.0, self.config.poly_base_y));
        points
    }
}
