//! Parallax background: sky, sun, clouds, two hill layers and trees

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::billboard::{Billboard, BillboardPlacer};
use super::decor::Cloud;
use super::terrain::{LayerConfig, TerrainLayer};
use crate::consts::*;

/// Sun radius in pixels
pub const SUN_RADIUS: f32 = 30.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    pub far: TerrainLayer,
    pub near: TerrainLayer,
    pub trees: BillboardPlacer,
    pub clouds: Vec<Cloud>,
    pub sun_pos: Vec2,
    rng: Pcg32,
}

impl Background {
    /// Fresh background; `tree_variants` is the number of decoded tree images
    pub fn new(seed: u64, tree_variants: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = (0..CLOUD_COUNT).map(|_| Cloud::spawn(&mut rng)).collect();
        Self {
            far: TerrainLayer::new(LayerConfig::far_hills()),
            near: TerrainLayer::new(LayerConfig::near_hills()),
            trees: BillboardPlacer::new(tree_variants),
            clouds,
            sun_pos: Vec2::new(VIEW_WIDTH - 120.0, (SKY_H / 2.0).trunc()),
            rng,
        }
    }

    /// Scroll both hill layers, drift clouds, and rebuild the height caches
    pub fn update(&mut self) {
        self.far.update();
        self.near.update();

        self.clouds.retain_mut(|c| !c.update());
        while self.clouds.len() < CLOUD_COUNT {
            self.clouds.push(Cloud::spawn(&mut self.rng));
        }

        self.far.precompute_cache();
        self.near.precompute_cache();
    }

    /// Trees standing on the near hills for the current scroll
    pub fn visible_trees(&self) -> Vec<Billboard> {
        self.trees.visible(&self.near)
    }
}
