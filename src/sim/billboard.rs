//! Deterministic tree scatter along a hill layer
//!
//! Trees sit on a fixed horizontal grid of slots. Every slot seeds its own
//! throwaway RNG from the slot index, so a slot always produces the same tree
//! no matter how the run got there.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::terrain::TerrainLayer;
use crate::consts::*;

/// Base of the per-slot seed
const SLOT_SEED_OFFSET: i64 = 1000;
/// Odd multiplier spreading neighbouring slot seeds apart
const SLOT_SEED_STRIDE: i64 = 7919;
/// Scale range and quantization step for trees
const SCALE_MIN: f32 = 0.85;
const SCALE_MAX: f32 = 1.20;
const SCALE_QUANTUM: f32 = 0.05;
/// Smallest rendered tree edge in pixels
const MIN_TREE_EDGE: f32 = 8.0;

/// The reproducible part of a slot's tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotProp {
    /// Index into the available tree images
    pub variant: usize,
    /// Quantized scale factor
    pub scale: f32,
}

/// A tree ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Billboard {
    pub slot: i64,
    pub variant: usize,
    pub scale: f32,
    pub rect: Rect,
}

/// Scatters tree billboards along a terrain layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillboardPlacer {
    pub spacing: f32,
    pub y_offset: f32,
    pub base_size: Vec2,
    /// Number of distinct tree images (at least 1; 1 also covers the
    /// procedural fallback tree)
    pub variant_count: usize,
    pub view_width: f32,
}

impl BillboardPlacer {
    pub fn new(variant_count: usize) -> Self {
        Self {
            spacing: TREE_SPACING,
            y_offset: TREE_Y_OFFSET,
            base_size: Vec2::new(TREE_BASE_W, TREE_BASE_H),
            variant_count: variant_count.max(1),
            view_width: VIEW_WIDTH,
        }
    }

    /// The tree for slot `k`; a pure function of `k` and the variant count
    pub fn slot_prop(&self, k: i64) -> SlotProp {
        let seed = SLOT_SEED_OFFSET.wrapping_add(k.wrapping_mul(SLOT_SEED_STRIDE));
        let mut rng = Pcg32::seed_from_u64(seed as u64);
        let variant = rng.random_range(0..self.variant_count);
        let raw: f32 = rng.random_range(SCALE_MIN..=SCALE_MAX);
        let scale = (raw / SCALE_QUANTUM).round() * SCALE_QUANTUM;
        SlotProp { variant, scale }
    }

    /// Pixel size of a tree at the given scale
    pub fn size_for(&self, scale: f32) -> Vec2 {
        (self.base_size * scale).trunc().max(Vec2::splat(MIN_TREE_EDGE))
    }

    /// Range of slot indices worth considering for a scroll offset
    pub fn slot_range(&self, scroll: f64) -> std::ops::RangeInclusive<i64> {
        let spacing = self.spacing as f64;
        let w = self.view_width as f64;
        let start = ((scroll - w) / spacing).floor() as i64;
        let end = ((scroll + 2.0 * w) / spacing).floor() as i64;
        start..=end
    }

    /// Trees visible for the layer's current offset, left to right
    pub fn visible(&self, layer: &TerrainLayer) -> Vec<Billboard> {
        let scroll = layer.offset;
        let mut out = Vec::new();
        for k in self.slot_range(scroll) {
            let screen_x = (k as f64 * self.spacing as f64 - scroll).trunc() as f32;
            if screen_x < -self.spacing || screen_x > self.view_width + self.spacing {
                continue;
            }
            let prop = self.slot_prop(k);
            let size = self.size_for(prop.scale);
            let ground_y = layer.cached_height(screen_x as i32).trunc();
            let rect = Rect::from_midbottom(Vec2::new(screen_x, ground_y + self.y_offset), size);
            out.push(Billboard {
                slot: k,
                variant: prop.variant,
                scale: prop.scale,
                rect,
            });
        }
        out
    }
}
