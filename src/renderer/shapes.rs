//! Shape generation for procedural props
//!
//! Pure geometry: every function here maps a simulation value to points or
//! rectangles. Colors are chosen by the scene.

use glam::Vec2;

use crate::consts::{TREE_BASE_H, TREE_BASE_W};
use crate::sim::Rect;
use crate::sim::decor::{Cloud, Fern};

/// Fallback tree: a trunk and three stacked triangles
#[derive(Debug, Clone, PartialEq)]
pub struct FirTree {
    pub trunk: Rect,
    /// Bottom tier first
    pub tiers: Vec<[Vec2; 3]>,
}

/// Fir tree filling `rect`
///
/// Laid out on a 48x64 grid and stretched to the requested size, so scaled
/// billboards keep their proportions.
pub fn fir_tree(rect: Rect) -> FirTree {
    let sx = rect.size.x / TREE_BASE_W;
    let sy = rect.size.y / TREE_BASE_H;
    let at = |x: f32, y: f32| rect.pos + Vec2::new(x * sx, y * sy);

    let (trunk_w, trunk_h) = (8.0, 16.0);
    let trunk_pos = at(
        ((TREE_BASE_W - trunk_w) / 2.0).floor(),
        TREE_BASE_H - trunk_h - 2.0,
    );
    let trunk = Rect {
        pos: trunk_pos,
        size: Vec2::new(trunk_w * sx, trunk_h * sy),
    };

    let cx = (TREE_BASE_W / 2.0).floor();
    let tiers = [
        (TREE_BASE_H - trunk_h - 6.0, TREE_BASE_W - 8.0),
        (TREE_BASE_H - trunk_h - 20.0, TREE_BASE_W - 18.0),
        (TREE_BASE_H - trunk_h - 32.0, TREE_BASE_W - 28.0),
    ]
    .into_iter()
    .map(|(cy, w)| {
        let half = (w / 2.0).floor();
        let h = half + 4.0;
        [at(cx, cy - h), at(cx - half, cy), at(cx + half, cy)]
    })
    .collect();

    FirTree { trunk, tiers }
}

/// Stem of a fern, root first
pub fn fern_stem(fern: &Fern) -> (Vec2, Vec2) {
    let base_x = fern.x.trunc();
    (
        Vec2::new(base_x, fern.base_y),
        Vec2::new(base_x, fern.base_y - fern.height),
    )
}

/// Leaf triangles of a fern, alternating sides from the bottom up
pub fn fern_leaves(fern: &Fern) -> Vec<[Vec2; 3]> {
    let base_x = fern.x.trunc();
    let n = fern.leaf_count;
    (1..=n)
        .map(|i| {
            let t = i as f32 / (n + 1) as f32;
            let y = fern.base_y - (fern.height * t).trunc();
            let leaf_len = (fern.leaf_span * (0.35 + 0.65 * (1.0 - t))).trunc();
            let side = if i % 2 == 0 { -1.0 } else { 1.0 };
            let sway = (fern.sway_phase + t * 3.0).sin() * 3.0;
            let dx = (side * (leaf_len + sway)).trunc();
            let dy = -(leaf_len * 0.25).trunc();
            [
                Vec2::new(base_x, y),
                Vec2::new(base_x + dx, y + dy),
                Vec2::new(base_x, y - fern.stroke.max(2.0)),
            ]
        })
        .collect()
}

/// Body ellipse followed by one ellipse per lobe
pub fn cloud_ellipses(cloud: &Cloud) -> Vec<Rect> {
    std::iter::once(Rect {
        pos: cloud.pos,
        size: cloud.size,
    })
    .chain(cloud.lobes.iter().map(|lobe| Rect {
        pos: cloud.pos + lobe.offset,
        size: lobe.size,
    }))
    .collect()
}
