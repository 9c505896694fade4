//! Axis-aligned rectangles in screen space
//!
//! Screen space has its origin at the top-left corner with Y growing down,
//! so `bottom()` is the larger Y value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build a rectangle of the given size whose bottom edge is centered on `anchor`
    pub fn from_midbottom(anchor: Vec2, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(anchor.x - size.x / 2.0, anchor.y - size.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.bottom())
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment (left/top inclusive, right/bottom exclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Move horizontally
    pub fn shift_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }
}

/// Derive a collision hitbox from a visual box
///
/// The hitbox is `scale` times the visual size, truncated to whole pixels,
/// and shares the visual box's bottom-center point.
pub fn hitbox_for(visual: &Rect, scale: f32) -> Rect {
    let size = (visual.size * scale).trunc();
    Rect::from_midbottom(visual.midbottom(), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.5, 9.5, 3.0, 3.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_hitbox_anchored_bottom_center() {
        let visual = Rect::new(70.0, 250.0, 150.0, 150.0);
        let hit = hitbox_for(&visual, 0.7);
        assert_eq!(hit.size, Vec2::new(105.0, 105.0));
        assert_eq!(hit.bottom(), visual.bottom());
        assert_eq!(hit.center_x(), visual.center_x());
    }

    #[test]
    fn test_hitbox_truncates_size() {
        let visual = Rect::new(0.0, 0.0, 66.0, 126.0);
        let hit = hitbox_for(&visual, 0.7);
        assert_eq!(hit.size, Vec2::new(46.0, 88.0));
    }

    #[test]
    fn test_contains_point_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(30.0, 15.0)));
        assert!(r.contains_point(Vec2::new(29.9, 29.9)));
    }
}
