//! Player and obstacle entities
//!
//! Every entity carries a visual box (for drawing) and a hitbox (for
//! collision). The hitbox is never moved on its own: it is re-derived from
//! the visual box with [`hitbox_for`] after every pose or position change.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, hitbox_for};
use crate::consts::*;

/// Top edge of the standing player's hitbox when on the ground
pub fn stand_hitbox_top() -> f32 {
    VIEW_HEIGHT - (SPINO_STAND_H * HITBOX_SCALE).trunc()
}

/// Top edge of the ducking player's hitbox
pub fn duck_hitbox_top() -> f32 {
    VIEW_HEIGHT - (SPINO_DUCK_H * HITBOX_SCALE).trunc()
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Left edge of the visual box while on the ground
    pub x: f32,
    pub visual: Rect,
    pub hitbox: Rect,
    /// Vertical velocity (pixels per tick, negative is up)
    pub vy: f32,
    pub on_ground: bool,
    pub ducking: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_X)
    }
}

impl Player {
    pub fn new(x: f32) -> Self {
        let visual = Rect::new(x, VIEW_HEIGHT - SPINO_STAND_H, SPINO_STAND_W, SPINO_STAND_H);
        Self {
            x,
            visual,
            hitbox: hitbox_for(&visual, HITBOX_SCALE),
            vy: 0.0,
            on_ground: true,
            ducking: false,
        }
    }

    /// Visual size for the current pose
    pub fn pose_size(&self) -> Vec2 {
        if self.ducking {
            Vec2::new(SPINO_DUCK_W, SPINO_DUCK_H)
        } else {
            Vec2::new(SPINO_STAND_W, SPINO_STAND_H)
        }
    }

    /// Take off if standing on the ground; returns whether a jump started
    pub fn start_jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.on_ground = false;
        self.ducking = false;
        self.vy = -JUMP_V;
        self.visual.size = self.pose_size();
        self.rebuild_hitbox();
        true
    }

    /// Advance one tick of pose and vertical physics
    pub fn update(&mut self, duck_held: bool) {
        self.ducking = self.on_ground && duck_held;

        if self.on_ground {
            self.visual.size = self.pose_size();
            self.visual.pos.x = self.x;
            self.visual.set_bottom(VIEW_HEIGHT);
        } else {
            // Airborne always uses the standing shape (top-left stays put)
            self.visual.size = Vec2::new(SPINO_STAND_W, SPINO_STAND_H);

            self.vy += GRAVITY;
            self.visual.pos.y += self.vy.trunc();
            if self.visual.bottom() >= VIEW_HEIGHT {
                self.visual.set_bottom(VIEW_HEIGHT);
                self.vy = 0.0;
                self.on_ground = true;
            }
        }

        self.rebuild_hitbox();
    }

    fn rebuild_hitbox(&mut self) {
        self.hitbox = hitbox_for(&self.visual, HITBOX_SCALE);
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Cactus standing on the ground line; must be jumped
    Ground,
    /// Pteranodon flying at head height; must be ducked
    Flying,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Ground => Vec2::new(CACTUS_W, CACTUS_H),
            ObstacleKind::Flying => Vec2::new(PTERA_W, PTERA_H),
        }
    }
}

/// Where a flier's bottom edge may go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyerBand {
    /// Any whole pixel in `min..=max`
    Range { min: i32, max: i32 },
    /// The band is inverted; use this fixed bottom
    Fallback(i32),
}

/// Vertical band for a flier's bottom edge
///
/// The bottom must sit at least `FLYER_MARGIN` below the standing hitbox top
/// (so a standing player is hit) and at least `SAFE_GAP` above the ducking
/// hitbox top (so a ducking player is not).
pub fn flyer_band(stand_top: f32, duck_top: f32) -> FlyerBand {
    let min = ((stand_top + FLYER_MARGIN) as i32).max(PTERA_H as i32);
    let max = ((duck_top - SAFE_GAP) as i32).min(VIEW_HEIGHT as i32);
    if min > max {
        FlyerBand::Fallback((stand_top as i32 + duck_top as i32).div_euclid(2))
    } else {
        FlyerBand::Range { min, max }
    }
}

/// A scrolling hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub visual: Rect,
    pub hitbox: Rect,
}

impl Obstacle {
    /// New obstacle just past the right edge with its bottom at `bottom`
    pub fn new(kind: ObstacleKind, bottom: f32) -> Self {
        let size = kind.size();
        let visual = Rect::new(VIEW_WIDTH, bottom - size.y, size.x, size.y);
        Self {
            kind,
            visual,
            hitbox: hitbox_for(&visual, HITBOX_SCALE),
        }
    }

    /// Cactus anchored to the ground line
    pub fn ground() -> Self {
        Self::new(ObstacleKind::Ground, VIEW_HEIGHT)
    }

    pub fn flying(bottom: f32) -> Self {
        Self::new(ObstacleKind::Flying, bottom)
    }

    /// Scroll left by one tick
    pub fn update(&mut self) {
        self.visual.shift_x(-SCROLL_SPEED);
        self.hitbox = hitbox_for(&self.visual, HITBOX_SCALE);
    }

    /// Fully past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.visual.right() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_hitbox_derived(player: &Player) {
        assert_eq!(player.hitbox, hitbox_for(&player.visual, HITBOX_SCALE));
        assert_eq!(player.hitbox.bottom(), player.visual.bottom());
        assert_eq!(player.hitbox.center_x(), player.visual.center_x());
    }

    #[test]
    fn test_player_starts_standing() {
        let player = Player::default();
        assert!(player.on_ground);
        assert_eq!(player.visual.bottom(), VIEW_HEIGHT);
        assert_eq!(player.hitbox.top(), stand_hitbox_top());
        assert_hitbox_derived(&player);
    }

    #[test]
    fn test_duck_only_on_ground() {
        let mut player = Player::default();
        player.update(true);
        assert!(player.ducking);
        assert_eq!(player.visual.size, Vec2::new(SPINO_DUCK_W, SPINO_DUCK_H));
        assert_eq!(player.hitbox.top(), duck_hitbox_top());

        assert!(player.start_jump());
        player.update(true);
        assert!(!player.ducking);
        assert_eq!(player.visual.size, Vec2::new(SPINO_STAND_W, SPINO_STAND_H));
    }

    #[test]
    fn test_no_double_jump() {
        let mut player = Player::default();
        assert!(player.start_jump());
        player.update(false);
        assert!(!player.start_jump());
    }

    #[test]
    fn test_jump_lands() {
        let mut player = Player::default();
        player.start_jump();
        let mut peak = player.visual.bottom();
        let mut ticks = 0;
        while !player.on_ground {
            player.update(false);
            peak = peak.min(player.visual.bottom());
            ticks += 1;
            assert!(ticks < 200, "player never landed");
        }
        assert_eq!(player.visual.bottom(), VIEW_HEIGHT);
        assert_eq!(player.vy, 0.0);
        assert!(peak < VIEW_HEIGHT - 150.0);
    }

    #[test]
    fn test_ground_obstacle_leaves_screen() {
        let mut obstacle = Obstacle::ground();
        assert_eq!(obstacle.visual.left(), VIEW_WIDTH);
        assert_eq!(obstacle.visual.bottom(), VIEW_HEIGHT);
        let mut ticks = 0;
        while !obstacle.is_offscreen() {
            obstacle.update();
            ticks += 1;
        }
        // 800 + 66 = 866 pixels to travel, strictly past zero
        assert_eq!(ticks, 124);
    }

    #[test]
    fn test_flyer_band_nominal() {
        let band = flyer_band(stand_hitbox_top(), duck_hitbox_top());
        assert_eq!(band, FlyerBand::Range { min: 303, max: 332 });
    }

    #[test]
    fn test_flyer_band_degenerate_falls_back_to_midpoint() {
        let band = flyer_band(340.0, 330.0);
        assert_eq!(band, FlyerBand::Fallback(335));
    }

    #[test]
    fn test_flyer_in_band_is_duckable_but_not_standable() {
        let FlyerBand::Range { min, max } = flyer_band(stand_hitbox_top(), duck_hitbox_top()) else {
            panic!("expected a usable band");
        };
        let mut standing = Player::default();
        standing.update(false);
        let mut ducking = Player::default();
        ducking.update(true);

        for bottom in min..=max {
            let mut flyer = Obstacle::flying(bottom as f32);
            // Slide the flier over the player
            while flyer.visual.left() > standing.visual.left() {
                flyer.update();
            }
            assert!(flyer.hitbox.overlaps(&standing.hitbox));
            assert!(!flyer.hitbox.overlaps(&ducking.hitbox));
        }
    }

    proptest! {
        #[test]
        fn prop_hitbox_follows_visual(inputs in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..300)) {
            let mut player = Player::default();
            for (jump, duck) in inputs {
                if jump {
                    player.start_jump();
                }
                player.update(duck);
                prop_assert_eq!(player.hitbox, hitbox_for(&player.visual, HITBOX_SCALE));
                prop_assert!(player.visual.bottom() <= VIEW_HEIGHT);
                prop_assert!(!(player.ducking && !player.on_ground));
            }
        }

        #[test]
        fn prop_flyer_band_leaves_gaps(stand_top in 200.0f32..400.0, duck_top in 200.0f32..400.0) {
            match flyer_band(stand_top, duck_top) {
                FlyerBand::Range { min, max } => {
                    prop_assert!(min <= max);
                    prop_assert!(min as f32 >= stand_top + FLYER_MARGIN - 1.0);
                    prop_assert!(max as f32 <= duck_top - SAFE_GAP);
                }
                FlyerBand::Fallback(bottom) => {
                    let lo = stand_top.min(duck_top) - 1.0;
                    let hi = stand_top.max(duck_top);
                    prop_assert!(bottom as f32 >= lo && bottom as f32 <= hi);
                }
            }
        }
    }
}
