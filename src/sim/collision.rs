//! Player/obstacle collision
//!
//! Plain axis-aligned overlap between hitboxes. There is no damage model:
//! any overlap ends the run.

use super::entity::Obstacle;
use super::rect::Rect;

/// Index of the first obstacle whose hitbox overlaps the player's
pub fn first_collision(player_hitbox: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| o.hitbox.overlaps(player_hitbox))
}
