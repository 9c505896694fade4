//! Attract-mode bot
//!
//! Reads the session the same way a player reads the screen and produces
//! the keys a player would press: jump over cacti, duck under fliers, and
//! confirm its way through menus back into a run.

use crate::game::{GamePhase, Session};
use crate::input::{FrameInput, Key};
use crate::sim::{ObstacleKind, RunState};
use crate::ui::{Menu, MenuAction};

/// Take off when a cactus is this close (horizontal gap between hitboxes)
const JUMP_LEAD: f32 = 56.0;
/// Start ducking when a flier is this close
const DUCK_LEAD: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    pub jump_lead: f32,
    pub duck_lead: f32,
    /// Restart after a game over instead of idling on the screen
    pub auto_restart: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            jump_lead: JUMP_LEAD,
            duck_lead: DUCK_LEAD,
            auto_restart: true,
        }
    }
}

impl Autopilot {
    /// Input for the next frame of `session`
    pub fn input(&self, session: &Session) -> FrameInput {
        match session.phase {
            GamePhase::Menu => press_toward(&session.main_menu, MenuAction::Play),
            GamePhase::Paused => press_toward(&session.pause_menu, MenuAction::Resume),
            GamePhase::GameOver if self.auto_restart => {
                press_toward(&session.game_over_menu, MenuAction::Restart)
            }
            GamePhase::Playing => session
                .run
                .as_ref()
                .map(|run| self.play(run))
                .unwrap_or_default(),
            GamePhase::GameOver | GamePhase::Countdown => FrameInput::default(),
        }
    }

    fn play(&self, run: &RunState) -> FrameInput {
        let player = &run.player.hitbox;
        // Nearest obstacle not yet fully behind the player
        let next = run
            .obstacles
            .iter()
            .filter(|o| o.hitbox.right() > player.left())
            .min_by(|a, b| a.hitbox.left().total_cmp(&b.hitbox.left()));

        let Some(obstacle) = next else {
            return FrameInput::default();
        };
        let gap = obstacle.hitbox.left() - player.right();

        match obstacle.kind {
            ObstacleKind::Ground if gap > 0.0 && gap <= self.jump_lead => {
                if run.player.on_ground {
                    log::debug!("Autopilot jump (gap {:.1})", gap);
                    FrameInput::key(Key::Up)
                } else {
                    FrameInput::default()
                }
            }
            ObstacleKind::Flying if gap <= self.duck_lead => FrameInput {
                duck_held: true,
                ..Default::default()
            },
            _ => FrameInput::default(),
        }
    }
}

/// Move the selection to `action`'s button, or confirm once it is selected
fn press_toward(menu: &Menu, action: MenuAction) -> FrameInput {
    if menu.selected_action() == Some(action) {
        FrameInput::key(Key::Enter)
    } else {
        FrameInput::key(Key::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::records::MemoryRecordStore;
    use crate::sim::Obstacle;

    fn playing() -> Session {
        let mut s = Session::new(Box::new(MemoryRecordStore::default()), 1337);
        let pilot = Autopilot::default();
        s.frame(&pilot.input(&s), SIM_DT);
        assert_eq!(s.phase, GamePhase::Playing);
        s
    }

    fn place(obstacle: &mut Obstacle, gap: f32, player_right: f32) {
        let dx = player_right + gap - obstacle.hitbox.left();
        obstacle.visual.shift_x(dx);
        obstacle.hitbox.shift_x(dx);
    }

    #[test]
    fn test_navigates_menu_to_play() {
        let mut s = Session::new(Box::new(MemoryRecordStore::default()), 1);
        s.main_menu.selected = 1;
        let pilot = Autopilot::default();
        for _ in 0..3 {
            let input = pilot.input(&s);
            s.frame(&input, SIM_DT);
        }
        assert_eq!(s.phase, GamePhase::Playing);
    }

    #[test]
    fn test_jumps_when_cactus_is_close() {
        let s = playing();
        let mut run = s.run.clone().unwrap();
        let right = run.player.hitbox.right();
        let mut far = Obstacle::ground();
        place(&mut far, 200.0, right);
        run.obstacles.push(far);
        let pilot = Autopilot::default();
        assert!(pilot.play(&run).events.is_empty());

        place(&mut run.obstacles[0], 40.0, right);
        assert_eq!(pilot.play(&run).events, FrameInput::key(Key::Up).events);
    }

    #[test]
    fn test_ducks_under_flier() {
        let s = playing();
        let mut run = s.run.clone().unwrap();
        let right = run.player.hitbox.right();
        let mut flier = Obstacle::flying(320.0);
        place(&mut flier, 30.0, right);
        run.obstacles.push(flier);
        let input = Autopilot::default().play(&run);
        assert!(input.duck_held);
        assert!(input.events.is_empty());
    }

    #[test]
    fn test_clears_ground_obstacles() {
        // Fliers only show up past 500 distance (1500 ticks), so the first
        // 1400 frames are pure cactus jumping
        let mut s = playing();
        let pilot = Autopilot::default();
        for _ in 0..1400 {
            let input = pilot.input(&s);
            s.frame(&input, SIM_DT);
            assert_eq!(s.phase, GamePhase::Playing);
        }
        assert!(s.run.as_ref().unwrap().score >= 5);
    }

    #[test]
    fn test_restarts_after_game_over() {
        let mut s = playing();
        let run = s.run.as_mut().unwrap();
        let right = run.player.hitbox.right();
        let mut o = Obstacle::ground();
        place(&mut o, -20.0, right);
        run.obstacles.push(o);
        s.frame(&FrameInput::default(), SIM_DT);
        assert_eq!(s.phase, GamePhase::GameOver);

        let idle = Autopilot {
            auto_restart: false,
            ..Default::default()
        };
        assert!(idle.input(&s).events.is_empty());

        let pilot = Autopilot::default();
        s.frame(&pilot.input(&s), SIM_DT);
        assert_eq!(s.phase, GamePhase::Playing);
    }
}
