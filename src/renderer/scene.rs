//! Frame composition
//!
//! Turns a [`Session`] into canvas calls. Layer order: sky, sun, clouds, far
//! hills, near hills, trees, ground, ferns; that whole background is
//! pixelated, then obstacles, player, HUD and any overlay go on top at full
//! resolution.

use glam::Vec2;

use super::canvas::{Anchor, Canvas, Color, Font, SpriteId, Text};
use super::shapes;
use crate::consts::*;
use crate::game::{GamePhase, Session};
use crate::records::Records;
use crate::settings::Settings;
use crate::sim::background::SUN_RADIUS;
use crate::sim::decor::FernField;
use crate::sim::{Background, Obstacle, ObstacleKind, Player, Rect, RunState};
use crate::ui::Menu;

pub const SKY_COLOR: Color = Color::rgb(130, 185, 240);
pub const SUN_COLOR: Color = Color::rgb(255, 230, 120);
pub const SUN_RING_COLOR: Color = Color::rgb(255, 240, 160);
pub const CLOUD_COLOR: Color = Color::rgb(245, 245, 255);
pub const HILL_FAR_COLOR: Color = Color::rgb(45, 100, 60);
pub const HILL_NEAR_COLOR: Color = Color::rgb(60, 120, 70);
pub const GROUND_COLOR: Color = Color::rgb(70, 160, 80);
pub const FERN_COLOR: Color = Color::rgb(25, 85, 50);
const TRUNK_COLOR: Color = Color::rgb(92, 64, 48);
const FIR_COLOR: Color = Color::rgb(40, 110, 55);
const FIR_EDGE_COLOR: Color = Color::rgb(28, 88, 46);

// Stand-ins when sprite images are missing
const SPINO_FALLBACK: Color = Color::rgb(96, 140, 60);
const CACTUS_FALLBACK: Color = Color::rgb(34, 120, 50);
const PTERA_FALLBACK: Color = Color::rgb(150, 90, 70);

/// Frame-level presentation options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub pixelate_factor: u32,
    /// Measured frame rate to show in the corner, if enabled
    pub fps: Option<f32>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            pixelate_factor: PIXELATE_FACTOR,
            fps: None,
        }
    }
}

impl SceneOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            pixelate_factor: settings.pixelate_factor,
            fps: None,
        }
    }
}

/// Draw the whole frame for the session's current phase
pub fn draw_session(canvas: &mut dyn Canvas, session: &Session, opts: &SceneOptions) {
    match session.phase {
        GamePhase::Menu => {
            draw_background(canvas, &session.menu_background, None);
            canvas.pixelate(opts.pixelate_factor);
            draw_menu(canvas, &session.main_menu, 90.0);
        }
        GamePhase::Playing => {
            if let Some(run) = &session.run {
                draw_run(canvas, run, opts);
                draw_hud(canvas, run, &session.records);
            }
        }
        GamePhase::Paused => {
            draw_frozen_run(canvas, session, opts, 120);
            draw_menu(canvas, &session.pause_menu, 110.0);
        }
        GamePhase::Countdown => {
            draw_frozen_run(canvas, session, opts, 100);
            if let Some(n) = session.countdown_number() {
                canvas.text(&Text::new(
                    n.to_string(),
                    Font::Huge,
                    Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0),
                    Anchor::Center,
                ));
            }
        }
        GamePhase::GameOver => {
            draw_frozen_run(canvas, session, opts, 140);
            if let Some(run) = &session.run {
                let stats = format!(
                    "Score: {}   Distance: {}",
                    run.score,
                    run.distance_units()
                );
                canvas.text(&Text::new(
                    stats,
                    Font::Big,
                    Vec2::new(VIEW_WIDTH / 2.0, 150.0),
                    Anchor::Center,
                ));
            }
            if session.new_best {
                canvas.text(
                    &Text::new(
                        "New record!",
                        Font::Hud,
                        Vec2::new(VIEW_WIDTH / 2.0, 176.0),
                        Anchor::Center,
                    )
                    .color(SUN_COLOR),
                );
            }
            draw_menu(canvas, &session.game_over_menu, 110.0);
        }
    }

    if let Some(fps) = opts.fps {
        canvas.text(
            &Text::new(
                format!("{:.0} FPS", fps),
                Font::Hud,
                Vec2::new(VIEW_WIDTH - 90.0, 10.0),
                Anchor::TopLeft,
            )
            .color(Color::BLACK),
        );
    }
}

/// The last run frame under a translucent black overlay
fn draw_frozen_run(canvas: &mut dyn Canvas, session: &Session, opts: &SceneOptions, alpha: u8) {
    if let Some(run) = &session.run {
        draw_run(canvas, run, opts);
    }
    canvas.overlay(Color::BLACK.with_alpha(alpha));
}

/// Pixelated background with ferns, then obstacles and the player
pub fn draw_run(canvas: &mut dyn Canvas, run: &RunState, opts: &SceneOptions) {
    draw_background(canvas, &run.background, Some(&run.ferns));
    canvas.pixelate(opts.pixelate_factor);
    for obstacle in &run.obstacles {
        draw_obstacle(canvas, obstacle);
    }
    draw_player(canvas, &run.player);
}

pub fn draw_background(canvas: &mut dyn Canvas, bg: &Background, ferns: Option<&FernField>) {
    canvas.fill_rect(Rect::new(0.0, 0.0, VIEW_WIDTH, VIEW_HEIGHT), SKY_COLOR);
    canvas.fill_circle(bg.sun_pos, SUN_RADIUS, SUN_COLOR);
    canvas.circle_outline(bg.sun_pos, SUN_RADIUS + 6.0, SUN_RING_COLOR, 3.0);

    for cloud in &bg.clouds {
        for ellipse in shapes::cloud_ellipses(cloud) {
            canvas.fill_ellipse(ellipse, CLOUD_COLOR);
        }
    }

    canvas.fill_polygon(&bg.far.surface_polygon(), HILL_FAR_COLOR);
    canvas.fill_polygon(&bg.near.surface_polygon(), HILL_NEAR_COLOR);

    for tree in bg.visible_trees() {
        if !canvas.blit(SpriteId::Tree(tree.variant), tree.rect) {
            draw_fir(canvas, tree.rect);
        }
    }

    canvas.fill_rect(
        Rect::new(0.0, GROUND_TOP, VIEW_WIDTH, GROUND_H),
        GROUND_COLOR,
    );

    if let Some(field) = ferns {
        for fern in &field.ferns {
            let (root, tip) = shapes::fern_stem(fern);
            canvas.line(root, tip, FERN_COLOR, fern.stroke);
            for leaf in shapes::fern_leaves(fern) {
                canvas.stroke_polygon(&leaf, FERN_COLOR, fern.stroke);
            }
        }
    }
}

fn draw_fir(canvas: &mut dyn Canvas, rect: Rect) {
    let tree = shapes::fir_tree(rect);
    canvas.fill_rect(tree.trunk, TRUNK_COLOR);
    for tier in &tree.tiers {
        canvas.fill_polygon(tier, FIR_COLOR);
        canvas.stroke_polygon(tier, FIR_EDGE_COLOR, 2.0);
    }
}

fn draw_obstacle(canvas: &mut dyn Canvas, obstacle: &Obstacle) {
    let (sprite, fallback) = match obstacle.kind {
        ObstacleKind::Ground => (SpriteId::Cactus, CACTUS_FALLBACK),
        ObstacleKind::Flying => (SpriteId::Pteranodon, PTERA_FALLBACK),
    };
    if !canvas.blit(sprite, obstacle.visual) {
        canvas.fill_rect(obstacle.hitbox, fallback);
    }
}

fn draw_player(canvas: &mut dyn Canvas, player: &Player) {
    let sprite = if player.ducking {
        SpriteId::SpinoDuck
    } else {
        SpriteId::SpinoStand
    };
    if !canvas.blit(sprite, player.visual) {
        canvas.fill_rect(player.hitbox, SPINO_FALLBACK);
    }
}

/// Current and best score lines in the top-left corner
pub fn draw_hud(canvas: &mut dyn Canvas, run: &RunState, records: &Records) {
    let lines = [
        format!("Score: {}   Distance: {}", run.score, run.distance_units()),
        format!(
            "Best Score: {}   Best Distance: {}",
            records.best_score, records.best_distance
        ),
    ];
    for (i, line) in lines.into_iter().enumerate() {
        canvas.text(
            &Text::new(
                line,
                Font::Hud,
                Vec2::new(10.0, 10.0 + 25.0 * i as f32),
                Anchor::TopLeft,
            )
            .color(Color::BLACK),
        );
    }
}

/// Outlined title and the button list, with the selected button emphasized
pub fn draw_menu(canvas: &mut dyn Canvas, menu: &Menu, title_y: f32) {
    canvas.text(
        &Text::new(
            menu.title,
            Font::Huge,
            Vec2::new(VIEW_WIDTH / 2.0, title_y),
            Anchor::Center,
        )
        .outlined(Color::BLACK, 3),
    );

    for (i, button) in menu.buttons.iter().enumerate() {
        let selected = i == menu.selected;
        let (fill_alpha, border) = if selected { (180, 3.0) } else { (100, 2.0) };
        canvas.fill_rect(button.rect, Color::BLACK.with_alpha(fill_alpha));
        canvas.stroke_rect(button.rect, Color::WHITE, border, 8.0);
        let center = button.rect.pos + button.rect.size / 2.0;
        canvas.text(&Text::new(button.label, Font::Big, center, Anchor::Center));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{FrameInput, Key};
    use crate::records::MemoryRecordStore;
    use crate::renderer::canvas::{DrawCommand, DrawList};

    fn session() -> Session {
        Session::new(Box::new(MemoryRecordStore::default()), 1337)
    }

    fn start(s: &mut Session) {
        s.frame(&FrameInput::key(Key::Enter), SIM_DT);
        assert_eq!(s.phase, GamePhase::Playing);
    }

    fn all_sprites() -> Vec<SpriteId> {
        vec![
            SpriteId::SpinoStand,
            SpriteId::SpinoDuck,
            SpriteId::Cactus,
            SpriteId::Pteranodon,
            SpriteId::Tree(0),
        ]
    }

    #[test]
    fn test_menu_frame() {
        let s = session();
        let mut list = DrawList::new();
        draw_session(&mut list, &s, &SceneOptions::default());
        assert_eq!(list.commands[0], DrawCommand::FillRect(
            Rect::new(0.0, 0.0, VIEW_WIDTH, VIEW_HEIGHT),
            SKY_COLOR
        ));
        assert!(list.commands.contains(&DrawCommand::Pixelate(PIXELATE_FACTOR)));
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["Spino Run", "Play", "Exit"]);
    }

    #[test]
    fn test_background_is_pixelated_before_sprites() {
        let mut s = session();
        start(&mut s);
        let mut list = DrawList::with_sprites(all_sprites());
        draw_session(&mut list, &s, &SceneOptions::default());
        let pixelate = list
            .position(|c| matches!(c, DrawCommand::Pixelate(_)))
            .unwrap();
        let player = list
            .position(|c| matches!(c, DrawCommand::Blit(SpriteId::SpinoStand, _)))
            .unwrap();
        let ground = list
            .position(|c| matches!(c, DrawCommand::FillRect(_, col) if *col == GROUND_COLOR))
            .unwrap();
        assert!(ground < pixelate);
        assert!(pixelate < player);
    }

    #[test]
    fn test_missing_sprites_fall_back_to_shapes() {
        let mut s = session();
        start(&mut s);
        s.run.as_mut().unwrap().obstacles.push(Obstacle::ground());
        let mut list = DrawList::new();
        draw_session(&mut list, &s, &SceneOptions::default());
        assert!(!list.commands.iter().any(|c| matches!(c, DrawCommand::Blit(..))));
        let run = s.run.as_ref().unwrap();
        assert!(list
            .commands
            .contains(&DrawCommand::FillRect(run.player.hitbox, SPINO_FALLBACK)));
        assert!(list.commands.contains(&DrawCommand::FillRect(
            run.obstacles[0].hitbox,
            CACTUS_FALLBACK
        )));
        let trees = run.background.visible_trees().len();
        assert!(trees > 0);
        let trunks = list
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect(_, col) if *col == TRUNK_COLOR))
            .count();
        assert_eq!(trunks, trees);
    }

    #[test]
    fn test_playing_hud_shows_records() {
        let mut s = session();
        s.records = Records {
            best_score: 4,
            best_distance: 321,
        };
        start(&mut s);
        let mut list = DrawList::new();
        draw_session(&mut list, &s, &SceneOptions::default());
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(
            texts,
            vec![
                "Score: 0   Distance: 0",
                "Best Score: 4   Best Distance: 321"
            ]
        );
    }

    #[test]
    fn test_countdown_shows_number_over_overlay() {
        let mut s = session();
        start(&mut s);
        s.frame(&FrameInput::key(Key::Escape), SIM_DT);
        s.frame(&FrameInput::key(Key::Enter), SIM_DT);
        assert_eq!(s.phase, GamePhase::Countdown);
        let mut list = DrawList::new();
        draw_session(&mut list, &s, &SceneOptions::default());
        let overlay = list
            .position(|c| matches!(c, DrawCommand::Overlay(_)))
            .unwrap();
        assert_eq!(
            list.commands[overlay],
            DrawCommand::Overlay(Color::BLACK.with_alpha(100))
        );
        assert_eq!(list.texts().last(), Some("3"));
    }

    #[test]
    fn test_pause_overlay_and_menu() {
        let mut s = session();
        start(&mut s);
        s.frame(&FrameInput::key(Key::Escape), SIM_DT);
        let mut list = DrawList::new();
        draw_session(&mut list, &s, &SceneOptions::default());
        assert!(list
            .commands
            .contains(&DrawCommand::Overlay(Color::BLACK.with_alpha(120))));
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["Paused", "Resume", "Exit to menu"]);
    }

    #[test]
    fn test_fps_counter_when_enabled() {
        let s = session();
        let mut list = DrawList::new();
        let opts = SceneOptions {
            fps: Some(59.6),
            ..Default::default()
        };
        draw_session(&mut list, &s, &opts);
        assert_eq!(list.texts().last(), Some("60 FPS"));
    }
}
