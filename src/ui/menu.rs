//! Selectable button lists
//!
//! Menu, pause and game-over screens all share one navigation protocol:
//! Up/Down cycle the selection, hovering selects, Enter/Space or a click
//! activates. Selection changes and activations are reported separately so
//! each can have its own sound cue.

use glam::Vec2;

use crate::consts::*;
use crate::input::{FrameInput, Key};
use crate::sim::Rect;

/// Button height in pixels
const BUTTON_H: f32 = 52.0;

/// What a button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Exit,
    Resume,
    ExitToMenu,
    Restart,
    GoToMenu,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub action: MenuAction,
}

impl Button {
    /// Button of the given width centered horizontally at height `center_y`
    pub fn centered(label: &'static str, action: MenuAction, width: f32, center_y: f32) -> Self {
        Self {
            label,
            rect: Rect::new(
                VIEW_WIDTH / 2.0 - width / 2.0,
                center_y - BUTTON_H / 2.0,
                width,
                BUTTON_H,
            ),
            action,
        }
    }
}

/// Result of one frame of menu navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuResponse {
    pub activated: Option<MenuAction>,
    /// Selection moved (by keys or hover) this frame
    pub selection_changed: bool,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: &'static str,
    pub buttons: Vec<Button>,
    pub selected: usize,
}

impl Menu {
    pub fn new(title: &'static str, buttons: Vec<Button>) -> Self {
        Self {
            title,
            buttons,
            selected: 0,
        }
    }

    /// Title screen
    pub fn main() -> Self {
        Self::new(
            "Spino Run",
            vec![
                Button::centered("Play", MenuAction::Play, 260.0, 180.0),
                Button::centered("Exit", MenuAction::Exit, 260.0, 250.0),
            ],
        )
    }

    pub fn pause() -> Self {
        Self::new(
            "Paused",
            vec![
                Button::centered("Resume", MenuAction::Resume, 280.0, 190.0),
                Button::centered("Exit to menu", MenuAction::ExitToMenu, 300.0, 255.0),
            ],
        )
    }

    pub fn game_over() -> Self {
        Self::new(
            "Game Over",
            vec![
                Button::centered("Restart", MenuAction::Restart, 280.0, 210.0),
                Button::centered("Exit to menu", MenuAction::GoToMenu, 300.0, 270.0),
            ],
        )
    }

    /// Select the first button again
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn selected_action(&self) -> Option<MenuAction> {
        self.buttons.get(self.selected).map(|b| b.action)
    }

    fn button_at(&self, point: Vec2) -> Option<usize> {
        self.buttons.iter().position(|b| b.rect.contains_point(point))
    }

    /// Apply one frame of input
    pub fn navigate(&mut self, input: &FrameInput) -> MenuResponse {
        let count = self.buttons.len();
        if count == 0 {
            return MenuResponse::default();
        }
        let previous = self.selected;
        let mut changed = false;
        let mut activated = None;

        for key in input.keys_down() {
            match key {
                Key::Up => {
                    self.selected = (self.selected + count - 1) % count;
                    changed = true;
                }
                Key::Down => {
                    self.selected = (self.selected + 1) % count;
                    changed = true;
                }
                k if k.is_confirm() => activated = Some(self.selected),
                _ => {}
            }
        }

        if let Some(hovered) = input.pointer.and_then(|p| self.button_at(p)) {
            if hovered != self.selected {
                self.selected = hovered;
                changed = true;
            }
        }

        for click in input.clicks() {
            if let Some(i) = self.button_at(click) {
                activated = Some(i);
            }
        }

        MenuResponse {
            activated: activated.map(|i| self.buttons[i].action),
            selection_changed: changed || self.selected != previous,
        }
    }
}
