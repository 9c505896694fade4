//! Input snapshot handed to the session once per frame
//!
//! The platform layer polls its devices and fills a `FrameInput`: discrete
//! events that happened since the last frame, the held state of the duck
//! keys, and the pointer position.

use glam::Vec2;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow / W: jump, menu up
    Up,
    /// Down arrow / S: menu down (ducking is read from `duck_held`)
    Down,
    /// Space: jump, menu confirm
    Space,
    /// Enter: menu confirm
    Enter,
    /// Escape: pause
    Escape,
}

impl Key {
    pub fn is_jump(self) -> bool {
        matches!(self, Key::Up | Key::Space)
    }

    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Primary pointer button pressed at a screen position
    Click(Vec2),
    /// The window was closed
    Quit,
}

/// Everything the session needs from the input devices for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    /// Down / S / right-Ctrl currently held
    pub duck_held: bool,
    /// Pointer position, if the pointer is over the window
    pub pointer: Option<Vec2>,
}

impl FrameInput {
    pub fn key(key: Key) -> Self {
        Self {
            events: vec![InputEvent::KeyDown(key)],
            ..Default::default()
        }
    }

    pub fn keys_down(&self) -> impl Iterator<Item = Key> + '_ {
        self.events.iter().filter_map(|e| match e {
            InputEvent::KeyDown(k) => Some(*k),
            _ => None,
        })
    }

    pub fn clicks(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.events.iter().filter_map(|e| match e {
            InputEvent::Click(p) => Some(*p),
            _ => None,
        })
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}
