//! Sound cues
//!
//! The game only ever says "play this cue". Decoding and mixing belong to an
//! [`AudioSink`] provided by the platform; if there is none, or it fails,
//! the cue is simply skipped.

use thiserror::Error;

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// A distance checkpoint was crossed
    Checkpoint,
    /// Player hit an obstacle
    Death,
    /// Menu button activated
    MenuClick,
    /// Menu selection moved
    MenuHover,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Jump,
        SoundEffect::Checkpoint,
        SoundEffect::Death,
        SoundEffect::MenuClick,
        SoundEffect::MenuHover,
    ];

    /// Mix level of this cue before user volumes
    pub fn base_volume(self) -> f32 {
        match self {
            SoundEffect::Jump => 0.8,
            SoundEffect::Checkpoint => 0.6,
            SoundEffect::Death => 0.9,
            SoundEffect::MenuClick => 0.55,
            SoundEffect::MenuHover => 0.35,
        }
    }

    /// Conventional file name of the cue in the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Checkpoint => "checkpoint.wav",
            SoundEffect::Death => "death.wav",
            SoundEffect::MenuClick => "menu_click.wav",
            SoundEffect::MenuHover => "menu_hover.wav",
        }
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound cue {0:?} is not loaded")]
    CueUnavailable(SoundEffect),
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Platform audio output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink: Some(sink),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with no output; every cue is dropped
    pub fn silent() -> Self {
        Self {
            sink: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volumes and mute state from user settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Final volume a cue would be played at
    pub fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume * effect.base_volume()
        }
    }

    /// Play a sound effect (fire and forget)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(e) = sink.play(effect, vol) {
            log::debug!("Skipping {:?}: {}", effect, e);
        }
    }

    pub fn play_all(&mut self, effects: &[SoundEffect]) {
        for &effect in effects {
            self.play(effect);
        }
    }
}

/// Sink that records cues instead of playing them (demo runs and tests)
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    pub played: std::rc::Rc<std::cell::RefCell<Vec<(SoundEffect, f32)>>>,
}

impl AudioSink for CueLog {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        self.played.borrow_mut().push((effect, volume));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl AudioSink for Broken {
        fn play(&mut self, effect: SoundEffect, _volume: f32) -> Result<(), AudioError> {
            Err(AudioError::CueUnavailable(effect))
        }
    }

    #[test]
    fn test_silent_manager_drops_everything() {
        let mut audio = AudioManager::silent();
        for effect in SoundEffect::ALL {
            audio.play(effect);
        }
    }

    #[test]
    fn test_failing_sink_is_not_fatal() {
        let mut audio = AudioManager::new(Box::new(Broken));
        audio.play(SoundEffect::Death);
    }

    #[test]
    fn test_volume_combines_levels() {
        let log = CueLog::default();
        let played = log.played.clone();
        let mut audio = AudioManager::new(Box::new(log));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(1.0);
        audio.play(SoundEffect::Jump);
        let played = played.borrow();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].0, SoundEffect::Jump);
        assert!((played[0].1 - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let log = CueLog::default();
        let played = log.played.clone();
        let mut audio = AudioManager::new(Box::new(log));
        audio.set_muted(true);
        audio.play_all(&SoundEffect::ALL);
        assert!(played.borrow().is_empty());
    }
}
