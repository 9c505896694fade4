//! Game settings and preferences
//!
//! Stored as JSON next to the records file. Anything missing or unreadable
//! falls back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::PIXELATE_FACTOR;
use crate::records::RECORDS_FILE;

/// Default settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Largest background pixelation factor accepted
const MAX_PIXELATE_FACTOR: u32 = 8;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Visuals ===
    /// Background downscale factor (1 disables pixelation)
    pub pixelate_factor: u32,
    /// Show FPS counter
    pub show_fps: bool,

    // === Runs ===
    /// Where best score / distance are kept
    pub records_path: PathBuf,
    /// Fixed seed for every run; `None` derives a new seed per run
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pixelate_factor: PIXELATE_FACTOR,
            show_fps: false,
            records_path: PathBuf::from(RECORDS_FILE),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        Ok(settings.validated())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp every value into its usable range
    pub fn validated(mut self) -> Self {
        self.master_volume = clamp_unit(self.master_volume);
        self.sfx_volume = clamp_unit(self.sfx_volume);
        self.pixelate_factor = self.pixelate_factor.clamp(1, MAX_PIXELATE_FACTOR);
        self
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spino-run-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        assert_eq!(Settings::load(temp_path("nope.json")), Settings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"muted": true, "seed": 42}"#).unwrap();
        assert!(s.muted);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.pixelate_factor, PIXELATE_FACTOR);
        assert_eq!(s.records_path, PathBuf::from(RECORDS_FILE));
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let path = temp_path("clamp.json");
        fs::write(
            &path,
            r#"{"master_volume": 3.5, "sfx_volume": -1.0, "pixelate_factor": 0}"#,
        )
        .unwrap();
        let s = Settings::load(&path);
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.sfx_volume, 0.0);
        assert_eq!(s.pixelate_factor, 1);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bad_json_falls_back() {
        let path = temp_path("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::try_load(&path),
            Err(SettingsError::Json(_))
        ));
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.json");
        let settings = Settings {
            muted: true,
            seed: Some(9),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }
}
