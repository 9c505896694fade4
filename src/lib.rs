//! Spino Run - a side-scrolling dinosaur runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, entities, spawning, collisions)
//! - `game`: Session state machine (menu, playing, paused, countdown, game over)
//! - `renderer`: Scene building on top of an abstract drawing canvas
//! - `records`: Best score/distance persistence
//! - `audio`, `input`: Thin collaborator seams for sound cues and input events
//! - `autopilot`: Bot that plays attract mode

pub mod audio;
pub mod autopilot;
pub mod game;
pub mod input;
pub mod records;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{GamePhase, Session};
pub use records::Records;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical viewport size in pixels
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 400.0;
    /// Number of pixel columns in a terrain height cache (inclusive right edge)
    pub const VIEW_COLUMNS: usize = VIEW_WIDTH as usize + 1;

    /// Target frame rate; the simulation advances once per rendered frame
    pub const FPS: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / FPS as f32;
    /// Longest frame the run simulation will account for (stalls are clamped)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Player sprite sizes
    pub const SPINO_STAND_W: f32 = 150.0;
    pub const SPINO_STAND_H: f32 = 150.0;
    pub const SPINO_DUCK_W: f32 = 192.0;
    pub const SPINO_DUCK_H: f32 = 84.0;
    /// Player anchor (left edge of the visual box)
    pub const PLAYER_X: f32 = 70.0;

    /// Obstacle sprite sizes
    pub const CACTUS_W: f32 = 66.0;
    pub const CACTUS_H: f32 = 126.0;
    pub const PTERA_W: f32 = 144.0;
    pub const PTERA_H: f32 = 90.0;

    /// World scroll in pixels per tick
    pub const SCROLL_SPEED: f32 = 7.0;
    /// Gravity in pixels per tick²
    pub const GRAVITY: f32 = 0.7;
    /// Jump take-off speed in pixels per tick
    pub const JUMP_V: f32 = 18.0;
    /// Distance units gained per second of play
    pub const DISTANCE_SPEED: f64 = 20.0;
    /// Distance between checkpoint cues
    pub const CHECKPOINT_STEP: f64 = 500.0;

    /// Hitboxes are this fraction of the visual box
    pub const HITBOX_SCALE: f32 = 0.7;
    /// Clearance between a flier's bottom and the ducking hitbox top
    pub const SAFE_GAP: f32 = 10.0;
    /// Clearance between the standing hitbox top and a flier's bottom
    pub const FLYER_MARGIN: f32 = 8.0;
    /// Fliers only appear after this much distance
    pub const FLYER_MIN_DISTANCE: f64 = 500.0;
    pub const FLYER_CHANCE: f32 = 0.4;

    /// Spawn interval ranges in ticks (inclusive)
    pub const FIRST_SPAWN_TICKS: (u32, u32) = (50, 95);
    pub const SPAWN_TICKS: (u32, u32) = (55, 100);

    /// Background bands
    pub const GROUND_H: f32 = 70.0;
    pub const HILLS_H: f32 = 160.0;
    pub const SKY_H: f32 = VIEW_HEIGHT - GROUND_H - HILLS_H;
    pub const GROUND_TOP: f32 = VIEW_HEIGHT - GROUND_H;

    /// Hill heights are sampled every N columns and interpolated between
    pub const HILL_SAMPLE_STEP: usize = 2;

    /// Tree billboards
    pub const TREE_BASE_W: f32 = 48.0;
    pub const TREE_BASE_H: f32 = 64.0;
    pub const TREE_SPACING: f32 = 200.0;
    pub const TREE_Y_OFFSET: f32 = 14.0;

    /// Clouds
    pub const CLOUD_COUNT: usize = 4;
    pub const CLOUD_SPAWN_OFFSET_MAX: i32 = 150;

    /// Background downscale factor for the blocky look
    pub const PIXELATE_FACTOR: u32 = 2;

    /// Resume countdown length in seconds
    pub const COUNTDOWN_SECS: f32 = 3.0;
}
