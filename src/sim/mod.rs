//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed update per frame
//! - Seeded RNG only (no global random state)
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod background;
pub mod billboard;
pub mod collision;
pub mod decor;
pub mod entity;
pub mod noise;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod terrain;
pub mod tick;

pub use background::Background;
pub use billboard::{Billboard, BillboardPlacer, SlotProp};
pub use collision::first_collision;
pub use entity::{FlyerBand, Obstacle, ObstacleKind, Player, flyer_band};
pub use noise::NoiseSource;
pub use rect::{Rect, hitbox_for};
pub use spawn::SpawnController;
pub use state::RunState;
pub use terrain::{LayerConfig, TerrainLayer};
pub use tick::{RunEvent, TickInput, tick};
