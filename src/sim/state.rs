//! Per-run simulation state
//!
//! Everything a run needs lives in one owned `RunState`. It is created when
//! a run starts, advanced by [`super::tick::tick`] while playing, and dropped
//! when the run ends.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::decor::FernField;
use super::entity::{Obstacle, Player};
use super::spawn::SpawnController;

/// Salt separating the background's cloud stream from the gameplay stream
const BACKGROUND_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Complete run state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (spawn timing, obstacle choice, ferns)
    pub(crate) rng: Pcg32,
    pub player: Player,
    /// Live obstacles in spawn order (also left-to-right on screen)
    pub obstacles: Vec<Obstacle>,
    pub spawner: SpawnController,
    pub background: Background,
    pub ferns: FernField,
    /// Obstacles that scrolled past
    pub score: u32,
    /// Distance run so far (monotonic)
    pub distance: f64,
    /// Highest checkpoint index reached (-1 before the first tick)
    pub last_checkpoint: i64,
    /// Simulation ticks elapsed
    pub ticks: u64,
    /// Set once the player hits an obstacle; the run no longer advances
    pub crashed: bool,
}

impl RunState {
    pub fn new(seed: u64, tree_variants: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = SpawnController::new(&mut rng);
        let ferns = FernField::new(&mut rng);
        Self {
            seed,
            rng,
            player: Player::default(),
            obstacles: Vec::new(),
            spawner,
            background: Background::new(seed ^ BACKGROUND_SEED_SALT, tree_variants),
            ferns,
            score: 0,
            distance: 0.0,
            last_checkpoint: -1,
            ticks: 0,
            crashed: false,
        }
    }

    /// Whole distance units, as shown and recorded
    pub fn distance_units(&self) -> u32 {
        self.distance.floor() as u32
    }
}
