//! Seeded 1-D fractal value noise
//!
//! Each octave interpolates (smoothstep) between hashed lattice values at the
//! integer floor/ceil of the scaled coordinate. Octaves double in frequency
//! and are weighted by `persistence^o`; the sum is normalized by the total
//! weight, so the result always lies in [0, 1].

use serde::{Deserialize, Serialize};

/// Multiplier that spreads seeds apart in lattice space
const SEED_PRIME: i64 = 374_761_393;
/// Per-octave seed salt
const OCTAVE_SALT: i64 = 101;

/// Integer avalanche hash (xor-shift, multiply, xor-shift)
///
/// The first mixing step works on the full 64-bit input so large seeds still
/// influence the result; everything after is reduced to 32 bits.
pub fn hash_u32(n: i64) -> u32 {
    let n = (n ^ 61) ^ (n >> 16);
    let mut h = n.wrapping_add(n.wrapping_shl(3)) as u32;
    h ^= h >> 4;
    h = h.wrapping_mul(0x27d4_eb2d);
    h ^= h >> 15;
    h
}

/// Pseudo-random value in [0, 1] for lattice point `i` under `seed`
#[inline]
pub fn rand01(i: i64, seed: i64) -> f64 {
    hash_u32(i.wrapping_add(SEED_PRIME.wrapping_mul(seed))) as f64 / u32::MAX as f64
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Fractal value noise over a continuous 1-D domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseSource {
    pub seed: i64,
    pub octaves: u32,
    pub persistence: f64,
    /// Scale applied by [`NoiseSource::sample`] before evaluating noise
    pub base_freq: f64,
}

impl NoiseSource {
    pub fn new(seed: i64, octaves: u32, persistence: f64, base_freq: f64) -> Self {
        Self {
            seed,
            octaves,
            persistence,
            base_freq,
        }
    }

    /// Single-octave value noise at `x`
    pub fn value_noise(&self, x: f64, octave: u32) -> f64 {
        let i0 = x.floor();
        let t = smoothstep(x - i0);
        let i0 = i0 as i64;
        let salt = self.seed.wrapping_add(octave as i64 * OCTAVE_SALT);
        let v0 = rand01(i0, salt);
        let v1 = rand01(i0 + 1, salt);
        v0 * (1.0 - t) + v1 * t
    }

    /// Fractal noise at `x` (already in noise-domain units), in [0, 1]
    pub fn noise(&self, x: f64) -> f64 {
        let mut amp = 1.0;
        let mut freq = 1.0;
        let mut total = 0.0;
        let mut norm = 0.0;
        for o in 0..self.octaves {
            total += self.value_noise(x * freq, o) * amp;
            norm += amp;
            amp *= self.persistence;
            freq *= 2.0;
        }
        total / f64::max(1e-6, norm)
    }

    /// Fractal noise at a world position, scaled by the base frequency
    #[inline]
    pub fn sample(&self, position: f64) -> f64 {
        self.noise(position * self.base_freq)
    }
}
