//! Coherent noise field shared by all generation stages.
//!
//! Wraps simplex noise seeded from the chunk RNG and guarantees samples in
//! `[-1, 1]` for 2D and 3D coordinates.

use noise::{NoiseFn, Simplex};
use rand::RngCore;
use rand_chacha::ChaCha8Rng;

/// Deterministic 2D/3D coherent noise for a fixed seed.
#[derive(Clone, Debug)]
pub struct NoiseField {
    noise: Simplex,
    seed: u32,
}

impl NoiseField {
    /// Create a field for an explicit noise seed.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Simplex::new(seed),
            seed,
        }
    }

    /// Build a field from the next draw of the RNG.
    ///
    /// Advances the RNG by one 32-bit draw.
    pub fn from_rng(rng: &mut ChaCha8Rng) -> Self {
        Self::new(rng.next_u32())
    }

    /// The seed the underlying simplex permutation was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at a 2D coordinate.
    #[inline]
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        self.noise.get([x, y]).clamp(-1.0, 1.0)
    }

    /// Sample the field at a 3D coordinate.
    #[inline]
    pub fn sample_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z]).clamp(-1.0, 1.0)
    }
}
