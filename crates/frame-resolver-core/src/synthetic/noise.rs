//! Deterministic noise helpers for synthetic landmark sets.
//!
//! The functions here avoid `thread_rng` and do not depend on the internal
//! algorithm of `rand` RNGs. This keeps synthetic datasets stable across
//! versions and platforms.

use crate::{Landmark, Real, Vec3};

/// Deterministic uniform landmark noise in `[-max_abs, +max_abs]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformLandmarkNoise {
    /// Base seed controlling the pseudo-random sequence.
    pub seed: u64,
    /// Maximum absolute per-coordinate noise.
    pub max_abs: Real,
}

impl Default for UniformLandmarkNoise {
    fn default() -> Self {
        Self {
            seed: 0,
            max_abs: 0.0,
        }
    }
}

impl UniformLandmarkNoise {
    /// Sample a deterministic 3D offset for a given `(set_idx, landmark)` key.
    #[inline]
    pub fn sample(&self, set_idx: usize, landmark: Landmark) -> Vec3 {
        let max_abs = self.max_abs.abs();
        if max_abs == 0.0 {
            return Vec3::zeros();
        }

        let [u, v, w] = unit_triple(self.seed, set_idx, landmark as usize);

        // Map [0, 1) -> [-max_abs, +max_abs].
        Vec3::new(u - 0.5, v - 0.5, w - 0.5) * (2.0 * max_abs)
    }
}

/// Three deterministic values in `[0, 1)` for a `(seed, a, b)` key.
pub(crate) fn unit_triple(seed: u64, a: usize, b: usize) -> [Real; 3] {
    let key = mix_key(seed, a, b);
    [
        u64_to_unit_f64(splitmix64(key)),
        u64_to_unit_f64(splitmix64(key ^ 0x94D0_49BB_1331_11EB)),
        u64_to_unit_f64(splitmix64(key ^ 0xD6E8_FEB8_6659_FD93)),
    ]
}

#[inline]
fn mix_key(seed: u64, a: usize, b: usize) -> u64 {
    // SplitMix64 stream selection via a stable integer mix.
    seed ^ (a as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (b as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9)
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn u64_to_unit_f64(x: u64) -> Real {
    // Top 53 bits as a double in [0, 1).
    let mantissa = x >> 11;
    (mantissa as Real) * (1.0 / ((1u64 << 53) as Real))
}
