//! Random (but reproducible) target frames and their landmark sets.

use super::noise::{unit_triple, UniformLandmarkNoise};
use crate::{FrameLandmarks, Landmark, Mat3, Pt3, Real, UnitQuat, Vec3};
use std::f64::consts::PI;

/// Ground-truth target frame: rotation (axes as columns) and origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticFrame {
    pub rotation: Mat3,
    pub origin: Pt3,
}

impl SyntheticFrame {
    /// Draw a frame from a random rotation vector with components in
    /// `[-π, π)` and an origin in `[-origin_extent, origin_extent]³`.
    pub fn sample(seed: u64, idx: usize, origin_extent: Real) -> Self {
        let scaled_axis = unit_triple(seed, idx, 0).map(|u| (u - 0.5) * 2.0 * PI);
        let rotation = UnitQuat::from_scaled_axis(Vec3::from(scaled_axis))
            .to_rotation_matrix()
            .into_inner();

        let o = unit_triple(seed, idx, 1).map(|u| (u - 0.5) * 2.0 * origin_extent);
        Self {
            rotation,
            origin: Pt3::from(o),
        }
    }

    /// Landmarks placed `axis_lengths[i]` along each frame axis.
    pub fn landmarks(&self, axis_lengths: [Real; 3]) -> FrameLandmarks {
        let along = |i: usize| self.origin + self.rotation.column(i) * axis_lengths[i];
        FrameLandmarks::new(self.origin, along(0), along(1), along(2))
    }

    /// Like [`Self::landmarks`], with deterministic noise added to the three
    /// axis points. The origin stays exact.
    pub fn noisy_landmarks(
        &self,
        axis_lengths: [Real; 3],
        noise: &UniformLandmarkNoise,
        set_idx: usize,
    ) -> FrameLandmarks {
        let mut lm = self.landmarks(axis_lengths);
        lm.x_point += noise.sample(set_idx, Landmark::XPoint);
        lm.y_point += noise.sample(set_idx, Landmark::YPoint);
        lm.z_point += noise.sample(set_idx, Landmark::ZPoint);
        lm
    }

    /// Frame axis `i` as a vector.
    pub fn axis(&self, i: usize) -> Vec3 {
        self.rotation.column(i).into_owned()
    }
}

/// `count` reproducible frames drawn from `seed`.
pub fn synthetic_frames(seed: u64, count: usize, origin_extent: Real) -> Vec<SyntheticFrame> {
    (0..count)
        .map(|idx| SyntheticFrame::sample(seed, idx, origin_extent))
        .collect()
}
