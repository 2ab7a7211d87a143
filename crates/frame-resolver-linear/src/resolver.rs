//! Landmarks to rigid transform: the full resolution pipeline.
//!
//! `landmarks -> axis vectors -> orthonormal basis -> rotation -> quaternion
//! -> homogeneous matrix`. Each call is pure and independent, so a single
//! [`FrameResolver`] can be shared freely across threads.

use crate::{assemble_transform, construct_basis, ResolveError, RigidTransform};
use frame_resolver_core::{FrameLandmarks, Pt3, ResolveOptions};
use log::debug;

/// Resolves target frames from landmark sets with fixed options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameResolver {
    pub options: ResolveOptions,
}

/// Resolve the transform of the frame with origin `origin` and axes pointing
/// towards `p_x`, `p_y`, `p_z`, using default options.
///
/// The translation is `origin` itself: the reference frame origin is the
/// coordinate zero point.
pub fn resolve_transform(
    origin: Pt3,
    p_x: Pt3,
    p_y: Pt3,
    p_z: Pt3,
) -> Result<RigidTransform, ResolveError> {
    FrameResolver::new().resolve(&FrameLandmarks::new(origin, p_x, p_y, p_z))
}

impl FrameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Resolve a single landmark set.
    pub fn resolve(&self, landmarks: &FrameLandmarks) -> Result<RigidTransform, ResolveError> {
        let basis = construct_basis(landmarks, &self.options)?;
        let tf = assemble_transform(&basis.rotation(), &landmarks.origin.coords, &self.options)?;
        debug!(
            "resolved frame: q(xyzw) = {:?}, t = {:?}",
            tf.quaternion_xyzw(),
            tf.translation.as_slice()
        );
        Ok(tf)
    }

    /// Resolve each landmark set independently.
    ///
    /// A failing set does not affect the others.
    pub fn resolve_all(
        &self,
        landmarks: &[FrameLandmarks],
    ) -> Vec<Result<RigidTransform, ResolveError>> {
        landmarks.iter().map(|lm| self.resolve(lm)).collect()
    }
}
