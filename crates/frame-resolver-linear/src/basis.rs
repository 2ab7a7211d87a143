//! Orthonormal basis construction from raw axis landmarks.
//!
//! The x landmark gives the x axis exactly. The secondary landmark (y by
//! default) only fixes the plane: the frame normal is obtained by a cross
//! product, which discards whatever part of the secondary direction is
//! parallel to x. The third axis then completes a right-handed triple.

use crate::{Degeneracy, ResolveError};
use frame_resolver_core::{
    Axis, FrameLandmarks, HandednessPolicy, Mat3, Real, ResolveOptions, SecondaryAxis, Vec3,
};
use log::{debug, warn};

/// Right-handed orthonormal triple `(ex, ey, ez)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub ex: Vec3,
    pub ey: Vec3,
    pub ez: Vec3,
}

impl Basis {
    /// Rotation matrix with the basis vectors as columns.
    ///
    /// Maps target-frame coordinates into the reference frame.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_columns(&[self.ex, self.ey, self.ez])
    }

    /// Basis vector for `axis`.
    pub fn axis(&self, axis: Axis) -> Vec3 {
        match axis {
            Axis::X => self.ex,
            Axis::Y => self.ey,
            Axis::Z => self.ez,
        }
    }
}

/// Build the orthonormal basis described by `landmarks`.
///
/// Fails with [`ResolveError::DegenerateInput`] if a landmark is not finite,
/// an axis landmark coincides with the origin, or the x and secondary
/// directions are parallel. Under [`HandednessPolicy::Reject`] a cross-check
/// landmark pointing against its derived axis fails with
/// [`ResolveError::HandednessMismatch`].
pub fn construct_basis(
    landmarks: &FrameLandmarks,
    opts: &ResolveOptions,
) -> Result<Basis, ResolveError> {
    if let Some(which) = landmarks.first_non_finite() {
        return Err(Degeneracy::NonFinite(which).into());
    }

    let raw = landmarks.axis_vectors();
    for (axis, v) in [Axis::X, Axis::Y, Axis::Z].into_iter().zip(raw.iter()) {
        let n = v.norm();
        debug!("raw {axis} direction norm {n:.6e}");
        if n <= opts.zero_length_eps {
            return Err(Degeneracy::ZeroAxis(axis).into());
        }
    }

    let ex = raw[0] / raw[0].norm();
    let secondary = opts.secondary_axis.axis();
    let normal = unit_normal(&ex, &raw[secondary.index()], secondary, opts.parallel_eps)?;

    let basis = match opts.secondary_axis {
        SecondaryAxis::Y => {
            let ez = normal;
            Basis {
                ex,
                ey: ez.cross(&ex),
                ez,
            }
        }
        SecondaryAxis::Z => {
            let ey = -normal;
            Basis {
                ex,
                ey,
                ez: ex.cross(&ey),
            }
        }
    };

    check_handedness(&basis, landmarks, opts)?;
    Ok(basis)
}

/// `normalize(ex × v)`, or a parallel-axes error when `v ∥ ex`.
fn unit_normal(ex: &Vec3, v: &Vec3, axis: Axis, parallel_eps: Real) -> Result<Vec3, ResolveError> {
    let n = ex.cross(v);
    let sin_angle = n.norm() / v.norm();
    debug!("sin(x, {axis}) = {sin_angle:.6e}");
    if sin_angle <= parallel_eps {
        return Err(Degeneracy::ParallelAxes(Axis::X, axis).into());
    }
    Ok(n / n.norm())
}

fn check_handedness(
    basis: &Basis,
    landmarks: &FrameLandmarks,
    opts: &ResolveOptions,
) -> Result<(), ResolveError> {
    if opts.handedness == HandednessPolicy::Ignore {
        return Ok(());
    }

    let axis = opts.secondary_axis.check_axis();
    let raw = landmarks.axis_vector(axis);
    let cos_angle = basis.axis(axis).dot(&raw) / raw.norm();
    if cos_angle >= -opts.handedness_eps {
        return Ok(());
    }

    match opts.handedness {
        HandednessPolicy::Reject => Err(ResolveError::HandednessMismatch { axis, cos_angle }),
        HandednessPolicy::Warn | HandednessPolicy::Ignore => {
            warn!(
                "{axis} landmark points against the derived right-handed {axis} axis \
                 (cos = {cos_angle:.6}); keeping the right-handed frame"
            );
            Ok(())
        }
    }
}
