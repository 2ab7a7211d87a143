//! Homogeneous transform assembly and the resolved transform type.

use crate::{canonicalize_quaternion, rotation_to_quaternion, ResolveError};
use frame_resolver_core::{
    orthonormality_error, quat_to_xyzw, Iso3, Mat3, Mat4, Pt3, Real, ResolveOptions, UnitQuat,
    Vec3,
};
use nalgebra::Translation3;
use serde::{Deserialize, Serialize};

/// Rigid transform mapping target-frame coordinates into the reference frame.
///
/// `p_ref = rotation * p_target + translation`. The rotation columns are the
/// target axes expressed in the reference frame and the translation is the
/// target origin. All four representations describe the same motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Proper rotation, `det = +1`.
    pub rotation: Mat3,
    /// Same rotation as a canonical-sign unit quaternion.
    pub quaternion: UnitQuat,
    pub translation: Vec3,
    /// `[R t; 0 0 0 1]`.
    pub matrix: Mat4,
}

/// Validate `rotation` and combine it with `translation` into a
/// [`RigidTransform`].
///
/// Fails with [`ResolveError::InvalidRotation`] if `det(rotation) < 0`
/// (a reflection), or if the matrix is not orthonormal with unit determinant
/// within `opts.rotation_eps`.
pub fn assemble_transform(
    rotation: &Mat3,
    translation: &Vec3,
    opts: &ResolveOptions,
) -> Result<RigidTransform, ResolveError> {
    let det = rotation.determinant();
    let orthonormality = orthonormality_error(rotation);
    let proper = det > 0.0
        && (det - 1.0).abs() <= opts.rotation_eps
        && orthonormality <= opts.rotation_eps;
    if !proper {
        return Err(ResolveError::InvalidRotation {
            det,
            orthonormality,
        });
    }

    let quaternion = rotation_to_quaternion(rotation)?;
    Ok(RigidTransform {
        rotation: *rotation,
        quaternion,
        translation: *translation,
        matrix: homogeneous(rotation, translation),
    })
}

fn homogeneous(rotation: &Mat3, translation: &Vec3) -> Mat4 {
    let mut m = Mat4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    m
}

impl RigidTransform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            rotation: Mat3::identity(),
            quaternion: UnitQuat::identity(),
            translation: Vec3::zeros(),
            matrix: Mat4::identity(),
        }
    }

    /// Quaternion coordinates in `[x, y, z, w]` order.
    pub fn quaternion_xyzw(&self) -> [Real; 4] {
        quat_to_xyzw(&self.quaternion)
    }

    pub fn to_isometry(&self) -> Iso3 {
        Iso3::from_parts(Translation3::from(self.translation), self.quaternion)
    }

    /// Closed-form inverse `[Rᵀ, -Rᵀ·t; 0 0 0 1]`.
    pub fn inverse_matrix(&self) -> Mat4 {
        let rt = self.rotation.transpose();
        homogeneous(&rt, &(-(rt * self.translation)))
    }

    /// Transform mapping reference coordinates back into the target frame.
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.transpose();
        let translation = -(rotation * self.translation);
        Self {
            rotation,
            quaternion: canonicalize_quaternion(&self.quaternion.inverse()),
            translation,
            matrix: homogeneous(&rotation, &translation),
        }
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    ///
    /// Chains frames: if `other` maps C into B and `self` maps B into A, the
    /// result maps C into A.
    pub fn compose(&self, other: &RigidTransform) -> Self {
        let rotation = self.rotation * other.rotation;
        let translation = self.rotation * other.translation + self.translation;
        Self {
            rotation,
            quaternion: canonicalize_quaternion(&(self.quaternion * other.quaternion)),
            translation,
            matrix: homogeneous(&rotation, &translation),
        }
    }

    /// Map a target-frame point into the reference frame.
    pub fn transform_point(&self, p: &Pt3) -> Pt3 {
        Pt3::from(self.rotation * p.coords + self.translation)
    }

    /// Rotate a target-frame direction into the reference frame.
    pub fn transform_vector(&self, v: &Vec3) -> Vec3 {
        self.rotation * v
    }
}
