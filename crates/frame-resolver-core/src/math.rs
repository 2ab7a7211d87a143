//! Mathematical type definitions and small fixed-size helpers.

use nalgebra::{Isometry3, Matrix3, Matrix4, Point3, UnitQuaternion, Vector3, Vector4};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 4D vector with [`Real`] components (homogeneous 3D point).
pub type Vec4 = Vector4<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;
/// 4×4 matrix with [`Real`] entries.
pub type Mat4 = Matrix4<Real>;
/// 3D rigid transform (SE(3)) using [`Real`].
pub type Iso3 = Isometry3<Real>;
/// Unit quaternion with [`Real`] coordinates.
pub type UnitQuat = UnitQuaternion<Real>;

/// Convert a 3D point into homogeneous coordinates `(x, y, z, 1)`.
pub fn to_homogeneous(p: &Pt3) -> Vec4 {
    Vec4::new(p.x, p.y, p.z, 1.0)
}

/// Convert a homogeneous 4-vector back to a 3D point.
///
/// Returns `None` when `|w| <= f64::EPSILON` or `w` is not finite (a
/// direction, not a point).
pub fn from_homogeneous(v: &Vec4) -> Option<Pt3> {
    if !(v.w.is_finite() && v.w.abs() > Real::EPSILON) {
        return None;
    }
    Some(Pt3::new(v.x / v.w, v.y / v.w, v.z / v.w))
}

/// Largest absolute entry of `R·Rᵀ − I`.
///
/// Zero for an exactly orthonormal matrix.
pub fn orthonormality_error(r: &Mat3) -> Real {
    (r * r.transpose() - Mat3::identity()).amax()
}

/// Returns true if `r` is orthonormal with `det(r) = +1` within `eps`.
pub fn is_proper_rotation(r: &Mat3, eps: Real) -> bool {
    orthonormality_error(r) <= eps && (r.determinant() - 1.0).abs() <= eps
}

/// Quaternion coordinates in `[x, y, z, w]` order.
///
/// This is the scalar-last layout most external tooling reads and writes.
pub fn quat_to_xyzw(q: &UnitQuat) -> [Real; 4] {
    [q.i, q.j, q.k, q.w]
}

/// Build a unit quaternion from `[x, y, z, w]` coordinates.
///
/// The input is normalised; `None` is returned if its norm is zero or not
/// finite.
pub fn quat_from_xyzw(xyzw: [Real; 4]) -> Option<UnitQuat> {
    let [x, y, z, w] = xyzw;
    let q = nalgebra::Quaternion::new(w, x, y, z);
    let norm = q.norm();
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }
    Some(UnitQuat::new_unchecked(q / norm))
}
