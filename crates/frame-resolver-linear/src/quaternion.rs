//! Rotation matrix to unit quaternion conversion.
//!
//! The conversion branches on the largest of `trace`, `R00`, `R11`, `R22` so
//! the divisor is always at least `1` (in units of `4·|component|`). The plain
//! trace formula loses all precision as the rotation angle approaches π.

use crate::ResolveError;
use frame_resolver_core::{Mat3, Real, UnitQuat};
use log::debug;
use nalgebra::Quaternion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Trace,
    X,
    Y,
    Z,
}

/// Convert a rotation matrix into a unit quaternion.
///
/// The result is normalised and put in canonical sign: `w > 0`, or `w == 0`
/// with the first non-zero of `(x, y, z)` positive. Equal inputs therefore
/// give bit-identical outputs, and `q`/`-q` ambiguity never leaks out.
///
/// Fails with [`ResolveError::NumericalInstability`] if the raw quaternion
/// cannot be normalised, which only happens for matrices that are far from
/// orthonormal or contain non-finite entries.
pub fn rotation_to_quaternion(r: &Mat3) -> Result<UnitQuat, ResolveError> {
    let (r00, r01, r02) = (r[(0, 0)], r[(0, 1)], r[(0, 2)]);
    let (r10, r11, r12) = (r[(1, 0)], r[(1, 1)], r[(1, 2)]);
    let (r20, r21, r22) = (r[(2, 0)], r[(2, 1)], r[(2, 2)]);
    let trace = r00 + r11 + r22;

    let branch = if trace > 0.0 {
        Branch::Trace
    } else if r00 > r11 && r00 > r22 {
        Branch::X
    } else if r11 > r22 {
        Branch::Y
    } else {
        Branch::Z
    };
    debug!("rotation trace {trace:.6}, quaternion branch {branch:?}");

    // s = 4 * (dominant component)
    let [x, y, z, w] = match branch {
        Branch::Trace => {
            let s = (trace + 1.0).sqrt() * 2.0;
            [(r21 - r12) / s, (r02 - r20) / s, (r10 - r01) / s, 0.25 * s]
        }
        Branch::X => {
            let s = (1.0 + r00 - r11 - r22).sqrt() * 2.0;
            [0.25 * s, (r01 + r10) / s, (r02 + r20) / s, (r21 - r12) / s]
        }
        Branch::Y => {
            let s = (1.0 + r11 - r00 - r22).sqrt() * 2.0;
            [(r01 + r10) / s, 0.25 * s, (r12 + r21) / s, (r02 - r20) / s]
        }
        Branch::Z => {
            let s = (1.0 + r22 - r00 - r11).sqrt() * 2.0;
            [(r02 + r20) / s, (r12 + r21) / s, 0.25 * s, (r10 - r01) / s]
        }
    };

    let norm = (x * x + y * y + z * z + w * w).sqrt();
    if !norm.is_finite() || norm <= Real::EPSILON {
        return Err(ResolveError::NumericalInstability { norm });
    }

    Ok(from_canonical_xyzw([x, y, z, w].map(|c| c / norm)))
}

/// Put a unit quaternion into the canonical sign used by
/// [`rotation_to_quaternion`].
///
/// `q` and `-q` map to the same, bit-identical output.
pub fn canonicalize_quaternion(q: &UnitQuat) -> UnitQuat {
    from_canonical_xyzw([q.i, q.j, q.k, q.w])
}

fn from_canonical_xyzw(xyzw: [Real; 4]) -> UnitQuat {
    let sign = if is_canonical(xyzw) { 1.0 } else { -1.0 };
    // `+ 0.0` collapses -0.0 so equal rotations compare bit-for-bit.
    let [x, y, z, w] = xyzw.map(|c| sign * c + 0.0);
    UnitQuat::new_unchecked(Quaternion::new(w, x, y, z))
}

/// Rotation matrix of a unit quaternion.
pub fn quaternion_to_rotation(q: &UnitQuat) -> Mat3 {
    q.to_rotation_matrix().into_inner()
}

fn is_canonical([x, y, z, w]: [Real; 4]) -> bool {
    if w != 0.0 {
        return w > 0.0;
    }
    [x, y, z]
        .into_iter()
        .find(|c| *c != 0.0)
        .map_or(true, |c| c > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_resolver_core::{quat_to_xyzw, synthetic::synthetic_frames, Vec3};
    use nalgebra::{Rotation3, Unit};
    use std::f64::consts::PI;

    fn rot(axis: Vec3, angle: Real) -> Mat3 {
        Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).into_inner()
    }

    #[test]
    fn identity_is_unit_w() {
        let q = rotation_to_quaternion(&Mat3::identity()).unwrap();
        assert_eq!(quat_to_xyzw(&q), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn half_turns_use_diagonal_branches() {
        let q = rotation_to_quaternion(&Mat3::from_diagonal(&Vec3::new(1.0, -1.0, -1.0))).unwrap();
        assert_eq!(quat_to_xyzw(&q), [1.0, 0.0, 0.0, 0.0]);

        let q = rotation_to_quaternion(&Mat3::from_diagonal(&Vec3::new(-1.0, 1.0, -1.0))).unwrap();
        assert_eq!(quat_to_xyzw(&q), [0.0, 1.0, 0.0, 0.0]);

        let q = rotation_to_quaternion(&Mat3::from_diagonal(&Vec3::new(-1.0, -1.0, 1.0))).unwrap();
        assert_eq!(quat_to_xyzw(&q), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn half_turn_sign_is_canonical() {
        // π about (0, 1, -1)/√2, equally π about (0, -1, 1)/√2.
        let r = Mat3::new(-1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, -1.0, 0.0);
        let q = rotation_to_quaternion(&r).unwrap();
        let [x, y, z, w] = quat_to_xyzw(&q);
        assert_eq!((x, w), (0.0, 0.0));
        assert!(y > 0.0 && z < 0.0, "unexpected sign: {:?}", quat_to_xyzw(&q));
        assert!((y - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((quaternion_to_rotation(&q) - r).amax() < 1e-15);
    }

    #[test]
    fn negative_w_is_flipped() {
        // -170° about x lands in the x branch with w < 0 before the flip.
        let q = rotation_to_quaternion(&rot(Vec3::x(), -170.0_f64.to_radians())).unwrap();
        let [x, y, z, w] = quat_to_xyzw(&q);
        assert!(w > 0.0);
        assert!((w - 85.0_f64.to_radians().cos()).abs() < 1e-14);
        assert!((x + 85.0_f64.to_radians().sin()).abs() < 1e-14);
        assert_eq!((y, z), (0.0, 0.0));
    }

    #[test]
    fn roundtrip_on_random_rotations() {
        for frame in synthetic_frames(11, 64, 1.0) {
            let q = rotation_to_quaternion(&frame.rotation).unwrap();
            assert!((q.norm() - 1.0).abs() < 1e-15);
            assert!(q.w >= 0.0);
            let back = quaternion_to_rotation(&q);
            assert!(
                (back - frame.rotation).amax() < 1e-12,
                "roundtrip error {:.3e}",
                (back - frame.rotation).amax()
            );

            let reference =
                UnitQuat::from_rotation_matrix(&Rotation3::from_matrix_unchecked(frame.rotation));
            assert!(q.angle_to(&reference) < 1e-12);
        }
    }

    #[test]
    fn near_half_turn_keeps_precision() {
        for angle in [PI - 1e-6, PI - 1e-9, PI] {
            let r = rot(Vec3::new(0.3, -0.5, 0.8), angle);
            let q = rotation_to_quaternion(&r).unwrap();
            assert!((quaternion_to_rotation(&q) - r).amax() < 1e-12);
        }
    }

    #[test]
    fn non_finite_matrix_is_unstable() {
        let mut r = Mat3::identity();
        r[(1, 2)] = Real::NAN;
        r[(0, 0)] = Real::NAN;
        let err = rotation_to_quaternion(&r).unwrap_err();
        assert!(matches!(err, ResolveError::NumericalInstability { .. }));
    }

    #[test]
    fn canonicalize_merges_opposite_signs() {
        let half_turn = UnitQuat::new_unchecked(Quaternion::new(0.0, -1.0, -0.0, -0.0));
        let q = canonicalize_quaternion(&half_turn);
        assert_eq!(quat_to_xyzw(&q).map(Real::to_bits), [1.0, 0.0, 0.0, 0.0].map(Real::to_bits));

        let r = rot(Vec3::new(-0.2, 0.7, 0.4), 2.2);
        let q = rotation_to_quaternion(&r).unwrap();
        let flipped = UnitQuat::new_unchecked(-q.into_inner());
        assert_eq!(
            quat_to_xyzw(&canonicalize_quaternion(&flipped)).map(Real::to_bits),
            quat_to_xyzw(&q).map(Real::to_bits)
        );
    }

    #[test]
    fn output_is_deterministic() {
        let r = rot(Vec3::new(1.0, 2.0, -0.5), 2.9);
        let a = rotation_to_quaternion(&r).unwrap();
        let b = rotation_to_quaternion(&r).unwrap();
        assert_eq!(quat_to_xyzw(&a).map(Real::to_bits), quat_to_xyzw(&b).map(Real::to_bits));
    }
}
