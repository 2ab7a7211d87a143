use anyhow::Result;
use frame_resolver_core::{
    is_proper_rotation, orthonormality_error, quat_to_xyzw,
    synthetic::{synthetic_frames, UniformLandmarkNoise},
    Axis, FrameLandmarks, HandednessPolicy, Mat3, Pt3, Real, ResolveOptions, SecondaryAxis,
};
use frame_resolver_linear::{quaternion_to_rotation, FrameResolver, ResolveError, RigidTransform};

const AXIS_LENGTHS: [Real; 3] = [0.8, 2.5, 1.3];

fn rotation_angle(a: &Mat3, b: &Mat3) -> Real {
    let trace = (a.transpose() * b).trace();
    ((trace - 1.0) * 0.5).clamp(-1.0, 1.0).acos()
}

fn check_invariants(tf: &RigidTransform, lm: &FrameLandmarks) {
    assert!(
        orthonormality_error(&tf.rotation) < 1e-12,
        "R·Rᵀ deviates from I by {:.3e}",
        orthonormality_error(&tf.rotation)
    );
    assert!((tf.rotation.determinant() - 1.0).abs() < 1e-12);
    assert!((quaternion_to_rotation(&tf.quaternion) - tf.rotation).amax() < 1e-12);
    assert!(tf.quaternion.w >= 0.0);
    assert_eq!(tf.translation, lm.origin.coords);
    assert_eq!(tf.transform_point(&Pt3::origin()), lm.origin);
    assert_eq!(tf.matrix.fixed_view::<3, 3>(0, 0), tf.rotation);
}

#[test]
fn exact_landmarks_recover_ground_truth() -> Result<()> {
    let resolver = FrameResolver::new();
    for frame in synthetic_frames(2024, 100, 10.0) {
        let lm = frame.landmarks(AXIS_LENGTHS);
        let tf = resolver.resolve(&lm)?;
        check_invariants(&tf, &lm);

        let err = (tf.rotation - frame.rotation).amax();
        assert!(err < 1e-12, "rotation error too large: {err:.3e}");
    }
    Ok(())
}

#[test]
fn noisy_landmarks_still_give_proper_rotations() -> Result<()> {
    let noise = UniformLandmarkNoise {
        seed: 7,
        max_abs: 0.05,
    };
    let resolver = FrameResolver::with_options(ResolveOptions::with_handedness(
        HandednessPolicy::Reject,
    ));

    for (idx, frame) in synthetic_frames(99, 100, 5.0).iter().enumerate() {
        let lm = frame.noisy_landmarks(AXIS_LENGTHS, &noise, idx);
        let tf = resolver.resolve(&lm)?;
        check_invariants(&tf, &lm);
        assert!(is_proper_rotation(&tf.rotation, 1e-12));

        // x is never adjusted, only normalised.
        let [vx, _, _] = lm.axis_vectors();
        assert!((tf.rotation.column(0) - vx.normalize()).norm() < 1e-15);

        // Small landmark noise gives a small rotation error.
        let angle = rotation_angle(&tf.rotation, &frame.rotation);
        assert!(angle < 0.2, "rotation error too large: {angle}");
    }
    Ok(())
}

#[test]
fn both_construction_orders_agree_on_orthogonal_axes() -> Result<()> {
    let by_y = FrameResolver::new();
    let by_z = FrameResolver::with_options(ResolveOptions::with_secondary_axis(SecondaryAxis::Z));
    for frame in synthetic_frames(5, 50, 3.0) {
        let lm = frame.landmarks(AXIS_LENGTHS);
        let a = by_y.resolve(&lm)?;
        let b = by_z.resolve(&lm)?;
        assert!((a.rotation - b.rotation).amax() < 1e-12);
        assert!((a.quaternion.coords - b.quaternion.coords).norm() < 1e-12);
    }
    Ok(())
}

#[test]
fn resolution_is_deterministic() -> Result<()> {
    let resolver = FrameResolver::new();
    let noise = UniformLandmarkNoise {
        seed: 1,
        max_abs: 0.1,
    };
    for (idx, frame) in synthetic_frames(31, 20, 4.0).iter().enumerate() {
        let lm = frame.noisy_landmarks(AXIS_LENGTHS, &noise, idx);
        let a = resolver.resolve(&lm)?;
        let b = resolver.resolve(&lm)?;
        assert_eq!(
            quat_to_xyzw(&a.quaternion).map(Real::to_bits),
            quat_to_xyzw(&b.quaternion).map(Real::to_bits)
        );
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn inverse_maps_landmarks_onto_target_axes() -> Result<()> {
    let resolver = FrameResolver::new();
    for frame in synthetic_frames(77, 25, 6.0) {
        let lm = frame.landmarks(AXIS_LENGTHS);
        let tf = resolver.resolve(&lm)?;
        let inv = tf.inverse();

        assert!(inv.transform_point(&lm.origin).coords.norm() < 1e-12);
        let px = inv.transform_point(&lm.x_point);
        assert!((px - Pt3::new(AXIS_LENGTHS[0], 0.0, 0.0)).norm() < 1e-12);
        let pz = inv.transform_point(&lm.z_point);
        assert!((pz - Pt3::new(0.0, 0.0, AXIS_LENGTHS[2])).norm() < 1e-12);

        assert!((tf.inverse_matrix() * tf.matrix - nalgebra::Matrix4::identity()).amax() < 1e-12);
    }
    Ok(())
}

#[test]
fn left_handed_landmarks_follow_policy() {
    let frame = synthetic_frames(3, 1, 2.0)[0];
    let mut lm = frame.landmarks(AXIS_LENGTHS);
    // Mirror the z landmark through the origin.
    lm.z_point = lm.origin - (lm.z_point - lm.origin);

    let warned = FrameResolver::new().resolve(&lm).unwrap();
    assert!((warned.rotation - frame.rotation).amax() < 1e-12);

    let err = FrameResolver::with_options(ResolveOptions::with_handedness(HandednessPolicy::Reject))
        .resolve(&lm)
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::HandednessMismatch { axis: Axis::Z, .. }
    ));
    assert!(err.to_string().contains("z landmark"));
}

#[test]
fn options_and_results_cross_json() -> Result<()> {
    let opts: ResolveOptions = serde_json::from_str(r#"{"secondary_axis": "z"}"#)?;
    let lm: FrameLandmarks = serde_json::from_str(
        r#"{"origin": [1.0, 2.0, 3.0], "x_point": [2.0, 2.0, 3.0],
            "y_point": [1.0, 3.0, 3.0], "z_point": [1.0, 2.0, 4.0]}"#,
    )?;
    let tf = FrameResolver::with_options(opts).resolve(&lm)?;
    assert_eq!(tf.quaternion_xyzw(), [0.0, 0.0, 0.0, 1.0]);

    let json = serde_json::to_string_pretty(&tf)?;
    let restored: RigidTransform = serde_json::from_str(&json)?;
    assert_eq!(restored, tf);
    Ok(())
}
