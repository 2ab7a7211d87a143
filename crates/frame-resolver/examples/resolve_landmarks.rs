//! Resolve a target frame from four landmarks and print the transform.
//!
//! The first set uses landmarks that are not offset along orthogonal axes, so
//! the resolver has to orthogonalise them. The second set is the canonical
//! check: unit axes offset by the origin resolve to the identity rotation.
//!
//! Run with: `cargo run -p frame-resolver --example resolve_landmarks`

use anyhow::Result;
use frame_resolver::prelude::*;

fn report(title: &str, tf: &RigidTransform) {
    println!("--- {title} ---");
    println!("Quaternion (x, y, z, w): {:?}", tf.quaternion_xyzw());
    println!("Translation vector: {:?}", tf.translation.as_slice());
    println!("4x4 transform matrix:{}", tf.matrix);
}

fn main() -> Result<()> {
    let skewed = resolve_transform(
        Pt3::new(1.0, 2.0, 3.0),
        Pt3::new(1.0, 0.0, 0.0),
        Pt3::new(0.0, 1.0, 0.0),
        Pt3::new(0.0, 0.0, 1.0),
    )?;
    report("skewed landmarks", &skewed);

    let canonical = resolve_rows(
        &[[1.0, 2.0, 3.0], [2.0, 2.0, 3.0], [1.0, 3.0, 3.0], [1.0, 2.0, 4.0]],
        ResolveOptions::default(),
    )?;
    report("offset unit axes", &canonical);

    let back = canonical.inverse().transform_point(&Pt3::new(1.0, 2.0, 3.0));
    println!("origin in its own frame: {back}");
    Ok(())
}
