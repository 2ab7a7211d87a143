//! High-level entry crate for `frame-resolver`.
//!
//! Registers a target coordinate frame (a sensor, tool or anatomical frame)
//! against a reference frame from four landmarks: the target origin and one
//! point along each target axis. The result is a [`RigidTransform`] holding
//! the rotation as a matrix and as a unit quaternion, the translation, and
//! the combined 4×4 homogeneous matrix.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use frame_resolver::prelude::*;
//!
//! let tf = resolve_transform(
//!     Pt3::new(1.0, 2.0, 3.0),
//!     Pt3::new(2.0, 2.0, 3.0),
//!     Pt3::new(1.0, 3.0, 3.0),
//!     Pt3::new(1.0, 2.0, 4.0),
//! )?;
//! assert_eq!(tf.quaternion_xyzw(), [0.0, 0.0, 0.0, 1.0]);
//! assert_eq!(tf.translation, Vec3::new(1.0, 2.0, 3.0));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`core`] - Math types, landmarks, options
//! - [`linear`] - Basis construction, quaternion conversion, transform assembly
//! - [`synthetic`] - Deterministic synthetic landmark sets for testing

use anyhow::{ensure, Result};

/// Math types, landmark inputs and resolver options.
///
/// Re-exports everything from `frame_resolver_core`.
pub mod core {
    pub use frame_resolver_core::*;
}

/// Closed-form frame resolution.
///
/// Re-exports everything from `frame_resolver_linear`.
pub mod linear {
    pub use frame_resolver_linear::*;
}

/// Deterministic synthetic data generation for testing.
pub mod synthetic {
    pub use frame_resolver_core::synthetic::*;
}

pub use frame_resolver_core::{
    Axis, FrameLandmarks, HandednessPolicy, Iso3, Landmark, Mat3, Mat4, Pt3, Real,
    ResolveOptions, SecondaryAxis, UnitQuat, Vec3,
};
pub use frame_resolver_linear::{
    resolve_transform, Degeneracy, FrameResolver, ResolveError, RigidTransform,
};

/// Resolve a frame from raw coordinate rows ordered `[origin, x, y, z]`.
///
/// This is the boundary for point sources that hand over plain numbers
/// (parsed files, UI fields, network messages): the row count is checked
/// here, everything else by the resolver.
pub fn resolve_rows(rows: &[[Real; 3]], options: ResolveOptions) -> Result<RigidTransform> {
    ensure!(
        rows.len() == 4,
        "expected 4 landmark rows [origin, x, y, z], got {}",
        rows.len()
    );
    let landmarks = FrameLandmarks::from_arrays([rows[0], rows[1], rows[2], rows[3]]);
    Ok(FrameResolver::with_options(options).resolve(&landmarks)?)
}

/// Convenient re-exports for common use cases.
///
/// ```
/// use frame_resolver::prelude::*;
///
/// let resolver = FrameResolver::with_options(ResolveOptions {
///     handedness: HandednessPolicy::Reject,
///     ..Default::default()
/// });
/// # let _ = resolver;
/// ```
pub mod prelude {
    pub use crate::{
        resolve_rows, resolve_transform, FrameLandmarks, FrameResolver, HandednessPolicy, Pt3,
        Real, ResolveError, ResolveOptions, RigidTransform, SecondaryAxis, Vec3,
    };
}
