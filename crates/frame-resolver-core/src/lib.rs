//! Core math types and inputs for `frame-resolver`.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace:
//!
//! - linear algebra type aliases (`Real`, `Vec3`, `Pt3`, `Mat3`, and friends),
//! - homogeneous and rotation-validity helpers,
//! - the [`FrameLandmarks`] input type and [`ResolveOptions`] configuration,
//! - deterministic synthetic landmark generation for tests and benchmarks.
//!
//! A target frame is described by four landmarks: its origin and one point
//! along each of its x, y and z axes, all expressed in the reference frame.
//!
//! # Example
//!
//! ```
//! use frame_resolver_core::{FrameLandmarks, Pt3};
//!
//! let landmarks = FrameLandmarks::new(
//!     Pt3::new(1.0, 2.0, 3.0),
//!     Pt3::new(2.0, 2.0, 3.0),
//!     Pt3::new(1.0, 3.0, 3.0),
//!     Pt3::new(1.0, 2.0, 4.0),
//! );
//! assert!(landmarks.is_finite());
//! let [vx, _, _] = landmarks.axis_vectors();
//! assert_eq!(vx.x, 1.0);
//! ```

/// Linear algebra type aliases and helpers.
mod math;
/// Deterministic synthetic landmark generation.
///
/// Used by workspace tests to draw reproducible frames and noisy landmark
/// sets without an RNG dependency.
pub mod synthetic;
/// Landmark inputs and resolver options.
mod types;

pub use math::*;
pub use types::*;
