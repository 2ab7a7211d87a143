//! Closed-form rigid frame resolution.
//!
//! Given a target frame's origin and one landmark along each of its axes,
//! this crate builds an orthonormal right-handed basis, converts it to a
//! rotation matrix and a unit quaternion, and packages both with the
//! translation into a 4×4 homogeneous transform.
//!
//! # Example
//!
//! ```
//! use frame_resolver_core::Pt3;
//! use frame_resolver_linear::resolve_transform;
//!
//! let tf = resolve_transform(
//!     Pt3::new(0.0, 0.0, 1.0),
//!     Pt3::new(0.0, 2.0, 1.0), // x axis along reference +y
//!     Pt3::new(-1.0, 0.0, 1.0), // y axis along reference -x
//!     Pt3::new(0.0, 0.0, 3.0),
//! )
//! .unwrap();
//! let [x, y, z, w] = tf.quaternion_xyzw();
//! assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
//! assert!((z - w).abs() < 1e-12); // 90° about z
//! ```

mod basis;
mod error;
mod quaternion;
mod resolver;
mod transform;

pub use basis::*;
pub use error::*;
pub use quaternion::*;
pub use resolver::*;
pub use transform::*;
