use frame_resolver_core::{Axis, Landmark, Real};
use thiserror::Error;

/// Why an orthonormal basis could not be built from the landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// A landmark has a NaN or infinite coordinate.
    NonFinite(Landmark),
    /// The landmark for this axis coincides with the origin.
    ZeroAxis(Axis),
    /// The two raw axis directions are parallel.
    ParallelAxes(Axis, Axis),
}

impl std::fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Degeneracy::NonFinite(which) => write!(f, "{which} has a non-finite coordinate"),
            Degeneracy::ZeroAxis(axis) => write!(f, "{axis} direction has zero length"),
            Degeneracy::ParallelAxes(a, b) => write!(f, "{a} and {b} directions are parallel"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResolveError {
    #[error("degenerate frame landmarks: {0}")]
    DegenerateInput(Degeneracy),
    #[error("not a proper rotation: det = {det:.6}, orthonormality error = {orthonormality:.3e}")]
    InvalidRotation { det: Real, orthonormality: Real },
    #[error("quaternion normalisation failed (norm = {norm:e})")]
    NumericalInstability { norm: Real },
    #[error("{axis} landmark points against the derived right-handed {axis} axis (cos = {cos_angle:.6})")]
    HandednessMismatch { axis: Axis, cos_angle: Real },
}

impl From<Degeneracy> for ResolveError {
    fn from(d: Degeneracy) -> Self {
        ResolveError::DegenerateInput(d)
    }
}
