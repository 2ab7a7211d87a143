//! Configuration options for frame resolution.
//!
//! The defaults reproduce the canonical construction: x is taken exactly from
//! its landmark, y fixes the xy-plane, and z is only cross-checked.

use crate::{Axis, Real};
use serde::{Deserialize, Serialize};

/// Raw axis that, together with x, fixes the plane of the target frame.
///
/// The remaining axis is derived by a cross product and its landmark is only
/// used for the handedness cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondaryAxis {
    /// `ez = normalize(ex × vy)`, `ey = ez × ex`. The z landmark is checked.
    #[default]
    Y,
    /// `ey = normalize(vz × ex)`, `ez = ex × ey`. The y landmark is checked.
    Z,
}

impl SecondaryAxis {
    /// The axis whose landmark defines the plane together with x.
    pub fn axis(self) -> Axis {
        match self {
            SecondaryAxis::Y => Axis::Y,
            SecondaryAxis::Z => Axis::Z,
        }
    }

    /// The derived axis whose landmark is only cross-checked.
    pub fn check_axis(self) -> Axis {
        match self {
            SecondaryAxis::Y => Axis::Z,
            SecondaryAxis::Z => Axis::Y,
        }
    }
}

/// What to do when the cross-check landmark points against the derived axis.
///
/// A mismatch means the caller's landmarks describe a left-handed frame (or
/// the cross-check landmark is simply wrong). The derived frame is always
/// right-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandednessPolicy {
    /// Do not inspect the cross-check landmark.
    Ignore,
    /// Log a warning and return the right-handed frame.
    #[default]
    Warn,
    /// Fail with a handedness error.
    Reject,
}

/// Tolerances and construction choices for the frame resolver.
///
/// # Example
///
/// ```
/// use frame_resolver_core::{HandednessPolicy, ResolveOptions, SecondaryAxis};
///
/// let opts = ResolveOptions {
///     handedness: HandednessPolicy::Reject,
///     ..Default::default()
/// };
/// assert_eq!(opts.secondary_axis, SecondaryAxis::Y);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Direction vectors with norm at or below this are degenerate.
    pub zero_length_eps: Real,
    /// Sine of the x/secondary angle below which the two are parallel.
    pub parallel_eps: Real,
    /// Tolerance on `|det(R) - 1|` and on the entries of `R·Rᵀ - I`.
    pub rotation_eps: Real,
    /// Axis that fixes the frame plane together with x.
    pub secondary_axis: SecondaryAxis,
    /// Policy for the cross-check landmark.
    pub handedness: HandednessPolicy,
    /// A mismatch is flagged when `cos(angle) < -handedness_eps` between the
    /// cross-check landmark direction and the derived axis.
    pub handedness_eps: Real,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            zero_length_eps: 1e-12,
            parallel_eps: 1e-9,
            rotation_eps: 1e-9,
            secondary_axis: SecondaryAxis::Y,
            handedness: HandednessPolicy::Warn,
            handedness_eps: 0.0,
        }
    }
}

impl ResolveOptions {
    /// Options with the given secondary axis and defaults otherwise.
    pub fn with_secondary_axis(secondary_axis: SecondaryAxis) -> Self {
        Self {
            secondary_axis,
            ..Self::default()
        }
    }

    /// Options with the given handedness policy and defaults otherwise.
    pub fn with_handedness(handedness: HandednessPolicy) -> Self {
        Self {
            handedness,
            ..Self::default()
        }
    }
}
