use crate::{Pt3, Real, Vec3};
use serde::{Deserialize, Serialize};

/// Identifies one of the four input landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Origin,
    XPoint,
    YPoint,
    ZPoint,
}

/// Identifies one axis of the target frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Column index of this axis in a rotation matrix.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Landmark::Origin => "origin",
            Landmark::XPoint => "x point",
            Landmark::YPoint => "y point",
            Landmark::ZPoint => "z point",
        };
        f.write_str(name)
    }
}

/// Four landmarks defining a target frame in reference coordinates.
///
/// `origin` is the target frame origin; each `*_point` lies on the ray from
/// `origin` along the corresponding target axis. The points do not need to be
/// at unit distance from the origin, and the rays do not need to be exactly
/// orthogonal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameLandmarks {
    pub origin: Pt3,
    pub x_point: Pt3,
    pub y_point: Pt3,
    pub z_point: Pt3,
}

impl FrameLandmarks {
    pub fn new(origin: Pt3, x_point: Pt3, y_point: Pt3, z_point: Pt3) -> Self {
        Self {
            origin,
            x_point,
            y_point,
            z_point,
        }
    }

    /// Build from raw coordinate rows ordered `[origin, x, y, z]`.
    pub fn from_arrays(rows: [[Real; 3]; 4]) -> Self {
        let [o, x, y, z] = rows.map(Pt3::from);
        Self::new(o, x, y, z)
    }

    /// Landmarks in `[origin, x, y, z]` order, tagged with their role.
    pub fn iter(&self) -> impl Iterator<Item = (Landmark, &Pt3)> {
        [
            (Landmark::Origin, &self.origin),
            (Landmark::XPoint, &self.x_point),
            (Landmark::YPoint, &self.y_point),
            (Landmark::ZPoint, &self.z_point),
        ]
        .into_iter()
    }

    /// First landmark with a NaN or infinite coordinate, if any.
    pub fn first_non_finite(&self) -> Option<Landmark> {
        self.iter()
            .find(|(_, p)| !p.coords.iter().all(|c| c.is_finite()))
            .map(|(which, _)| which)
    }

    /// Returns true if every coordinate of every landmark is finite.
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// Raw (unnormalised) axis directions `p_i - origin` for x, y and z.
    pub fn axis_vectors(&self) -> [Vec3; 3] {
        [
            self.x_point - self.origin,
            self.y_point - self.origin,
            self.z_point - self.origin,
        ]
    }

    /// Raw direction of a single axis.
    pub fn axis_vector(&self, axis: Axis) -> Vec3 {
        self.axis_vectors()[axis.index()]
    }
}
