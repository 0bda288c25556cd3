//! Geometry primitive: [`Position`].
//!
//! Positions place graph nodes in search space. Edge costs and the A*
//! heuristic are both derived from the straight-line distance between them.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A point in 3D search space.
///
/// Grids built on a ground plane conventionally use `x` and `z` and leave
/// `y` at zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A position on the ground plane (`y = 0`).
    #[inline]
    pub const fn planar(x: f32, z: f32) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        let d = self - other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// Euclidean distance to `other`.
    ///
    /// Finite as long as the result itself fits in an `f32`, even when the
    /// squared distance would not.
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        let d = self - other;
        d.x.hypot(d.y).hypot(d.z)
    }
}

/// Euclidean distance between two positions.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f32 {
    a.distance(b)
}

// --- trait impls for Position ---

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Position {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
