//! # Vector Module
//!
//! Defines `Vector3`, the value type used for optimizer positions and
//! velocities. Operator overloads live in `ops`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, Result};

// --- Submodules ---
pub mod ops;

/// A point or displacement in 3D space.
///
/// Plain `Copy` value: every operation returns a new vector. Equality is exact
/// and component-wise, without tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(self, scalar: f64) -> Self {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Divides every component by `scalar`.
    ///
    /// # Errors
    /// `EngineError::Division` when `scalar` is zero.
    pub fn div(self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            return Err(EngineError::Division);
        }
        Ok(Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar))
    }

    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vector3) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean norm, `sqrt(x² + y² + z²)`, without overflowing in the
    /// squares.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector({}, {}, {})", self.x, self.y, self.z)
    }
}
