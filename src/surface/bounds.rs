//! # Domain Bounds

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Rectangular domain `[x_min, x_max] × [y_min, y_max]` of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    /// `EngineError::Configuration` if a limit is not finite or a range is empty.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let bounds = Bounds { x_min, x_max, y_min, y_max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Square domain `[-half_width, half_width]²`.
    pub fn symmetric(half_width: f64) -> Result<Self> {
        Self::new(-half_width, half_width, -half_width, half_width)
    }

    /// Checks `x_min < x_max` and `y_min < y_max` with finite limits and
    /// finite extents.
    ///
    /// Bounds can be built field by field (or deserialized), so consumers
    /// call this again before trusting them.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("x_min", self.x_min),
            ("x_max", self.x_max),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
        ] {
            if !value.is_finite() {
                return Err(EngineError::config(name, value, "a finite bound"));
            }
        }
        if self.x_min >= self.x_max {
            return Err(EngineError::config("x_max", self.x_max, "a value greater than x_min"));
        }
        if self.y_min >= self.y_max {
            return Err(EngineError::config("y_max", self.y_max, "a value greater than y_min"));
        }
        // Samplers need `max - min` to be representable
        if !self.width().is_finite() {
            return Err(EngineError::config("x_max", self.x_max, "a finite x range"));
        }
        if !self.height().is_finite() {
            return Err(EngineError::config("y_max", self.y_max, "a finite y range"));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Uniformly samples a point of the half-open domain.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        (
            rng.gen_range(self.x_min..self.x_max),
            rng.gen_range(self.y_min..self.y_max),
        )
    }
}
