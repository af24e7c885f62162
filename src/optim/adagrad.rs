//! # AdaGrad Optimizer
//!
//! Reference: Adaptive Subgradient Methods for Online Learning and Stochastic
//! Optimization - http://jmlr.org/papers/v12/duchi11a.html

use std::sync::Arc;

use super::{Optimizer, OptimizerCore, EPSILON};
use crate::error::Result;
use crate::surface::Surface;

/// Scales each axis by the root of its accumulated squared gradients.
///
/// `acc += g²`, `v = -lr * g / sqrt(acc + ε)`. The accumulator never shrinks,
/// so the effective step size only decays.
#[derive(Debug)]
pub struct AdaGrad {
    core: OptimizerCore,
    // Sum of squared gradients per axis
    sum_sq: (f64, f64),
}

impl AdaGrad {
    pub const NAME: &'static str = "AdaGrad";

    /// Creates an AdaGrad optimizer starting at `(x, y)` with empty accumulators.
    pub fn new(x: f64, y: f64, surface: Arc<Surface>, lr: f64) -> Result<Self> {
        Ok(AdaGrad {
            core: OptimizerCore::new(Self::NAME, x, y, surface, lr)?,
            sum_sq: (0.0, 0.0),
        })
    }

    /// Accumulated squared gradients `(x, y)`.
    pub fn accumulator(&self) -> (f64, f64) {
        self.sum_sq
    }
}

impl Optimizer for AdaGrad {
    fn step(&mut self) -> Result<f64> {
        let (gx, gy) = self.core.gradient()?;
        let lr = self.core.learning_rate();

        let sum_sq = (self.sum_sq.0 + gx * gx, self.sum_sq.1 + gy * gy);
        self.core.ensure_finite(&[sum_sq.0, sum_sq.1])?;

        let vx = -gx * lr / (sum_sq.0 + EPSILON).sqrt();
        let vy = -gy * lr / (sum_sq.1 + EPSILON).sqrt();
        let speed = self.core.commit(vx, vy)?;
        self.sum_sq = sum_sq;
        Ok(speed)
    }

    fn core(&self) -> &OptimizerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut OptimizerCore {
        &mut self.core
    }
}
