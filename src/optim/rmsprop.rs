//! # RMSProp
//!
//! Like AdaGrad, but the squared-gradient statistic is an exponential
//! moving average, so old gradients fade out and the step size can recover.
//!
//!   acc = gamma * acc + (1 - gamma) * g²
//!   v   = -lr * g / sqrt(acc + ε)

use std::sync::Arc;

use super::{Optimizer, OptimizerCore, EPSILON};
use crate::error::{check_unit_closed, Result};
use crate::surface::Surface;

/// Root Mean Square Propagation.
#[derive(Debug)]
pub struct RMSProp {
    core: OptimizerCore,
    gamma: f64,
    // Running average of squared gradients per axis
    mean_sq: (f64, f64),
}

impl RMSProp {
    pub const NAME: &'static str = "RMSProp";

    /// Creates an RMSProp optimizer starting at `(x, y)`.
    ///
    /// # Arguments
    /// * `surface`: The surface to descend, shared with other optimizers.
    /// * `lr`: Learning rate, must be finite and non-negative.
    /// * `gamma`: Smoothing constant of the running average, in `[0, 1]`.
    pub fn new(x: f64, y: f64, surface: Arc<Surface>, lr: f64, gamma: f64) -> Result<Self> {
        let gamma = check_unit_closed("gamma", gamma)?;
        Ok(RMSProp {
            core: OptimizerCore::new(Self::NAME, x, y, surface, lr)?,
            gamma,
            mean_sq: (0.0, 0.0),
        })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Running average of squared gradients `(x, y)`.
    pub fn accumulator(&self) -> (f64, f64) {
        self.mean_sq
    }
}

impl Optimizer for RMSProp {
    fn step(&mut self) -> Result<f64> {
        let (gx, gy) = self.core.gradient()?;
        let lr = self.core.learning_rate();
        let gamma = self.gamma;

        let mean_sq = (
            gamma * self.mean_sq.0 + (1.0 - gamma) * gx * gx,
            gamma * self.mean_sq.1 + (1.0 - gamma) * gy * gy,
        );
        self.core.ensure_finite(&[mean_sq.0, mean_sq.1])?;

        let vx = -gx * lr / (mean_sq.0 + EPSILON).sqrt();
        let vy = -gy * lr / (mean_sq.1 + EPSILON).sqrt();
        let speed = self.core.commit(vx, vy)?;
        self.mean_sq = mean_sq;
        Ok(speed)
    }

    fn core(&self) -> &OptimizerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut OptimizerCore {
        &mut self.core
    }
}
