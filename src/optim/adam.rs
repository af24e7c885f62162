//! # Adam Optimizer
//!
//! Reference: Adam: A Method for Stochastic Optimization - https://arxiv.org/abs/1412.6980
//!
//! Keeps two exponential moving averages per axis, the gradient `m` and the
//! squared gradient `s`, and divides out their zero-initialization bias:
//!
//!   t += 1
//!   m  = beta1 * m + (1 - beta1) * g
//!   s  = beta2 * s + (1 - beta2) * g²
//!   m̂  = m / (1 - beta1^t),  ŝ = s / (1 - beta2^t)
//!   v  = -lr * m̂ / sqrt(ŝ + ε)
//!
//! The step counter starts at 1, so the first update already runs with
//! `t = 2`. `with_initial_step(0)` gives the paper's counter instead.

use std::sync::Arc;

use super::{Optimizer, OptimizerCore, EPSILON};
use crate::error::{check_unit_half_open, Result};
use crate::surface::Surface;

/// Counter value before the first step.
pub const DEFAULT_INITIAL_STEP: u32 = 1;

/// Adaptive Moment Estimation.
#[derive(Debug)]
pub struct Adam {
    core: OptimizerCore,
    betas: (f64, f64),
    t: u32,
    // 1st moment estimate per axis
    m: (f64, f64),
    // 2nd moment estimate per axis
    s: (f64, f64),
}

impl Adam {
    pub const NAME: &'static str = "Adam";

    /// Creates an Adam optimizer starting at `(x, y)`.
    ///
    /// # Arguments
    /// * `surface`: The surface to descend, shared with other optimizers.
    /// * `lr`: Learning rate, must be finite and non-negative.
    /// * `beta1`: Decay of the first moment, in `[0, 1)`.
    /// * `beta2`: Decay of the second moment, in `[0, 1)`.
    pub fn new(
        x: f64,
        y: f64,
        surface: Arc<Surface>,
        lr: f64,
        beta1: f64,
        beta2: f64,
    ) -> Result<Self> {
        let beta1 = check_unit_half_open("beta1", beta1)?;
        let beta2 = check_unit_half_open("beta2", beta2)?;
        Ok(Adam {
            core: OptimizerCore::new(Self::NAME, x, y, surface, lr)?,
            betas: (beta1, beta2),
            t: DEFAULT_INITIAL_STEP,
            m: (0.0, 0.0),
            s: (0.0, 0.0),
        })
    }

    /// Sets the counter value the first step increments from. Call before
    /// stepping.
    pub fn with_initial_step(mut self, t: u32) -> Self {
        self.t = t;
        self
    }

    pub fn betas(&self) -> (f64, f64) {
        self.betas
    }

    /// Counter value used by the most recent step.
    pub fn step_count(&self) -> u32 {
        self.t
    }

    pub fn first_moment(&self) -> (f64, f64) {
        self.m
    }

    pub fn second_moment(&self) -> (f64, f64) {
        self.s
    }

    /// `(m̂, ŝ)` for the current counter value.
    pub fn bias_corrected_moments(&self) -> ((f64, f64), (f64, f64)) {
        if self.t == 0 {
            return (self.m, self.s);
        }
        let (bc1, bc2) = self.bias_corrections(self.t);
        (
            (self.m.0 / bc1, self.m.1 / bc1),
            (self.s.0 / bc2, self.s.1 / bc2),
        )
    }

    fn bias_corrections(&self, t: u32) -> (f64, f64) {
        let exp = i32::try_from(t).unwrap_or(i32::MAX);
        (1.0 - self.betas.0.powi(exp), 1.0 - self.betas.1.powi(exp))
    }
}

impl Optimizer for Adam {
    fn step(&mut self) -> Result<f64> {
        let (gx, gy) = self.core.gradient()?;
        let lr = self.core.learning_rate();
        let (beta1, beta2) = self.betas;
        let t = self.t.saturating_add(1);

        let m = (
            beta1 * self.m.0 + (1.0 - beta1) * gx,
            beta1 * self.m.1 + (1.0 - beta1) * gy,
        );
        let s = (
            beta2 * self.s.0 + (1.0 - beta2) * gx * gx,
            beta2 * self.s.1 + (1.0 - beta2) * gy * gy,
        );
        self.core.ensure_finite(&[m.0, m.1, s.0, s.1])?;

        let (bc1, bc2) = self.bias_corrections(t);
        let (m_hat_x, m_hat_y) = (m.0 / bc1, m.1 / bc1);
        let (s_hat_x, s_hat_y) = (s.0 / bc2, s.1 / bc2);

        let vx = -m_hat_x * lr / (s_hat_x + EPSILON).sqrt();
        let vy = -m_hat_y * lr / (s_hat_y + EPSILON).sqrt();
        let speed = self.core.commit(vx, vy)?;

        self.t = t;
        self.m = m;
        self.s = s;
        Ok(speed)
    }

    fn core(&self) -> &OptimizerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut OptimizerCore {
        &mut self.core
    }
}
