//! # Momentum
//!
//! Classical momentum keeps the previous velocity and decays it by `gamma`
//! before adding the new gradient step, so the point keeps rolling through
//! flat stretches of the surface.

use std::sync::Arc;

use super::{Optimizer, OptimizerCore};
use crate::error::{check_unit_closed, Result};
use crate::surface::Surface;

/// Momentum descent: `v = gamma * v - lr * g`.
#[derive(Debug)]
pub struct Momentum {
    core: OptimizerCore,
    gamma: f64,
}

impl Momentum {
    pub const NAME: &'static str = "Momentum";

    /// Creates a momentum optimizer starting at `(x, y)`.
    ///
    /// # Arguments
    /// * `surface`: The surface to descend, shared with other optimizers.
    /// * `lr`: Learning rate, must be finite and non-negative.
    /// * `gamma`: Velocity decay in `[0, 1]`. With 0 this is plain gradient descent.
    pub fn new(x: f64, y: f64, surface: Arc<Surface>, lr: f64, gamma: f64) -> Result<Self> {
        let gamma = check_unit_closed("gamma", gamma)?;
        Ok(Momentum {
            core: OptimizerCore::new(Self::NAME, x, y, surface, lr)?,
            gamma,
        })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Optimizer for Momentum {
    fn step(&mut self) -> Result<f64> {
        let (gx, gy) = self.core.gradient()?;
        let lr = self.core.learning_rate();
        let v = self.core.velocity();
        self.core.commit(self.gamma * v.x - gx * lr, self.gamma * v.y - gy * lr)
    }

    fn core(&self) -> &OptimizerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut OptimizerCore {
        &mut self.core
    }
}
