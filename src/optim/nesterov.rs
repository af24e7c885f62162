//! # Nesterov Accelerated Gradient

use std::sync::Arc;

use super::{Optimizer, OptimizerCore};
use crate::error::{check_unit_closed, Result};
use crate::surface::Surface;

/// Momentum with a look-ahead gradient.
///
/// The gradient is taken at `position + gamma * v`, where the current
/// velocity would carry the point, and then `v = gamma * v - lr * g`.
#[derive(Debug)]
pub struct Nesterov {
    core: OptimizerCore,
    gamma: f64,
}

impl Nesterov {
    pub const NAME: &'static str = "Nesterov";

    /// Creates a Nesterov optimizer starting at `(x, y)`.
    ///
    /// # Arguments
    /// * `surface`: The surface to descend, shared with other optimizers.
    /// * `lr`: Learning rate, must be finite and non-negative.
    /// * `gamma`: Velocity decay in `[0, 1]`.
    pub fn new(x: f64, y: f64, surface: Arc<Surface>, lr: f64, gamma: f64) -> Result<Self> {
        let gamma = check_unit_closed("gamma", gamma)?;
        Ok(Nesterov {
            core: OptimizerCore::new(Self::NAME, x, y, surface, lr)?,
            gamma,
        })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Where the next gradient will be evaluated, as `(x, y)`.
    pub fn look_ahead(&self) -> (f64, f64) {
        let p = self.core.position();
        let v = self.core.velocity();
        (p.x + self.gamma * v.x, p.y + self.gamma * v.y)
    }
}

impl Optimizer for Nesterov {
    fn step(&mut self) -> Result<f64> {
        let (x_ahead, y_ahead) = self.look_ahead();
        let (gx, gy) = self.core.surface().gradient(x_ahead, y_ahead)?;
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
