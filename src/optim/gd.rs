//! # Gradient Descent

use std::sync::Arc;

use super::{Optimizer, OptimizerCore};
use crate::error::Result;
use crate::surface::Surface;

/// Plain gradient descent: `v = -lr * g`.
#[derive(Debug)]
pub struct GradientDescent {
    core: OptimizerCore,
}

impl GradientDescent {
    pub const NAME: &'static str = "GD";

    /// Creates a gradient descent optimizer starting at `(x, y)`.
    ///
    /// # Arguments
    /// * `surface`: The surface to descend, shared with other optimizers.
    /// * `lr`: Learning rate, must be finite and non-negative.
    pub fn new(x: f64, y: f64, surface: Arc<Surface>, lr: f64) -> Result<Self> {
        Ok(GradientDescent {
            core: OptimizerCore::new(Self::NAME, x, y, surface, lr)?,
        })
    }
}

impl Optimizer for GradientDescent {
    fn step(&mut self) -> Result<f64> {
        let (gx, gy) = self.core.gradient()?;
        let lr = self.core.learning_rate();
        self.core.commit(-gx * lr, -gy * lr)
    }

    fn core(&self) -> &OptimizerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut OptimizerCore {
        &mut self.core
    }
}
