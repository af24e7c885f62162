//! # Stochastic Gradient Descent
//!
//! Instead of the gradient at the current position, each step averages the
//! gradient over `batch_size` points drawn uniformly from the surface's
//! domain. The draws come from an RNG owned by the optimizer, so a seeded
//! optimizer replays the same trajectory.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use super::{Optimizer, OptimizerCore};
use crate::error::{EngineError, Result};
use crate::surface::Surface;

/// Gradient descent on a sampled gradient: `v = -lr * mean(g_i)`.
#[derive(Debug)]
pub struct StochasticGradientDescent<R = StdRng> {
    core: OptimizerCore,
    batch_size: usize,
    rng: R,
}

impl StochasticGradientDescent<StdRng> {
    /// Creates an optimizer whose sampling is driven by `StdRng` seeded with `seed`.
    pub fn seeded(
        x: f64,
        y: f64,
        surface: Arc<Surface>,
        lr: f64,
        batch_size: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::new(x, y, surface, lr, batch_size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StochasticGradientDescent<R> {
    pub const NAME: &'static str = "SGD";

    /// Creates a stochastic optimizer starting at `(x, y)`.
    ///
    /// # Arguments
    /// * `surface`: The surface to descend, shared with other optimizers.
    /// * `lr`: Learning rate, must be finite and non-negative.
    /// * `batch_size`: Points sampled per step, at least 1.
    /// * `rng`: Source of the sampled points.
    pub fn new(
        x: f64,
        y: f64,
        surface: Arc<Surface>,
        lr: f64,
        batch_size: usize,
        rng: R,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(EngineError::config("batch size", 0.0, "at least 1"));
        }
        Ok(StochasticGradientDescent {
            core: OptimizerCore::new(Self::NAME, x, y, surface, lr)?,
            batch_size,
            rng,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Mean gradient over a fresh batch of domain samples.
    fn sampled_gradient(&mut self) -> Result<(f64, f64)> {
        let surface = Arc::clone(self.core.surface());
        let (mut sum_x, mut sum_y) = (0.0, 0.0);
        for _ in 0..self.batch_size {
            let (x, y) = surface.random_point(&mut self.rng);
            let (gx, gy) = surface.gradient(x, y)?;
            sum_x += gx;
            sum_y += gy;
        }
        let n = self.batch_size as f64;
        Ok((sum_x / n, sum_y / n))
    }
}

impl<R: Rng> Optimizer for StochasticGradientDescent<R> {
    fn step(&mut self) -> Result<f64> {
        // A failed step still consumes draws from the RNG; positions and
        // history are untouched.
        let (gx, gy) = self.sampled_gradient()?;
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
