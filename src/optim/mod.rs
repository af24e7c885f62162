//! # Optimization Algorithms (`optim`)
//!
//! First-order update rules that walk a point downhill on a `Surface`.
//! Every optimizer embeds an `OptimizerCore` (position, velocity, learning
//! rate, shared surface, history) and implements the single-operation
//! `Optimizer::step` contract on top of it.

use std::sync::Arc;

use crate::error::{check_learning_rate, EngineError, Result};
use crate::surface::Surface;
use crate::vector::Vector3;

// --- Submodules ---
pub mod adagrad;
pub mod adam;
pub mod gd;
pub mod momentum;
pub mod nesterov;
pub mod rmsprop;
pub mod sgd;
pub mod trace;

// Re-export optimizers
pub use adagrad::AdaGrad;
pub use adam::Adam;
pub use gd::GradientDescent;
pub use momentum::Momentum;
pub use nesterov::Nesterov;
pub use rmsprop::RMSProp;
pub use sgd::StochasticGradientDescent;
pub use trace::StepRecord;

use trace::StepTracer;

/// Added under the square root of the adaptive denominators.
pub const EPSILON: f64 = 1e-8;

/// An optimizer behind a trait object, as handed out by the run configuration.
pub type BoxedOptimizer = Box<dyn Optimizer + Send>;

// --- Optimizer Trait ---

/// Base trait for all optimizers.
pub trait Optimizer {
    /// Performs a single update and returns the length of this step's
    /// velocity, which drivers use as a convergence signal.
    ///
    /// # Errors
    /// `EngineError::Domain` if the surface or the update is not finite. The
    /// optimizer is left exactly as it was before the call.
    fn step(&mut self) -> Result<f64>;

    fn core(&self) -> &OptimizerCore;

    fn core_mut(&mut self) -> &mut OptimizerCore;

    /// Algorithm identity, used as a display label.
    fn name(&self) -> &'static str {
        self.core().name()
    }

    fn position(&self) -> Vector3 {
        self.core().position()
    }

    fn velocity(&self) -> Vector3 {
        self.core().velocity()
    }

    fn learning_rate(&self) -> f64 {
        self.core().learning_rate()
    }

    /// Replaces the learning rate, validated like at construction.
    fn set_learning_rate(&mut self, lr: f64) -> Result<()> {
        self.core_mut().lr = check_learning_rate(lr)?;
        Ok(())
    }

    /// Speeds returned by every successful step, oldest first.
    fn history(&self) -> &[f64] {
        self.core().history()
    }

    fn steps(&self) -> usize {
        self.core().history().len()
    }

    /// Prints one line per step when enabled.
    fn set_verbose(&mut self, verbose: bool) {
        self.core_mut().tracer.set_verbose(verbose);
    }

    /// Keeps a `StepRecord` per step when enabled.
    fn collect_trace(&mut self, collect: bool) {
        self.core_mut().tracer.set_collect(collect);
    }

    fn trace(&self) -> &[StepRecord] {
        self.core().tracer.records()
    }
}

// --- Shared State ---

/// State common to every optimizer.
///
/// `position.z` always equals the surface height at `(position.x,
/// position.y)`, and `velocity.z` is always zero: positions only move in the
/// plane and the height is re-derived after each move.
#[derive(Debug)]
pub struct OptimizerCore {
    name: &'static str,
    position: Vector3,
    velocity: Vector3,
    lr: f64,
    surface: Arc<Surface>,
    history: Vec<f64>,
    tracer: StepTracer,
}

impl OptimizerCore {
    pub(crate) fn new(
        name: &'static str,
        x: f64,
        y: f64,
        surface: Arc<Surface>,
        lr: f64,
    ) -> Result<Self> {
        let lr = check_learning_rate(lr)?;
        if !x.is_finite() {
            return Err(EngineError::config("start x", x, "a finite coordinate"));
        }
        if !y.is_finite() {
            return Err(EngineError::config("start y", y, "a finite coordinate"));
        }
        let z = surface.evaluate(x, y)?;
        Ok(OptimizerCore {
            name,
            position: Vector3::new(x, y, z),
            velocity: Vector3::ZERO,
            lr,
            surface,
            history: Vec::new(),
            tracer: StepTracer::default(),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr
    }

    pub fn surface(&self) -> &Arc<Surface> {
        &self.surface
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Gradient at the current position.
    pub(crate) fn gradient(&self) -> Result<(f64, f64)> {
        self.surface.gradient(self.position.x, self.position.y)
    }

    /// Fails with a domain error at the current position unless every value
    /// is finite. Variants run their new accumulators through this before
    /// committing.
    pub(crate) fn ensure_finite(&self, values: &[f64]) -> Result<()> {
        if values.iter().all(|v| v.is_finite()) {
            Ok(())
        } else {
            Err(EngineError::Domain {
                x: self.position.x,
                y: self.position.y,
            })
        }
    }

    /// Moves by the planar velocity `(vx, vy)`, re-derives the height and
    /// records the step. Nothing is written unless the whole update is valid.
    pub(crate) fn commit(&mut self, vx: f64, vy: f64) -> Result<f64> {
        let velocity = Vector3::new(vx, vy, 0.0);
        let speed = vx.hypot(vy);
        self.ensure_finite(&[vx, vy, speed])?;

        let x = self.position.x + vx;
        let y = self.position.y + vy;
        self.ensure_finite(&[x, y])?;
        let z = self.surface.evaluate(x, y)?;

        self.velocity = velocity;
        self.position = Vector3::new(x, y, z);
        self.tracer.emit(StepRecord {
            optimizer: self.name,
            iter: self.history.len(),
            x,
            y,
            z,
            speed,
        });
        self.history.push(speed);
        Ok(speed)
    }
}
