//! # descent_lab
//!
//! A small engine for watching first-order optimizers descend a synthetic
//! 2D surface: plain and stochastic gradient descent, Momentum, Nesterov,
//! AdaGrad, RMSProp and Adam.
//!
//! - `vector`: the `Vector3` value type for positions and velocities
//! - `surface`: a scalar field with finite-difference gradients and sample grids
//! - `optim`: the `Optimizer` trait and its update rules
//! - `config`: JSON run configuration
//! - `utils`: stepping whole sets of optimizers, optionally in parallel
//!
//! Rendering, terrain generation and the time-stepping driver live outside
//! this crate; the driver calls `Optimizer::step` and decides convergence
//! from the returned speed.

pub mod config;
pub mod error;
pub mod optim;
pub mod surface;
pub mod utils;
pub mod vector;

pub use error::{EngineError, Result};
pub use optim::{
    AdaGrad, Adam, BoxedOptimizer, GradientDescent, Momentum, Nesterov, Optimizer, RMSProp,
    StochasticGradientDescent,
};
pub use surface::{Bounds, SampleGrid, Surface};
pub use vector::Vector3;
