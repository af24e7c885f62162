//! # Batch Stepping (CPU Threading)
//!
//! Steps every optimizer of a set once, either in order or on the `rayon`
//! thread pool. Optimizers only share the immutable `Surface` (behind an
//! `Arc`), so stepping them concurrently needs no locking and gives the same
//! results as stepping them one after another.
//!
//! Neither helper decides convergence or drops failed optimizers; callers
//! look at the returned speeds and errors and decide themselves.

use rayon::prelude::*;

use crate::error::Result;
use crate::optim::BoxedOptimizer;

/// Steps each optimizer once, in order. The i-th result belongs to the i-th
/// optimizer.
pub fn step_all(optimizers: &mut [BoxedOptimizer]) -> Vec<Result<f64>> {
    optimizers.iter_mut().map(|optim| optim.step()).collect()
}

/// Parallel `step_all`. Results keep the input order.
pub fn par_step_all(optimizers: &mut [BoxedOptimizer]) -> Vec<Result<f64>> {
    optimizers.par_iter_mut().map(|optim| optim.step()).collect()
}
