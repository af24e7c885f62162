//! # Utility Functions (`utils`)
//!
//! Helpers for stepping a set of optimizers at once.

pub mod parallel;

pub use parallel::{par_step_all, step_all};
