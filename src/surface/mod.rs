//! # Surface Module
//!
//! A scalar field `z = f(x, y)` over a rectangular domain, with point
//! evaluation, a finite-difference gradient and sampled meshes for renderers.
//!
//! A `Surface` is immutable once built. Optimizers share it through an
//! `Arc<Surface>` and only ever read from it.

use rand::Rng;
use std::fmt;
use std::sync::Arc;

use crate::error::{EngineError, Result};

// --- Submodules ---
pub mod bounds;
pub mod grid;

// --- Re-exports ---
pub use bounds::Bounds;
pub use grid::SampleGrid;

/// Step used by the one-sided finite difference in `Surface::gradient`.
pub const FINITE_DIFFERENCE_STEP: f64 = 1e-6;

/// Mesh resolution used when a surface precomputes its grid.
pub const DEFAULT_GRID_RESOLUTION: usize = 50;

/// The scalar function behind a surface. It receives the domain bounds so
/// terrain generators can normalize coordinates, and it must accept points
/// outside them.
pub type SurfaceFn = dyn Fn(f64, f64, &Bounds) -> f64 + Send + Sync;

/// A scalar field over a bounded 2D domain.
#[derive(Clone)]
pub struct Surface {
    function: Arc<SurfaceFn>,
    bounds: Bounds,
    grid: Option<SampleGrid>,
}

impl Surface {
    /// Wraps `function` over `bounds`.
    ///
    /// # Errors
    /// `EngineError::Configuration` if the bounds are empty or not finite.
    pub fn new<F>(bounds: Bounds, function: F) -> Result<Self>
    where
        F: Fn(f64, f64, &Bounds) -> f64 + Send + Sync + 'static,
    {
        bounds.validate()?;
        Ok(Surface {
            function: Arc::new(function),
            bounds,
            grid: None,
        })
    }

    /// Wraps a function of `(x, y)` alone.
    pub fn from_xy<F>(bounds: Bounds, function: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(bounds, move |x, y, _: &Bounds| function(x, y))
    }

    /// Precomputes and caches a `resolution × resolution` sample grid.
    pub fn with_sample_grid(mut self, resolution: usize) -> Result<Self> {
        self.grid = Some(SampleGrid::compute(&self, resolution)?);
        Ok(self)
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The grid cached by `with_sample_grid`, if any.
    pub fn cached_grid(&self) -> Option<&SampleGrid> {
        self.grid.as_ref()
    }

    /// Surface height at `(x, y)`. The point may lie outside the bounds.
    ///
    /// # Errors
    /// `EngineError::Domain` if the function does not return a finite value.
    pub fn evaluate(&self, x: f64, y: f64) -> Result<f64> {
        let z = (self.function)(x, y, &self.bounds);
        if z.is_finite() {
            Ok(z)
        } else {
            Err(EngineError::Domain { x, y })
        }
    }

    /// Partial derivatives `(dz/dx, dz/dy)` at `(x, y)`.
    ///
    /// One-sided forward difference with the fixed step
    /// `FINITE_DIFFERENCE_STEP`; the error is O(step) in each component.
    pub fn gradient(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let d = FINITE_DIFFERENCE_STEP;
        let z = self.evaluate(x, y)?;
        let dz_dx = (self.evaluate(x + d, y)? - z) / d;
        let dz_dy = (self.evaluate(x, y + d)? - z) / d;
        if dz_dx.is_finite() && dz_dy.is_finite() {
            Ok((dz_dx, dz_dy))
        } else {
            Err(EngineError::Domain { x, y })
        }
    }

    /// Evaluates the surface on an evenly spaced mesh covering the bounds.
    /// Deterministic; the surface itself is not modified.
    pub fn sample_grid(&self, resolution: usize) -> Result<SampleGrid> {
        SampleGrid::compute(self, resolution)
    }

    /// Draws a uniformly distributed point of the domain from `rng`.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        self.bounds.sample(rng)
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("bounds", &self.bounds)
            .field("grid_resolution", &self.grid.as_ref().map(SampleGrid::resolution))
            .finish()
    }
}
