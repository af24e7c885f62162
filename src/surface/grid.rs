//! # Sample Grid
//!
//! Evenly spaced mesh of surface samples, consumed by renderers.
//! Uses `ndarray::Array2` with a meshgrid layout: row index follows y,
//! column index follows x.

use ndarray::{Array1, Array2};

use super::Surface;
use crate::error::{EngineError, Result};

/// Precomputed `resolution × resolution` mesh of surface samples.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
    pub z: Array2<f64>,
}

impl SampleGrid {
    pub(crate) fn compute(surface: &Surface, resolution: usize) -> Result<Self> {
        if resolution == 0 {
            return Err(EngineError::config("grid resolution", 0.0, "at least 1 sample per axis"));
        }
        let b = surface.bounds();
        let xs = Array1::linspace(b.x_min, b.x_max, resolution);
        let ys = Array1::linspace(b.y_min, b.y_max, resolution);

        let shape = (resolution, resolution);
        let x = Array2::from_shape_fn(shape, |(_, j)| xs[j]);
        let y = Array2::from_shape_fn(shape, |(i, _)| ys[i]);

        let mut z = Array2::<f64>::zeros(shape);
        for ((i, j), value) in z.indexed_iter_mut() {
            *value = surface.evaluate(xs[j], ys[i])?;
        }

        Ok(SampleGrid { x, y, z })
    }

    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.z.nrows()
    }

    /// Lowest sampled surface value and where it was found, as `(x, y, z)`.
    pub fn min_sample(&self) -> Option<(f64, f64, f64)> {
        self.z
            .indexed_iter()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(idx, &z)| (self.x[idx], self.y[idx], z))
    }
}
