//! # Engine Errors
//!
//! A single error enum covers the three failure modes of the engine:
//! rejected hyperparameters, vector division by zero, and a surface that
//! stops producing finite values.

/// Errors raised by the vector type, the surface and the optimizers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid {parameter}: got {value}, expected {expected}")]
    Configuration {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("Division of a vector by zero")]
    Division,
    #[error("Surface is not finite at ({x}, {y})")]
    Domain { x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub(crate) fn config(parameter: &'static str, value: f64, expected: &'static str) -> Self {
        EngineError::Configuration {
            parameter,
            value,
            expected,
        }
    }
}

/// Rejects coefficients outside the closed unit interval (gamma).
pub(crate) fn check_unit_closed(parameter: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::config(parameter, value, "a value in [0, 1]"))
    }
}

/// Rejects coefficients outside the half-open unit interval (Adam betas).
pub(crate) fn check_unit_half_open(parameter: &'static str, value: f64) -> Result<f64> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::config(parameter, value, "a value in [0, 1)"))
    }
}

pub(crate) fn check_learning_rate(lr: f64) -> Result<f64> {
    if lr.is_finite() && lr >= 0.0 {
        Ok(lr)
    } else {
        Err(EngineError::config("learning rate", lr, "a finite value >= 0"))
    }
}
