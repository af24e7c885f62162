//! Run configuration
//!
//! Describes a race of optimizers over one surface: the domain bounds, a
//! shared starting point and the optimizers to launch with their
//! hyperparameters. The surface function itself is supplied in code.
//!
//! # Example
//!
//! ```json
//! {
//!   "bounds": { "x_min": -15.0, "x_max": 15.0, "y_min": -15.0, "y_max": 15.0 },
//!   "start": [-11.0, -13.0],
//!   "optimizers": [
//!     { "kind": "gradient_descent", "lr": 0.1 },
//!     { "kind": "momentum", "lr": 0.1, "gamma": 0.95 },
//!     { "kind": "adam", "lr": 0.5, "beta1": 0.7, "beta2": 0.999 }
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{EngineError, Result};
use crate::optim::{
    AdaGrad, Adam, BoxedOptimizer, GradientDescent, Momentum, Nesterov, RMSProp,
    StochasticGradientDescent,
};
use crate::surface::{Bounds, Surface};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] EngineError),
}

/// One optimizer to launch, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptimizerConfig {
    GradientDescent {
        lr: f64,
    },
    Stochastic {
        lr: f64,
        #[serde(default = "default_batch_size")]
        batch_size: usize,
        #[serde(default)]
        seed: u64,
    },
    Momentum {
        lr: f64,
        gamma: f64,
    },
    Nesterov {
        lr: f64,
        gamma: f64,
    },
    AdaGrad {
        lr: f64,
    },
    RmsProp {
        lr: f64,
        gamma: f64,
    },
    Adam {
        lr: f64,
        beta1: f64,
        beta2: f64,
    },
}

fn default_batch_size() -> usize {
    1
}

impl OptimizerConfig {
    /// Builds the described optimizer at `(x, y)` on `surface`.
    pub fn build(&self, x: f64, y: f64, surface: Arc<Surface>) -> Result<BoxedOptimizer> {
        let optim: BoxedOptimizer = match *self {
            OptimizerConfig::GradientDescent { lr } => {
                Box::new(GradientDescent::new(x, y, surface, lr)?)
            }
            OptimizerConfig::Stochastic {
                lr,
                batch_size,
                seed,
            } => Box::new(StochasticGradientDescent::seeded(
                x, y, surface, lr, batch_size, seed,
            )?),
            OptimizerConfig::Momentum { lr, gamma } => {
                Box::new(Momentum::new(x, y, surface, lr, gamma)?)
            }
            OptimizerConfig::Nesterov { lr, gamma } => {
                Box::new(Nesterov::new(x, y, surface, lr, gamma)?)
            }
            OptimizerConfig::AdaGrad { lr } => Box::new(AdaGrad::new(x, y, surface, lr)?),
            OptimizerConfig::RmsProp { lr, gamma } => {
                Box::new(RMSProp::new(x, y, surface, lr, gamma)?)
            }
            OptimizerConfig::Adam { lr, beta1, beta2 } => {
                Box::new(Adam::new(x, y, surface, lr, beta1, beta2)?)
            }
        };
        Ok(optim)
    }
}

/// Bounds, starting point and optimizer line-up of a run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    pub bounds: Bounds,
    pub start: (f64, f64),
    pub optimizers: Vec<OptimizerConfig>,
}

impl Default for RunConfig {
    /// The classic line-up: six optimizers racing from (-11, -13) over a
    /// ±15 square.
    fn default() -> Self {
        RunConfig {
            bounds: Bounds {
                x_min: -15.0,
                x_max: 15.0,
                y_min: -15.0,
                y_max: 15.0,
            },
            start: (-11.0, -13.0),
            optimizers: vec![
                OptimizerConfig::GradientDescent { lr: 0.1 },
                OptimizerConfig::Nesterov { lr: 0.1, gamma: 0.95 },
                OptimizerConfig::Momentum { lr: 0.1, gamma: 0.95 },
                OptimizerConfig::AdaGrad { lr: 1.0 },
                OptimizerConfig::RmsProp { lr: 0.5, gamma: 0.9 },
                OptimizerConfig::Adam {
                    lr: 0.5,
                    beta1: 0.7,
                    beta2: 0.999,
                },
            ],
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> std::result::Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the bounds and that the start lies strictly inside them.
    /// Hyperparameters are checked when the optimizers are built.
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        let (x, y) = self.start;
        if !(self.bounds.x_min < x && x < self.bounds.x_max) {
            return Err(EngineError::config("start x", x, "a value strictly inside the x bounds"));
        }
        if !(self.bounds.y_min < y && y < self.bounds.y_max) {
            return Err(EngineError::config("start y", y, "a value strictly inside the y bounds"));
        }
        Ok(())
    }

    /// Builds every configured optimizer at the start point, in order.
    ///
    /// # Errors
    /// The first construction error, typically an out-of-range hyperparameter.
    pub fn build_optimizers(&self, surface: &Arc<Surface>) -> Result<Vec<BoxedOptimizer>> {
        self.validate()?;
        let (x, y) = self.start;
        self.optimizers
            .iter()
            .map(|spec| spec.build(x, y, Arc::clone(surface)))
            .collect()
    }
}

/// Loads a run configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it into a `RunConfig` and validates
/// bounds and start point.
///
/// # Examples
///
/// ```no_run
/// use descent_lab::config::load_run_config;
///
/// let config = load_run_config("run.json").expect("Failed to load config");
/// println!("{} optimizers", config.optimizers.len());
/// ```
pub fn load_run_config<P: AsRef<Path>>(path: P) -> std::result::Result<RunConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    RunConfig::from_json_str(&contents)
}
