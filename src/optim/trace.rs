//! # Step Trace
//!
//! Per-step diagnostics. A tracer is silent by default; `verbose` prints one
//! line per step and `collect` keeps the records in memory.

use std::fmt::Write;

/// One committed optimizer step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    pub optimizer: &'static str,
    pub iter: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub speed: f64,
}

impl StepRecord {
    pub fn format_line(&self) -> String {
        let mut line = format!("[{}] iter {:>6}", self.optimizer, self.iter);
        let _ = write!(line, " | x {:>+13.6e} | y {:>+13.6e}", self.x, self.y);
        let _ = write!(line, " | z {:>13.6e}", self.z);
        let _ = write!(line, " | speed {:>13.6e}", self.speed);
        line
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct StepTracer {
    verbose: bool,
    history: Option<Vec<StepRecord>>,
}

impl StepTracer {
    pub(crate) fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Starts or stops keeping records. Stopping drops what was kept.
    pub(crate) fn set_collect(&mut self, collect: bool) {
        match (collect, self.history.is_some()) {
            (true, false) => self.history = Some(Vec::new()),
            (false, true) => self.history = None,
            _ => {}
        }
    }

    pub(crate) fn emit(&mut self, record: StepRecord) {
        if self.verbose {
            println!("{}", record.format_line());
        }
        if let Some(history) = &mut self.history {
            history.push(record);
        }
    }

    pub(crate) fn records(&self) -> &[StepRecord] {
        self.history.as_deref().unwrap_or_default()
    }
}
