use crate::models::{PerPlotResult, Rule, ValidationResult, ValidationStep};

/// Accumulates the remediation trace for one validation run (or one feature
/// in per-plot mode). Steps keep insertion order; validity only ever goes
/// from true to false.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    is_valid: bool,
    errors: Vec<String>,
    steps: Vec<ValidationStep>,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn pass(&mut self, rule: Rule, message: impl Into<String>) {
        self.steps.push(ValidationStep {
            rule,
            passed: true,
            message: message.into(),
        });
    }

    pub fn fail(&mut self, rule: Rule, message: impl Into<String>) {
        let message = message.into();
        self.is_valid = false;
        self.errors.push(message.clone());
        self.steps.push(ValidationStep {
            rule,
            passed: false,
            message,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Appends another trace after this one, keeping both orders intact.
    pub fn append(&mut self, other: Diagnostics) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.steps.extend(other.steps);
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.is_valid,
            errors: self.errors,
            steps: self.steps,
        }
    }

    pub fn into_plot_result(self, plot_id: String, farmer: String) -> PerPlotResult {
        PerPlotResult {
            plot_id,
            farmer,
            is_valid: self.is_valid,
            errors: self.errors,
            steps: self.steps,
        }
    }
}
