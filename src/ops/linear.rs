//! Constant-parameter linear and clamping ops

use super::ScalarUnaryOp;
use serde::{Deserialize, Serialize};

/// Multiply each sample by a constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplyConstant {
    /// Scalar multiplier
    pub constant: f64,
}

impl MultiplyConstant {
    /// Create a multiply op
    pub fn new(constant: f64) -> Self {
        Self { constant }
    }
}

impl ScalarUnaryOp for MultiplyConstant {
    fn compute(&self, input: f64) -> f64 {
        input * self.constant
    }

    fn name(&self) -> &str {
        "Multiply"
    }
}

/// Add a constant offset to each sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddConstant {
    /// Scalar offset
    pub constant: f64,
}

impl AddConstant {
    /// Create an add op
    pub fn new(constant: f64) -> Self {
        Self { constant }
    }
}

impl ScalarUnaryOp for AddConstant {
    fn compute(&self, input: f64) -> f64 {
        input + self.constant
    }

    fn name(&self) -> &str {
        "Add"
    }
}

/// Clamp each sample into `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clamp {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Clamp {
    /// Create a clamp op
    ///
    /// `compute` follows `f64::clamp`, so `min` must not exceed `max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl ScalarUnaryOp for Clamp {
    fn compute(&self, input: f64) -> f64 {
        input.clamp(self.min, self.max)
    }

    fn name(&self) -> &str {
        "Clamp"
    }
}
