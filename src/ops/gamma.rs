//! Power-law (gamma) scaling of sample intensities

use super::ScalarUnaryOp;
use serde::{Deserialize, Serialize};

/// Gamma op: `input ^ constant` for positive input, `0` otherwise
///
/// Non-positive input clamps to `0.0` instead of producing `NaN`, and
/// the cut includes `input == 0` exactly. That clamp is a deliberate
/// departure from the mathematical power function (for which `0^0 == 1`
/// and negative bases can be defined for integer exponents); callers
/// needing those semantics must handle non-positive samples themselves.
///
/// Positive input follows standard floating-point rules, so very large
/// results overflow to infinity rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GammaConstant {
    /// Exponent applied to each sample
    pub constant: f64,
}

impl GammaConstant {
    /// Create a gamma op with the given exponent
    ///
    /// Negative, zero, and fractional exponents are all accepted
    /// unchecked.
    pub fn new(constant: f64) -> Self {
        Self { constant }
    }
}

impl ScalarUnaryOp for GammaConstant {
    fn compute(&self, input: f64) -> f64 {
        if input <= 0.0 {
            0.0
        } else {
            (self.constant * input.ln()).exp()
        }
    }

    fn name(&self) -> &str {
        "Gamma"
    }
}
