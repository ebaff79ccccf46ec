//! Scalar Operations
//!
//! Defines the `ScalarUnaryOp` trait for per-sample transformations plus
//! slice helpers for running one op across a buffer.
//!
//! ## Design
//!
//! Ops are plain value types: a handful of immutable parameters captured
//! at construction and a pure `compute`. A caller-managed pipeline hands
//! each of its workers an independent copy of the op, so nothing here
//! carries shared mutable state and `compute` stays safe to call
//! concurrently on the same instance. Scheduling itself lives outside
//! this crate.
//!
//! ## Example
//!
//! ```
//! use ndpixel::ops::{map_in_place, GammaConstant, ScalarUnaryOp};
//!
//! let gamma = GammaConstant::new(0.5);
//! assert_eq!(gamma.compute(4.0), 2.0);
//!
//! let mut samples = vec![0.0, 1.0, 4.0];
//! map_in_place(&gamma, &mut samples);
//! assert_eq!(samples, vec![0.0, 1.0, 2.0]);
//! ```

pub mod gamma;
pub mod linear;

pub use gamma::GammaConstant;
pub use linear::{AddConstant, Clamp, MultiplyConstant};

use crate::{Error, Result};

/// Unary scalar operation over sample values
///
/// Implementors transform one input sample into one output sample. The
/// contract a parallel caller relies on:
///
/// - `compute` never mutates captured parameters and has no side effects
///   beyond the returned value, so concurrent calls on one shared
///   instance are safe.
/// - The ops in this crate are `Copy` value types; a worker takes its own
///   copy instead of sharing an instance across execution contexts.
pub trait ScalarUnaryOp: Send + Sync {
    /// Transform one sample
    fn compute(&self, input: f64) -> f64;

    /// Optional operation name for debugging
    fn name(&self) -> &str {
        "UnnamedOp"
    }
}

/// Apply `op` to every sample of `input`, writing results into `output`
///
/// # Errors
///
/// Returns [`Error::BufferLengthMismatch`] when the slices disagree in
/// length.
#[tracing::instrument(skip(op, input, output), fields(op = op.name(), n = input.len()))]
pub fn map_slice(op: &dyn ScalarUnaryOp, input: &[f64], output: &mut [f64]) -> Result<()> {
    if input.len() != output.len() {
        return Err(Error::BufferLengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }

    for (out, &x) in output.iter_mut().zip(input) {
        *out = op.compute(x);
    }

    tracing::trace!("map_slice complete");
    Ok(())
}

/// Apply `op` to every sample of `data` in place
#[tracing::instrument(skip(op, data), fields(op = op.name(), n = data.len()))]
pub fn map_in_place(op: &dyn ScalarUnaryOp, data: &mut [f64]) {
    for x in data.iter_mut() {
        *x = op.compute(*x);
    }
}
