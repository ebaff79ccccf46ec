//! Numeric sample values and invertible coordinate transforms for
//! n-dimensional data processing.
//!
//! Three small, self-contained pieces that sit underneath a
//! pixel-processing pipeline:
//!
//! - **value**: [`UnsignedLong`](value::UnsignedLong), the full unsigned
//!   64-bit range emulated over native signed storage, with unsigned
//!   ordering and arbitrary-precision interop
//! - **ops**: the [`ScalarUnaryOp`](ops::ScalarUnaryOp) contract for
//!   per-sample transforms, with gamma and constant-parameter linear ops
//! - **transform**: the invertible real-transform trait family and the
//!   diagonal [`Scale`](transform::Scale) transform with matrix and
//!   differential views
//!
//! The pieces do not depend on each other. The surrounding pipeline
//! composes them: ops run over sample values, transforms convert the
//! coordinates used to address those values.
//!
//! # Example
//!
//! ```rust
//! use ndpixel::prelude::*;
//!
//! // Unsigned ordering over raw 64-bit patterns
//! let a = UnsignedLong::new(-1);
//! let b = UnsignedLong::new(1);
//! assert!(a > b);
//!
//! // Gamma correction of one sample
//! let gamma = GammaConstant::new(0.5);
//! assert_eq!(gamma.compute(4.0), 2.0);
//!
//! // Scale a 2D point and come back
//! let scale = Scale::new(&[2.0, 3.0]);
//! let mut point = [0.0; 2];
//! scale.apply(&[1.0, 1.0], &mut point).unwrap();
//! assert_eq!(point, [2.0, 3.0]);
//!
//! let mut back = [0.0; 2];
//! scale.inverse().apply(&point, &mut back).unwrap();
//! assert_eq!(back, [1.0, 1.0]);
//! ```

#![warn(missing_docs)]

pub mod error;

// Sample values
pub mod value;

// Per-sample scalar operations
pub mod ops;

// Real coordinate transforms
pub mod transform;

pub use error::{Error, Result};

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        map_in_place, map_slice, AddConstant, Clamp, GammaConstant, MultiplyConstant,
        ScalarUnaryOp,
    };
    pub use crate::transform::{AffineView, InvertibleRealTransform, RealTransform, Scale};
    pub use crate::value::UnsignedLong;

    // External
    pub use num_bigint::{BigInt, BigUint};
}
