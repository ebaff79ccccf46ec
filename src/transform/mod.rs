//! Real Coordinate Transforms
//!
//! A transform maps points of a continuous source space into a target
//! space. The traits here are the contract shared by every variant of
//! the family, so a diagonal scale, a translation, or a general affine
//! map stay interchangeable behind the same calls. [`Scale`] is the
//! diagonal variant this crate ships; other variants live with the
//! coordinate-addressing layers that need them.
//!
//! Coordinates travel as `f64` slices. A transform of dimensionality
//! `n` touches the first `n` components of each slice and leaves any
//! trailing components alone; slices shorter than `n` are rejected with
//! an explicit error instead of reading out of bounds.

pub mod scale;

pub use scale::Scale;

use crate::Result;

/// Map points from a source space to a target space
pub trait RealTransform: Send + Sync {
    /// Dimensionality of the source space
    fn num_source_dimensions(&self) -> usize;

    /// Dimensionality of the target space
    fn num_target_dimensions(&self) -> usize;

    /// Map `source` into `target`
    ///
    /// Components beyond the space's dimensionality stay untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorTooSmall`](crate::Error::VectorTooSmall)
    /// when either slice holds fewer components than its space has
    /// dimensions.
    fn apply(&self, source: &[f64], target: &mut [f64]) -> Result<()>;
}

/// A transform paired with its algebraic inverse
pub trait InvertibleRealTransform: RealTransform {
    /// Map `target` back into `source`
    ///
    /// The exact algebraic inverse of [`RealTransform::apply`] wherever
    /// the transform is nondegenerate. Same length rules and errors as
    /// `apply`.
    fn apply_inverse(&self, target: &[f64], source: &mut [f64]) -> Result<()>;

    /// The paired inverse transform
    ///
    /// Taking the inverse of the result yields the original transform
    /// again.
    fn inverse(&self) -> Self
    where
        Self: Sized;
}

/// Dense matrix view of an affine transform
///
/// An affine map of an `n`-dimensional space reads as an `n x (n + 1)`
/// matrix; the extra column holds the translation component. The view is
/// computed per element, nothing is materialized until
/// [`AffineView::row_packed_matrix`] asks for it.
pub trait AffineView: InvertibleRealTransform {
    /// Matrix entry at `(row, col)` of the `n x (n + 1)` view
    ///
    /// # Panics
    ///
    /// Panics when `row >= n` or `col > n`.
    fn matrix_element(&self, row: usize, col: usize) -> f64;

    /// The full `n x (n + 1)` matrix in row-major order
    fn row_packed_matrix(&self) -> Vec<f64>;

    /// Partial derivative of the map along dimension `d`
    ///
    /// Constant over the whole space for an affine map, so no input
    /// point is taken.
    ///
    /// # Panics
    ///
    /// Panics when `d >= n`.
    fn differential(&self, d: usize) -> Vec<f64>;
}
