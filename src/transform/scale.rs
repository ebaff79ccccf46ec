//! Diagonal scaling of real coordinates

use super::{AffineView, InvertibleRealTransform, RealTransform};
use crate::{Error, Result};
use std::sync::Arc;

/// n-dimensional diagonal scale transform
///
/// Holds one scale factor per dimension; `apply` multiplies each source
/// component by its factor and `apply_inverse` divides by it. The
/// reciprocal factors are computed once at construction and
/// [`Scale::inverse`] just swaps the two sequences, so a transform and
/// its inverse are permanent twins over the same shared storage and
/// `inverse().inverse()` comes back to the original storage.
///
/// Factors are immutable after construction. A zero factor is accepted
/// as-is: its reciprocal is infinite and `apply_inverse` then produces
/// non-finite components, so callers wanting a bijective map must keep
/// every factor nonzero.
///
/// # Example
///
/// ```
/// use ndpixel::transform::{InvertibleRealTransform, RealTransform, Scale};
///
/// let scale = Scale::new(&[2.0, 3.0]);
///
/// let mut target = [0.0; 2];
/// scale.apply(&[1.0, 1.0], &mut target).unwrap();
/// assert_eq!(target, [2.0, 3.0]);
///
/// let mut source = [0.0; 2];
/// scale.apply_inverse(&target, &mut source).unwrap();
/// assert_eq!(source, [1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    /// Per-dimension scale factors
    s: Arc<[f64]>,
    /// Reciprocal factors, shared with the inverse twin
    si: Arc<[f64]>,
}

impl Scale {
    /// Create a scale transform from per-dimension factors
    pub fn new(factors: &[f64]) -> Self {
        let reciprocals: Vec<f64> = factors.iter().map(|&f| 1.0 / f).collect();
        Self {
            s: Arc::from(factors),
            si: reciprocals.into(),
        }
    }

    /// Number of dimensions scaled
    pub fn num_dimensions(&self) -> usize {
        self.s.len()
    }

    /// Scale factor for dimension `d`
    ///
    /// # Panics
    ///
    /// Panics when `d` is out of range.
    pub fn factor(&self, d: usize) -> f64 {
        assert!(d < self.s.len(), "Dimension out of range: {}", d);
        self.s[d]
    }

    /// All scale factors, one per dimension
    pub fn factors(&self) -> &[f64] {
        &self.s
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len < self.s.len() {
            return Err(Error::VectorTooSmall {
                dims: self.s.len(),
                len,
            });
        }
        Ok(())
    }
}

impl RealTransform for Scale {
    fn num_source_dimensions(&self) -> usize {
        self.s.len()
    }

    fn num_target_dimensions(&self) -> usize {
        self.s.len()
    }

    fn apply(&self, source: &[f64], target: &mut [f64]) -> Result<()> {
        self.check_len(source.len())?;
        self.check_len(target.len())?;

        for d in 0..self.s.len() {
            target[d] = source[d] * self.s[d];
        }
        Ok(())
    }
}

impl InvertibleRealTransform for Scale {
    fn apply_inverse(&self, target: &[f64], source: &mut [f64]) -> Result<()> {
        self.check_len(target.len())?;
        self.check_len(source.len())?;

        for d in 0..self.s.len() {
            source[d] = target[d] / self.s[d];
        }
        Ok(())
    }

    fn inverse(&self) -> Self {
        Self {
            s: Arc::clone(&self.si),
            si: Arc::clone(&self.s),
        }
    }
}

impl AffineView for Scale {
    fn matrix_element(&self, row: usize, col: usize) -> f64 {
        let n = self.s.len();
        assert!(row < n, "Row out of range: {}", row);
        assert!(col <= n, "Column out of range: {}", col);

        if row == col {
            self.s[row]
        } else {
            0.0
        }
    }

    fn row_packed_matrix(&self) -> Vec<f64> {
        let n = self.s.len();
        let mut matrix = vec![0.0; n * (n + 1)];
        for d in 0..n {
            matrix[d * (n + 1) + d] = self.s[d];
        }
        matrix
    }

    fn differential(&self, d: usize) -> Vec<f64> {
        let n = self.s.len();
        assert!(d < n, "Dimension out of range: {}", d);

        let mut direction = vec![0.0; n];
        direction[d] = self.s[d];
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_multiplies() {
        let scale = Scale::new(&[2.0, 3.0]);
        let mut target = [0.0; 2];

        scale.apply(&[1.0, 1.0], &mut target).unwrap();
        assert_eq!(target, [2.0, 3.0]);

        scale.apply(&[-1.5, 2.0], &mut target).unwrap();
        assert_eq!(target, [-3.0, 6.0]);
    }

    #[test]
    fn test_apply_inverse_divides() {
        let scale = Scale::new(&[2.0, 3.0]);
        let mut source = [0.0; 2];

        scale.apply_inverse(&[2.0, 3.0], &mut source).unwrap();
        assert_eq!(source, [1.0, 1.0]);

        scale.apply_inverse(&[-3.0, 6.0], &mut source).unwrap();
        assert_eq!(source, [-1.5, 2.0]);
    }

    #[test]
    fn test_inverse_factors_are_reciprocal() {
        let scale = Scale::new(&[2.0, 4.0]);
        let inverse = scale.inverse();

        assert_eq!(inverse.factors(), &[0.5, 0.25]);
        for d in 0..2 {
            assert_eq!(scale.factor(d) * inverse.factor(d), 1.0);
        }
    }

    #[test]
    fn test_inverse_round_trip_shares_storage() {
        let scale = Scale::new(&[2.0, 3.0, 4.0]);
        let back = scale.inverse().inverse();

        assert!(Arc::ptr_eq(&scale.s, &back.s));
        assert!(Arc::ptr_eq(&scale.si, &back.si));
        assert_eq!(scale, back);
    }

    #[test]
    fn test_dimension_counts() {
        let scale = Scale::new(&[1.5, 2.5, 3.5]);
        assert_eq!(scale.num_dimensions(), 3);
        assert_eq!(scale.num_source_dimensions(), 3);
        assert_eq!(scale.num_target_dimensions(), 3);
        assert_eq!(scale.inverse().num_source_dimensions(), 3);
    }

    #[test]
    fn test_matrix_elements() {
        let scale = Scale::new(&[2.0, 3.0]);

        assert_eq!(scale.matrix_element(0, 0), 2.0);
        assert_eq!(scale.matrix_element(0, 1), 0.0);
        assert_eq!(scale.matrix_element(1, 0), 0.0);
        assert_eq!(scale.matrix_element(1, 1), 3.0);

        // Translation column is always zero.
        assert_eq!(scale.matrix_element(0, 2), 0.0);
        assert_eq!(scale.matrix_element(1, 2), 0.0);
    }

    #[test]
    fn test_row_packed_matrix_layout() {
        let scale = Scale::new(&[2.0, 3.0]);
        assert_eq!(
            scale.row_packed_matrix(),
            vec![2.0, 0.0, 0.0, 0.0, 3.0, 0.0]
        );

        let scale3 = Scale::new(&[5.0, 6.0, 7.0]);
        let matrix = scale3.row_packed_matrix();
        assert_eq!(matrix.len(), 3 * 4);
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(matrix[row * 4 + col], scale3.matrix_element(row, col));
            }
        }
    }

    #[test]
    fn test_differential_is_scaled_basis() {
        let scale = Scale::new(&[2.0, 3.0, 4.0]);

        for d in 0..3 {
            let direction = scale.differential(d);
            assert_eq!(direction.len(), 3);
            for (i, &component) in direction.iter().enumerate() {
                let expected = if i == d { scale.factor(d) } else { 0.0 };
                assert_eq!(component, expected);
            }
        }
    }

    #[test]
    fn test_short_vectors_rejected() {
        let scale = Scale::new(&[2.0, 3.0]);

        let mut short_target = [0.0; 1];
        let err = scale.apply(&[1.0, 1.0], &mut short_target).unwrap_err();
        assert!(matches!(err, Error::VectorTooSmall { dims: 2, len: 1 }));

        let mut source = [0.0; 2];
        let err = scale.apply_inverse(&[1.0], &mut source).unwrap_err();
        assert!(matches!(err, Error::VectorTooSmall { dims: 2, len: 1 }));
    }

    #[test]
    fn test_longer_vectors_tolerated() {
        let scale = Scale::new(&[2.0]);
        let mut target = [0.0, 99.0];

        scale.apply(&[3.0, 123.0], &mut target).unwrap();

        // Trailing components pass through untouched.
        assert_eq!(target, [6.0, 99.0]);
    }

    #[test]
    fn test_zero_factor_inverse_is_infinite() {
        let scale = Scale::new(&[0.0, 2.0]);
        assert!(scale.inverse().factor(0).is_infinite());

        let mut source = [0.0; 2];
        scale.apply_inverse(&[5.0, 4.0], &mut source).unwrap();
        assert!(source[0].is_infinite());
        assert_eq!(source[1], 2.0);
    }

    #[test]
    fn test_zero_dimensional() {
        let scale = Scale::new(&[]);
        assert_eq!(scale.num_dimensions(), 0);

        let mut target: [f64; 0] = [];
        scale.apply(&[], &mut target).unwrap();
        assert!(scale.row_packed_matrix().is_empty());
    }

    #[test]
    fn test_clone_is_cheap() {
        let scale = Scale::new(&[1.0, 2.0]);
        let clone = scale.clone();

        assert!(Arc::ptr_eq(&scale.s, &clone.s));
        assert_eq!(scale, clone);
    }

    #[test]
    #[should_panic(expected = "Row out of range")]
    fn test_matrix_element_row_out_of_range() {
        Scale::new(&[1.0]).matrix_element(1, 0);
    }

    #[test]
    #[should_panic(expected = "Dimension out of range")]
    fn test_differential_out_of_range() {
        Scale::new(&[1.0, 2.0]).differential(2);
    }
}
