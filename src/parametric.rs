//! Parametric functions that trace curve-shaped cluster centers.
//!
//! A parametric function maps curve parameters, drawn uniformly in `[0, 1)`,
//! to points of the embedding space.  Each generated point of a curve-shaped
//! cluster gets its own center, slid along the curve.

use crate::Point2D;
use nalgebra::DMatrix;
use nalgebra::DVector;
use std::f64::consts::TAU;
use std::fmt;

/// The `Parametric` trait maps curve parameters to points.
///
/// Closures of type `Fn(&DVector<f64>) -> DMatrix<f64>` implement it.
pub trait Parametric {
    /// Map each parameter of `t` to a point.
    ///
    /// Row `i` of the returned matrix is the curve point for `t[i]`, and the
    /// matrix must have as many columns as the embedding space has
    /// dimensions.
    fn trace(&self, t: &DVector<f64>) -> DMatrix<f64>;
}

impl<F> Parametric for F
where
    F: Fn(&DVector<f64>) -> DMatrix<f64>,
{
    fn trace(&self, t: &DVector<f64>) -> DMatrix<f64> {
        self(t)
    }
}

/// A curve given one coordinate function per axis.
///
/// The coordinate functions are evaluated for each parameter and their
/// outputs are concatenated column-wise.
///
/// # Example
///
/// ```rust
/// use nuage::nalgebra::DVector;
/// use nuage::Parametric as _;
///
/// let parabola = nuage::Components(vec![
///     Box::new(|t: f64| t) as Box<dyn Fn(f64) -> f64>,
///     Box::new(|t: f64| t * t),
/// ]);
/// let points = parabola.trace(&DVector::from_vec(vec![0.0, 0.5]));
///
/// assert_eq!(points.shape(), (2, 2));
/// assert_eq!(points[(1, 1)], 0.25);
/// ```
pub struct Components<F>(pub Vec<F>);

impl<F> Parametric for Components<F>
where
    F: Fn(f64) -> f64,
{
    fn trace(&self, t: &DVector<f64>) -> DMatrix<f64> {
        DMatrix::from_fn(t.len(), self.0.len(), |i, axis| (self.0[axis])(t[i]))
    }
}

impl<F> fmt::Debug for Components<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Components")
            .field("len", &self.0.len())
            .finish()
    }
}

/// The straight segment from `from` (at `t = 0`) to `to` (at `t = 1`).
///
/// Both ends should have the same dimension; extra coordinates of the longer
/// one are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub from: DVector<f64>,
    pub to: DVector<f64>,
}

impl Parametric for Segment {
    fn trace(&self, t: &DVector<f64>) -> DMatrix<f64> {
        let dimension = usize::min(self.from.len(), self.to.len());
        DMatrix::from_fn(t.len(), dimension, |i, axis| {
            let (from, to) = (self.from[axis], self.to[axis]);
            f64::mul_add(t[i], to - from, from)
        })
    }
}

/// A circle in the plane, travelled once as `t` goes from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Parametric for Circle {
    fn trace(&self, t: &DVector<f64>) -> DMatrix<f64> {
        DMatrix::from_fn(t.len(), 2, |i, axis| {
            let angle = TAU * t[i];
            let offset = if axis == 0 { angle.cos() } else { angle.sin() };
            self.center[axis] + self.radius * offset
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use approx::assert_ulps_eq;

    #[test]
    fn test_closure() {
        let diagonal = |t: &DVector<f64>| DMatrix::from_fn(t.len(), 3, |i, _| t[i]);
        let points = diagonal.trace(&DVector::from_vec(vec![0.25, 0.75]));

        assert_eq!(points.shape(), (2, 3));
        assert_eq!(points.row(1).iter().copied().collect::<Vec<_>>(), [0.75; 3]);
    }

    #[test]
    fn test_segment() {
        let segment = Segment {
            from: DVector::from_vec(vec![0.0, -2.0]),
            to: DVector::from_vec(vec![4.0, 2.0]),
        };
        let points = segment.trace(&DVector::from_vec(vec![0.0, 0.5, 1.0]));

        assert_eq!(points.shape(), (3, 2));
        assert_ulps_eq!(points[(0, 0)], 0.0);
        assert_ulps_eq!(points[(0, 1)], -2.0);
        assert_ulps_eq!(points[(1, 0)], 2.0);
        assert_ulps_eq!(points[(1, 1)], 0.0);
        assert_ulps_eq!(points[(2, 0)], 4.0);
        assert_ulps_eq!(points[(2, 1)], 2.0);
    }

    #[test]
    fn test_circle() {
        let circle = Circle {
            center: Point2D::new(1.0, -1.0),
            radius: 3.0,
        };
        let t = DVector::from_fn(50, |i, _| i as f64 / 50.0);
        let points = circle.trace(&t);

        assert_eq!(points.shape(), (50, 2));
        for row in points.row_iter() {
            let distance = f64::hypot(row[0] - 1.0, row[1] + 1.0);
            assert_relative_eq!(distance, 3.0, epsilon = 1e-12);
        }
        assert_relative_eq!(points[(0, 0)], 4.0, epsilon = 1e-12);
        assert_relative_eq!(points[(0, 1)], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_components() {
        let double = |t: f64| 2.0 * t;
        let line = Components(vec![double, double]);
        let points = line.trace(&DVector::from_vec(vec![0.5]));

        assert_eq!(points.shape(), (1, 2));
        assert_eq!(points[(0, 0)], 1.0);
        assert_eq!(points[(0, 1)], 1.0);
    }
}
