//! Row-wise Euclidean normalization.

use crate::Error;
use nalgebra::DMatrix;

/// Rescale each row of `block` to unit Euclidean length, in place.
///
/// Fails on the first row whose norm is zero or not finite; rows before it
/// have already been rescaled.
pub fn normalize_rows_mut(block: &mut DMatrix<f64>) -> Result<(), Error> {
    for (row_idx, mut row) in block.row_iter_mut().enumerate() {
        let norm = row.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(Error::ZeroVector { row: row_idx });
        }
        row /= norm;
    }
    Ok(())
}

/// Return a copy of `block` where every row has unit Euclidean length.
///
/// Each row is a point in a space with as many dimensions as `block` has
/// columns.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), nuage::Error> {
/// use nuage::nalgebra::DMatrix;
///
/// let block = DMatrix::from_row_slice(2, 2, &[3.0, 4.0, 0.0, -2.0]);
/// let unit = nuage::normalized_rows(&block)?;
///
/// assert_eq!(unit, DMatrix::from_row_slice(2, 2, &[0.6, 0.8, 0.0, -1.0]));
/// # Ok(())
/// # }
/// ```
pub fn normalized_rows(block: &DMatrix<f64>) -> Result<DMatrix<f64>, Error> {
    let mut block = block.clone();
    normalize_rows_mut(&mut block)?;
    Ok(block)
}
