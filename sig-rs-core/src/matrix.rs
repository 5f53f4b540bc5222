use crate::Complex;
use ndarray::{Array2, ArrayView2};
use num_traits::Float;

/// A two dimensional complex signal.
///
/// The 2D operations that take a `Matrix` are placeholders, so this type only
/// carries the samples and their shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<F = f64> {
    data: Array2<Complex<F>>,
}

impl<F: Float> Matrix<F> {
    /// A `rows` x `cols` matrix of zero samples.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::default((rows, cols)),
        }
    }
}

impl<F> Matrix<F> {
    /// Wrap an existing array.
    pub fn from_array(data: Array2<Complex<F>>) -> Self {
        Self { data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Borrow the samples.
    pub fn view(&self) -> ArrayView2<'_, Complex<F>> {
        self.data.view()
    }
}
