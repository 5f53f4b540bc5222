//! Two dimensional correlation and transforms.
//!
//! These operations are declared so the 2D surface type-checks, but none of
//! them is implemented: each one fails with [`Error::NotImplemented`].

use crate::{Error, Result};
use sig_rs_core::Matrix;

/// 2D cross-correlation of `reference` against `degraded`.
pub fn correlate_2d<F>(_reference: &Matrix<F>, _degraded: &Matrix<F>) -> Result<Matrix<F>> {
    Err(Error::not_implemented("correlate_2d"))
}

/// 2D forward transform.
pub fn fft_2d<F>(_signal: &Matrix<F>) -> Result<Matrix<F>> {
    Err(Error::not_implemented("fft_2d"))
}

/// 2D inverse transform.
pub fn ifft_2d<F>(_spectrum: &Matrix<F>) -> Result<Matrix<F>> {
    Err(Error::not_implemented("ifft_2d"))
}
