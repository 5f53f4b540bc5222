//! Kalman filtering of 1D signals.
//!
//! Declared but not implemented; [`kalman`] always fails with
//! [`Error::NotImplemented`].

use crate::{Error, Result};
use sig_rs_core::{Complex, Signal};

/// Kalman-filter `signal`.
pub fn kalman<F>(_signal: &[Complex<F>]) -> Result<Signal<F>> {
    Err(Error::not_implemented("kalman"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kalman_reports_not_implemented() {
        let x = Signal::from_real([1.0, 2.0, 3.0]);
        assert_eq!(
            kalman(&x),
            Err(Error::NotImplemented { operation: "kalman" })
        );
    }
}
