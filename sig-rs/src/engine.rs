//! The full set of signal operations behind one trait.
//!
//! [`SignalProcessor`] is the capability set a host application programs
//! against; [`DspEngine`] is its implementation, forwarding to the free
//! functions in [`crate::signal`] and [`crate::stats`].

use crate::{signal, stats, Result};
use num_traits::{Float, FloatConst};
use sig_rs_core::{Complex, Matrix, Signal};

/// Correlation, transforms and statistics over complex signals.
///
/// Every result is a freshly allocated value owned by the caller; inputs are
/// only borrowed for the duration of the call.
pub trait SignalProcessor<F> {
    /// Correlate `reference` against `degraded` over `min_lag..=max_lag`.
    ///
    /// See [`signal::correlate()`] for the output layout.
    fn correlate(
        &self,
        reference: &[Complex<F>],
        degraded: &[Complex<F>],
        min_lag: usize,
        max_lag: usize,
    ) -> Result<Signal<F>>;

    /// Forward transform, zero-padded to [`signal::padded_len`] samples.
    fn fft(&self, signal: &[Complex<F>]) -> Signal<F>;

    /// Inverse transform, zero-padded to [`signal::padded_len`] samples and
    /// normalized by that length.
    fn ifft(&self, spectrum: &[Complex<F>]) -> Signal<F>;

    /// Arithmetic mean.
    fn mean(&self, signal: &[Complex<F>]) -> Complex<F>;

    /// Mean of the complex squares.
    fn mean_square(&self, signal: &[Complex<F>]) -> Complex<F>;

    /// Real-valued root mean square, `sqrt(mean(|x²|))`.
    fn rms(&self, signal: &[Complex<F>]) -> Complex<F>;

    /// `sqrt(mean_square - mean²)`.
    fn stdev(&self, signal: &[Complex<F>]) -> Complex<F>;

    /// 2D correlation. Not implemented.
    fn correlate_2d(&self, reference: &Matrix<F>, degraded: &Matrix<F>) -> Result<Matrix<F>>;

    /// 2D forward transform. Not implemented.
    fn fft_2d(&self, signal: &Matrix<F>) -> Result<Matrix<F>>;

    /// 2D inverse transform. Not implemented.
    fn ifft_2d(&self, spectrum: &Matrix<F>) -> Result<Matrix<F>>;

    /// Kalman filter. Not implemented.
    fn kalman(&self, signal: &[Complex<F>]) -> Result<Signal<F>>;
}

/// The stateless [`SignalProcessor`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DspEngine;

impl<F> SignalProcessor<F> for DspEngine
where
    F: Float + FloatConst,
{
    fn correlate(
        &self,
        reference: &[Complex<F>],
        degraded: &[Complex<F>],
        min_lag: usize,
        max_lag: usize,
    ) -> Result<Signal<F>> {
        signal::correlate(reference, degraded, min_lag, max_lag)
    }

    fn fft(&self, signal: &[Complex<F>]) -> Signal<F> {
        signal::fft(signal)
    }

    fn ifft(&self, spectrum: &[Complex<F>]) -> Signal<F> {
        signal::ifft(spectrum)
    }

    fn mean(&self, signal: &[Complex<F>]) -> Complex<F> {
        stats::mean(signal.iter()).0
    }

    fn mean_square(&self, signal: &[Complex<F>]) -> Complex<F> {
        stats::mean_square(signal.iter()).0
    }

    fn rms(&self, signal: &[Complex<F>]) -> Complex<F> {
        stats::rms(signal.iter()).0
    }

    fn stdev(&self, signal: &[Complex<F>]) -> Complex<F> {
        stats::stdev(signal.iter()).0
    }

    fn correlate_2d(&self, reference: &Matrix<F>, degraded: &Matrix<F>) -> Result<Matrix<F>> {
        signal::correlate_2d(reference, degraded)
    }

    fn fft_2d(&self, signal: &Matrix<F>) -> Result<Matrix<F>> {
        signal::fft_2d(signal)
    }

    fn ifft_2d(&self, spectrum: &Matrix<F>) -> Result<Matrix<F>> {
        signal::ifft_2d(spectrum)
    }

    fn kalman(&self, signal: &[Complex<F>]) -> Result<Signal<F>> {
        signal::kalman(signal)
    }
}
