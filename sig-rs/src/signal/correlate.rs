//! Lag-windowed cross-correlation of complex signals.
//!
//! Output index `lag + max_lag` holds
//! `Σ reference[n] · conj(degraded[n - lag])` over the `n` for which
//! `n - lag` indexes `degraded`. Only the lags in `[-max_lag, -min_lag]` and
//! `[min_lag + 1, max_lag]` are computed; the band `(-min_lag, min_lag]` is
//! left at zero. A full result can therefore be assembled from several calls
//! over adjacent lag windows.

use crate::kernel::{
    check_len, ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D,
};
use crate::signal::traits::Correlate1D;
use crate::Result;
use num_traits::{Float, Zero};
use sig_rs_core::{Complex, Signal};

/// Sum of `reference[n] · conj(degraded[shift(n)])` over every `n` whose
/// shifted index lands inside `degraded`.
fn lag_sum<F, S>(reference: &[Complex<F>], degraded: &[Complex<F>], shift: S) -> Complex<F>
where
    F: Float,
    S: Fn(usize) -> Option<usize>,
{
    reference
        .iter()
        .enumerate()
        .filter_map(|(n, r)| {
            shift(n)
                .and_then(|m| degraded.get(m))
                .map(|d| *r * d.conj())
        })
        .sum()
}

/// Fill `out` (length `2 * max_lag + 1`) with the two lag bands.
fn correlate_into<F: Float>(
    reference: &[Complex<F>],
    degraded: &[Complex<F>],
    min_lag: usize,
    max_lag: usize,
    out: &mut [Complex<F>],
) {
    tracing::trace!(
        reference_len = reference.len(),
        degraded_len = degraded.len(),
        min_lag,
        max_lag,
        "correlating lag bands"
    );
    out.iter_mut().for_each(|z| *z = Complex::zero());

    // lags -max_lag..=-min_lag
    for lag in min_lag..=max_lag {
        out[max_lag - lag] = lag_sum(reference, degraded, |n| n.checked_add(lag));
    }
    // lags min_lag+1..=max_lag; n - lag below zero is excluded, never wrapped
    for lag in (min_lag + 1)..=max_lag {
        out[max_lag + lag] = lag_sum(reference, degraded, |n| n.checked_sub(lag));
    }
}

///
/// Cross-correlate `reference` against `degraded` over the lag window
/// `min_lag..=max_lag`.
///
/// Returns `2 * max_lag + 1` samples indexed by `lag + max_lag`. Entries for
/// lags in `(-min_lag, min_lag]` stay zero. Fails when `min_lag > max_lag`.
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use sig_rs::signal::correlate::correlate;
/// use sig_rs::{Complex, Signal};
///
/// let x = Signal::from_real([1.0, 2.0, 3.0]);
/// let c = correlate(&x, &x, 0, 2).unwrap();
/// let expected = [3.0, 8.0, 14.0, 8.0, 3.0];
/// for (ci, e) in c.iter().zip(expected) {
///     assert_abs_diff_eq!(*ci, Complex::new(e, 0.0), epsilon = 1e-9);
/// }
/// ```
///
pub fn correlate<F: Float>(
    reference: &[Complex<F>],
    degraded: &[Complex<F>],
    min_lag: usize,
    max_lag: usize,
) -> Result<Signal<F>> {
    let kernel = CorrelateKernel::try_new(CorrelateConfig { min_lag, max_lag })?;
    Ok(kernel.run_alloc(reference, degraded)?)
}

/// Constructor config for [`CorrelateKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrelateConfig {
    /// Inner edge of the lag window.
    pub min_lag: usize,
    /// Outer edge of the lag window.
    pub max_lag: usize,
}

/// Trait-first lag-windowed correlation kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelateKernel {
    min_lag: usize,
    max_lag: usize,
    len: usize,
}

impl CorrelateKernel {
    /// Inner edge of the lag window.
    pub fn min_lag(&self) -> usize {
        self.min_lag
    }

    /// Outer edge of the lag window.
    pub fn max_lag(&self) -> usize {
        self.max_lag
    }
}

impl KernelLifecycle for CorrelateKernel {
    type Config = CorrelateConfig;

    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        let CorrelateConfig { min_lag, max_lag } = config;
        if min_lag > max_lag {
            return Err(ConfigError::InvalidArgument {
                arg: "min_lag",
                reason: "min_lag must not exceed max_lag",
            });
        }
        let len = max_lag
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or(ConfigError::InvalidArgument {
                arg: "max_lag",
                reason: "2 * max_lag + 1 overflows usize",
            })?;
        Ok(Self {
            min_lag,
            max_lag,
            len,
        })
    }
}

impl<F: Float> Correlate1D<F> for CorrelateKernel {
    fn output_len(&self) -> usize {
        self.len
    }

    fn run_into<I1, I2, O>(
        &self,
        reference: &I1,
        degraded: &I2,
        out: &mut O,
    ) -> core::result::Result<(), ExecInvariantViolation>
    where
        I1: Read1D<Complex<F>> + ?Sized,
        I2: Read1D<Complex<F>> + ?Sized,
        O: Write1D<Complex<F>> + ?Sized,
    {
        let reference = reference
            .read_slice()
            .map_err(ExecInvariantViolation::from)?;
        let degraded = degraded.read_slice().map_err(ExecInvariantViolation::from)?;
        let out = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        check_len("out", self.len, out.len())?;
        correlate_into(reference, degraded, self.min_lag, self.max_lag, out);
        Ok(())
    }

    fn run_alloc<I1, I2>(
        &self,
        reference: &I1,
        degraded: &I2,
    ) -> core::result::Result<Signal<F>, ExecInvariantViolation>
    where
        I1: Read1D<Complex<F>> + ?Sized,
        I2: Read1D<Complex<F>> + ?Sized,
    {
        let mut out = Signal::zeros(self.len);
        self.run_into(reference, degraded, &mut out)?;
        Ok(out)
    }
}
