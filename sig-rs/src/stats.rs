//! Summary statistics over complex signals.
//!
//! Squares are plain complex squares, `x²` as given by [`Complex::squared`],
//! never `x · conj(x)`. For samples with a non-zero imaginary part the mean
//! square is therefore complex-valued and is not a power.
//!
//! Two RMS definitions follow from that square. `sqrt(mean(x²))` is complex;
//! `sqrt(mean(|x²|))` is real. [`rms`] uses the real one and returns it with a
//! zero imaginary part. The two agree on real-valued signals.
//!
//! Empty input is not rejected. Every reduction divides by the zero count and
//! returns NaN components.

use crate::kernel::{cast_len, ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D};
use core::borrow::Borrow;
use num_traits::{Float, Zero};
use sig_rs_core::Complex;

/// 1D mean reduction capability.
pub trait MeanReduce1D<F> {
    /// Compute the mean and sample count.
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized;
}

/// 1D mean-square reduction capability.
pub trait MeanSquareReduce1D<F> {
    /// Compute the mean square and sample count.
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized;
}

/// 1D root-mean-square reduction capability.
pub trait RmsReduce1D<F> {
    /// Compute the root mean square and sample count.
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized;
}

/// 1D standard-deviation reduction capability.
pub trait StdevReduce1D<F> {
    /// Compute the standard deviation and sample count.
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized;
}

/// Empty config for stateless kernels.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsConfig;

/// Trait-first mean kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanKernel;

impl KernelLifecycle for MeanKernel {
    type Config = StatsConfig;

    fn try_new(_: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl<F: Float> MeanReduce1D<F> for MeanKernel {
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        Ok(mean(input.iter()))
    }
}

/// Trait-first mean-square kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquareKernel;

impl KernelLifecycle for MeanSquareKernel {
    type Config = StatsConfig;

    fn try_new(_: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl<F: Float> MeanSquareReduce1D<F> for MeanSquareKernel {
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        Ok(mean_square(input.iter()))
    }
}

/// Trait-first root-mean-square kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct RmsKernel;

impl KernelLifecycle for RmsKernel {
    type Config = StatsConfig;

    fn try_new(_: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl<F: Float> RmsReduce1D<F> for RmsKernel {
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        Ok(rms(input.iter()))
    }
}

/// Trait-first standard deviation kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdevKernel;

impl KernelLifecycle for StdevKernel {
    type Config = StatsConfig;

    fn try_new(_: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self)
    }
}

impl<F: Float> StdevReduce1D<F> for StdevKernel {
    fn run<I>(&self, input: &I) -> Result<(Complex<F>, usize), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        Ok(stdev(input.iter()))
    }
}

///
/// Compute the mean of the signal, `y`
///
/// Return the mean and the number of points averaged
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use sig_rs::stats::mean;
/// use sig_rs::Complex;
///
/// let y: Vec<Complex> = (0..5).map(|i| Complex::new(i as f64, 2. * i as f64)).collect();
/// let (m, n) = mean(y.iter());
/// assert_eq!(n, 5);
/// assert_abs_diff_eq!(m, Complex::new(2., 4.), epsilon = 1e-12);
///
/// let empty: &[Complex] = &[];
/// assert!(mean(empty.iter()).0.is_nan());
/// ```
///
pub fn mean<YI, F>(y: YI) -> (Complex<F>, usize)
where
    F: Float,
    YI: Iterator,
    YI::Item: Borrow<Complex<F>>,
{
    let (sum, count) = y.fold((Complex::zero(), 0usize), |acc: (Complex<F>, usize), yi| {
        (acc.0 + *yi.borrow(), acc.1 + 1)
    });
    (sum / cast_len::<F>(count), count)
}

///
/// Compute the mean of the complex squares of the signal, `y`
///
/// Return the mean square and the number of points averaged
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use sig_rs::stats::mean_square;
/// use sig_rs::Complex;
///
/// // i² = -1, not |i|² = 1
/// let y = [Complex::new(0., 1.)];
/// assert_abs_diff_eq!(mean_square(y.iter()).0, Complex::new(-1., 0.), epsilon = 1e-12);
/// ```
///
pub fn mean_square<YI, F>(y: YI) -> (Complex<F>, usize)
where
    F: Float,
    YI: Iterator,
    YI::Item: Borrow<Complex<F>>,
{
    mean(y.map(|yi| yi.borrow().squared()))
}

///
/// Compute the root mean square of the signal, `y`, as `sqrt(mean(|y²|))`
///
/// Return the RMS, with a zero imaginary part, and the number of points
/// averaged
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use sig_rs::stats::rms;
/// use sig_rs::Complex;
///
/// let y: Vec<Complex> = (0..5).map(|i| Complex::new(i as f64, 2. * i as f64)).collect();
/// assert_abs_diff_eq!(rms(y.iter()).0, Complex::new(30f64.sqrt(), 0.), epsilon = 1e-12);
/// ```
///
pub fn rms<YI, F>(y: YI) -> (Complex<F>, usize)
where
    F: Float,
    YI: Iterator,
    YI::Item: Borrow<Complex<F>>,
{
    let (sum, count) = y.fold((F::zero(), 0usize), |acc: (F, usize), yi| {
        (acc.0 + yi.borrow().squared().abs(), acc.1 + 1)
    });
    (
        Complex::new((sum / cast_len(count)).sqrt(), F::zero()),
        count,
    )
}

///
/// Compute the standard deviation of the signal, `y`, as
/// `sqrt(mean(y²) - mean(y)²)` with complex squares and the principal root
///
/// Return the standard deviation and the number of points averaged
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use sig_rs::stats::stdev;
/// use sig_rs::Complex;
///
/// let y: Vec<Complex> = (1..=5).map(|i| Complex::new(i as f64, 0.)).collect();
/// assert_abs_diff_eq!(stdev(y.iter()).0, Complex::new(2f64.sqrt(), 0.), epsilon = 1e-12);
/// ```
///
pub fn stdev<YI, F>(y: YI) -> (Complex<F>, usize)
where
    F: Float,
    YI: Iterator + Clone,
    YI::Item: Borrow<Complex<F>>,
{
    let (avg, n) = mean(y.clone());
    let (square, _) = mean_square(y);
    ((square - avg.squared()).sqrt(), n)
}
