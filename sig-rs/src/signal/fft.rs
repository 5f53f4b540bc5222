//! Recursive radix-2 Fourier transform over zero-padded complex signals.
//!
//! The transform length is always a power of two chosen by [`padded_len`],
//! which *rounds* `log2(n)` instead of taking its ceiling. An input whose
//! length sits just above a power of two is therefore truncated rather than
//! padded: 90 samples transform as 64, 91 samples as 128.

use crate::kernel::{
    cast_len, check_len, ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D,
};
use crate::signal::traits::Fft1D;
use itertools::izip;
use num_traits::{Float, FloatConst, Zero};
use sig_rs_core::{Complex, Signal};

/// Sign of the twiddle angle, and whether the output is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Twiddle angle `-2π/N`, no scaling.
    #[default]
    Forward,
    /// Twiddle angle `+2π/N`, output divided by `N`.
    Inverse,
}

impl Direction {
    /// The unit twiddle factor for a length `n` stage.
    fn twiddle<F: Float + FloatConst>(self, n: usize) -> Complex<F> {
        let angle = F::TAU() / cast_len(n);
        match self {
            Direction::Forward => Complex::from_polar(F::one(), -angle),
            Direction::Inverse => Complex::from_polar(F::one(), angle),
        }
    }
}

///
/// Transform length for an input of `input_len` samples, `2^round(log2(n))`.
///
/// ```
/// use sig_rs::signal::fft::padded_len;
///
/// assert_eq!(padded_len(112), 128);
/// assert_eq!(padded_len(96), 128);
/// assert_eq!(padded_len(90), 64);
/// assert_eq!(padded_len(0), 0);
/// ```
///
pub fn padded_len(input_len: usize) -> usize {
    if input_len == 0 {
        return 0;
    }
    let exp = (input_len as f64).log2().round() as u32;
    1usize << exp
}

/// Copy `input` into a buffer of `len` samples, zero-filling the tail or
/// dropping the samples past `len`.
fn pad<F: Float>(input: &[Complex<F>], len: usize) -> Vec<Complex<F>> {
    if input.len() > len {
        tracing::warn!(
            input_len = input.len(),
            padded_len = len,
            dropped = input.len() - len,
            "power-of-two rounding truncates transform input"
        );
    } else if input.len() < len {
        tracing::debug!(
            input_len = input.len(),
            padded_len = len,
            "zero-padding transform input"
        );
    }
    input
        .iter()
        .copied()
        .chain(core::iter::repeat(Complex::zero()))
        .take(len)
        .collect()
}

/// Decimation-in-time step: transform `input[0], input[stride], ...` into
/// `out`, whose length must be a power of two.
///
/// The even half of `out` receives the even sub-transform and the odd half
/// the odd one, so the butterflies combine them in place without any
/// per-level temporaries.
fn radix2<F>(input: &[Complex<F>], stride: usize, out: &mut [Complex<F>], direction: Direction)
where
    F: Float + FloatConst,
{
    let n = out.len();
    if n == 1 {
        out[0] = input[0];
        return;
    }

    let (even, odd) = out.split_at_mut(n / 2);
    radix2(input, stride * 2, even, direction);
    radix2(&input[stride..], stride * 2, odd, direction);

    let twiddle = direction.twiddle::<F>(n);
    for (k, e, o) in izip!(0usize.., even.iter_mut(), odd.iter_mut()) {
        let t = twiddle.powf(cast_len(k)) * *o;
        let e0 = *e;
        *e = e0 + t;
        *o = e0 - t;
    }
}

/// Pad `input` and transform it into `out`, which must already hold
/// `padded_len(input.len())` samples.
fn transform_into<F>(input: &[Complex<F>], out: &mut [Complex<F>], direction: Direction)
where
    F: Float + FloatConst,
{
    if out.is_empty() {
        return;
    }
    let padded = pad(input, out.len());
    radix2(&padded, 1, out, direction);

    if direction == Direction::Inverse {
        let n: F = cast_len(out.len());
        out.iter_mut().for_each(|z| *z /= n);
    }
}

///
/// Forward transform of `signal`, zero-padded to [`padded_len`] samples.
///
/// No window is applied and the spectrum is not scaled.
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use sig_rs::signal::fft::fft;
/// use sig_rs::{Complex, Signal};
///
/// let x = Signal::from_real([1.0, 1.0, 1.0, 1.0]);
/// let spectrum = fft(&x);
/// assert_abs_diff_eq!(spectrum[0], Complex::new(4.0, 0.0), epsilon = 1e-12);
/// for bin in &spectrum[1..] {
///     assert_abs_diff_eq!(*bin, Complex::new(0.0, 0.0), epsilon = 1e-12);
/// }
/// ```
///
pub fn fft<F>(signal: &[Complex<F>]) -> Signal<F>
where
    F: Float + FloatConst,
{
    let mut out = Signal::zeros(padded_len(signal.len()));
    transform_into(signal, &mut out, Direction::Forward);
    out
}

///
/// Inverse transform of `spectrum`, zero-padded to [`padded_len`] samples and
/// divided by that padded length.
///
/// ```
/// use approx::assert_abs_diff_eq;
/// use sig_rs::signal::fft::{fft, ifft};
/// use sig_rs::{Complex, Signal};
///
/// let x = Signal::from_real([1.0, -2.0, 3.0, 0.5]);
/// let y = ifft(&fft(&x));
/// for (a, b) in x.iter().zip(y.iter()) {
///     assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
/// }
/// ```
///
pub fn ifft<F>(spectrum: &[Complex<F>]) -> Signal<F>
where
    F: Float + FloatConst,
{
    let mut out = Signal::zeros(padded_len(spectrum.len()));
    transform_into(spectrum, &mut out, Direction::Inverse);
    out
}

/// Constructor config for [`FftKernel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FftConfig {
    /// Forward or inverse transform.
    pub direction: Direction,
}

/// Trait-first FFT kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FftKernel {
    direction: Direction,
}

impl FftKernel {
    /// Direction this kernel was built for.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl KernelLifecycle for FftKernel {
    type Config = FftConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        Ok(Self {
            direction: config.direction,
        })
    }
}

impl<F> Fft1D<F> for FftKernel
where
    F: Float + FloatConst,
{
    fn output_len(&self, input_len: usize) -> usize {
        padded_len(input_len)
    }

    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized,
        O: Write1D<Complex<F>> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        check_len("out", padded_len(input.len()), out.len())?;
        transform_into(input, out, self.direction);
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Signal<F>, ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let mut out = Signal::zeros(padded_len(input.len()));
        transform_into(input, &mut out, self.direction);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;
    use ndarray::Array1;
    use rand::Rng;
    use rustfft::FftPlanner;

    const PRECISION: f64 = 1e-4;

    /// O(N²) reference transform.
    fn naive_dft(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let n = x.len();
        (0..n)
            .map(|k| {
                x.iter().enumerate().fold(Complex::zero(), |acc, (j, xj)| {
                    let angle = -2.0 * PI * (k * j % n) as f64 / n as f64;
                    let (s, c) = angle.sin_cos();
                    acc + Complex::new(
                        xj.re() * c - xj.im() * s,
                        xj.re() * s + xj.im() * c,
                    )
                })
            })
            .collect()
    }

    fn random_signal(len: usize) -> Signal<f64> {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| Complex::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
            .collect()
    }

    fn alternating(len: usize) -> Signal<f64> {
        Signal::from_real((0..len).map(|i| ((i + 1) % 2) as f64))
    }

    #[test]
    fn padded_len_rounds_log2() {
        let cases = [
            (1, 1),
            (2, 2),
            (3, 4),
            (5, 4),
            (6, 8),
            (64, 64),
            (90, 64),
            (91, 128),
            (96, 128),
            (112, 128),
            (128, 128),
            (181, 128),
            (182, 256),
        ];
        for (input_len, expected) in cases {
            assert_eq!(padded_len(input_len), expected, "input_len = {input_len}");
        }
    }

    #[test]
    fn alternating_signal_matches_direct_dft() {
        let x = alternating(112);
        let spectrum = fft(&x);
        assert_eq!(spectrum.len(), 128);

        let mut padded = x.to_vec();
        padded.resize(128, Complex::zero());
        let expected = naive_dft(&padded);
        spectrum
            .iter()
            .zip(expected.iter())
            .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = PRECISION));

        // 56 ones on even indices: DC and Nyquist both sum to 56.
        assert_abs_diff_eq!(spectrum[0], Complex::new(56.0, 0.0), epsilon = PRECISION);
        assert_abs_diff_eq!(spectrum[64], Complex::new(56.0, 0.0), epsilon = PRECISION);
    }

    #[test]
    fn alternating_signal_reference_bins() {
        let spectrum = fft(&alternating(112));
        let expected = [
            (1, Complex::new(-7.0503, -3.3345)),
            (2, Complex::new(-4.5766, -5.5766)),
            (32, Complex::new(0.0, 0.0)),
            (63, Complex::new(-7.0503, 3.3345)),
            (65, Complex::new(-7.0503, -3.3345)),
        ];
        for (bin, value) in expected {
            assert_abs_diff_eq!(spectrum[bin], value, epsilon = PRECISION);
        }
    }

    #[test]
    fn alternating_signal_round_trips_with_zero_tail() {
        let x = alternating(112);
        let y = ifft(&fft(&x));
        assert_eq!(y.len(), 128);
        x.iter()
            .zip(y.iter())
            .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = PRECISION));
        y[112..]
            .iter()
            .for_each(|z| assert_abs_diff_eq!(*z, Complex::zero(), epsilon = PRECISION));
    }

    #[test]
    fn power_of_two_lengths_round_trip() {
        for exp in 0..=10 {
            let x = random_signal(1 << exp);
            let y = ifft(&fft(&x));
            assert_eq!(x.len(), y.len());
            x.iter()
                .zip(y.iter())
                .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = 1e-9));
        }
    }

    #[test]
    fn forward_and_inverse_match_rustfft() {
        let x = random_signal(256);
        let mut planner = FftPlanner::<f64>::new();

        let mut forward: Vec<nalgebra::Complex<f64>> = x.iter().map(|z| (*z).into()).collect();
        planner.plan_fft_forward(256).process(&mut forward);
        fft(&x)
            .iter()
            .zip(forward.iter())
            .for_each(|(a, b)| assert_abs_diff_eq!(*a, Complex::from(*b), epsilon = 1e-9));

        let mut inverse: Vec<nalgebra::Complex<f64>> = x.iter().map(|z| (*z).into()).collect();
        planner.plan_fft_inverse(256).process(&mut inverse);
        ifft(&x).iter().zip(inverse.iter()).for_each(|(a, b)| {
            assert_abs_diff_eq!(*a, Complex::from(*b) / 256.0, epsilon = 1e-9)
        });
    }

    #[test]
    fn rounding_down_truncates_input() {
        let x = random_signal(90);
        let spectrum = fft(&x);
        assert_eq!(spectrum.len(), 64);

        let truncated = fft(&x[..64]);
        assert_eq!(spectrum, truncated);

        let y = ifft(&spectrum);
        x[..64]
            .iter()
            .zip(y.iter())
            .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = 1e-9));
    }

    #[test]
    fn inverse_scales_by_padded_length() {
        // Three samples pad to four, so the inverse divides by four.
        let flat = Signal::from_real([1.0, 1.0, 1.0]);
        let y = ifft(&flat);
        assert_eq!(y.len(), 4);
        assert_abs_diff_eq!(y[0], Complex::new(0.75, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(y[2], Complex::new(0.25, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn degenerate_lengths() {
        assert!(fft::<f64>(&[]).is_empty());
        assert!(ifft::<f64>(&[]).is_empty());

        let one = [Complex::new(2.5, -1.0)];
        assert_eq!(fft(&one).as_slice(), &one);
        assert_eq!(ifft(&one).as_slice(), &one);
    }

    #[test]
    fn fft_kernel_contracts_validate_output_shape() {
        let kernel = FftKernel::try_new(FftConfig::default()).expect("valid config");
        assert_eq!(kernel.direction(), Direction::Forward);
        assert_eq!(Fft1D::<f64>::output_len(&kernel, 112), 128);

        let x = alternating(112);
        let mut out = vec![Complex::zero(); 112];
        let err = kernel
            .run_into(&x, &mut out)
            .expect_err("mismatched output length should error");
        assert_eq!(
            err,
            ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: 128,
                got: 112
            }
        );

        let mut out = Array1::from(vec![Complex::zero(); 128]);
        kernel.run_into(&x, &mut out).expect("run_into");
        assert_eq!(out.as_slice().expect("contiguous"), fft(&x).as_slice());
    }

    #[test]
    fn inverse_kernel_matches_free_function() {
        let kernel = FftKernel::try_new(FftConfig {
            direction: Direction::Inverse,
        })
        .expect("valid config");
        let x = random_signal(32);
        assert_eq!(kernel.run_alloc(&x).expect("run_alloc"), ifft(&x));
    }

    #[test]
    fn single_precision_round_trip() {
        let x: Signal<f32> = Signal::from_real((0..16).map(|i| (i as f32 * 0.3).sin()));
        let y = ifft(&fft(&x));
        x.iter()
            .zip(y.iter())
            .for_each(|(a, b)| assert_abs_diff_eq!(*a, *b, epsilon = 1e-4));
    }
}
