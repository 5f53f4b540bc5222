//! Trait interfaces for signal-processing capabilities.
//!
//! These traits define the trait-first API shape of the transform and
//! correlation kernels.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};
use sig_rs_core::{Complex, Signal};

/// 1D discrete Fourier transform capability.
pub trait Fft1D<F> {
    /// Output length produced for an input of `input_len` samples.
    fn output_len(&self, input_len: usize) -> usize;

    /// Run the transform into a caller-provided output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized,
        O: Write1D<Complex<F>> + ?Sized;

    /// Run the transform and allocate output.
    fn run_alloc<I>(&self, input: &I) -> Result<Signal<F>, ExecInvariantViolation>
    where
        I: Read1D<Complex<F>> + ?Sized;
}

/// 1D lagged cross-correlation capability.
pub trait Correlate1D<F> {
    /// Output length produced by this kernel.
    fn output_len(&self) -> usize;

    /// Run correlation into a caller-provided output buffer.
    fn run_into<I1, I2, O>(
        &self,
        reference: &I1,
        degraded: &I2,
        out: &mut O,
    ) -> Result<(), ExecInvariantViolation>
    where
        I1: Read1D<Complex<F>> + ?Sized,
        I2: Read1D<Complex<F>> + ?Sized,
        O: Write1D<Complex<F>> + ?Sized;

    /// Run correlation and allocate output.
    fn run_alloc<I1, I2>(
        &self,
        reference: &I1,
        degraded: &I2,
    ) -> Result<Signal<F>, ExecInvariantViolation>
    where
        I1: Read1D<Complex<F>> + ?Sized,
        I2: Read1D<Complex<F>> + ?Sized;
}
