use crate::Complex;
use core::ops::{Deref, DerefMut};
use num_traits::{Float, Zero};

/// An owned, fixed-length sequence of complex samples.
///
/// Samples may be overwritten in place but the length never changes after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<F = f64> {
    samples: Box<[Complex<F>]>,
}

impl<F: Float> Signal<F> {
    /// A signal of `len` zero samples.
    pub fn zeros(len: usize) -> Self {
        Self {
            samples: vec![Complex::zero(); len].into_boxed_slice(),
        }
    }

    /// A signal whose imaginary parts are all zero.
    ///
    /// ```
    /// use sig_rs_core::{Complex, Signal};
    ///
    /// let s = Signal::from_real([1.0, 0.0, 1.0]);
    /// assert_eq!(s.len(), 3);
    /// assert_eq!(s[2], Complex::new(1.0, 0.0));
    /// ```
    pub fn from_real<I>(values: I) -> Self
    where
        I: IntoIterator<Item = F>,
    {
        values
            .into_iter()
            .map(|re| Complex::new(re, F::zero()))
            .collect()
    }
}

impl<F> Signal<F> {
    /// Take ownership of `samples`.
    pub fn from_vec(samples: Vec<Complex<F>>) -> Self {
        Self {
            samples: samples.into_boxed_slice(),
        }
    }

    /// Borrow the samples.
    pub fn as_slice(&self) -> &[Complex<F>] {
        &self.samples
    }

    /// Borrow the samples mutably.
    pub fn as_mut_slice(&mut self) -> &mut [Complex<F>] {
        &mut self.samples
    }

    /// Release the samples.
    pub fn into_vec(self) -> Vec<Complex<F>> {
        self.samples.into_vec()
    }
}

impl<F> Deref for Signal<F> {
    type Target = [Complex<F>];

    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}

impl<F> DerefMut for Signal<F> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.samples
    }
}

impl<F> AsRef<[Complex<F>]> for Signal<F> {
    fn as_ref(&self) -> &[Complex<F>] {
        &self.samples
    }
}

impl<F> From<Vec<Complex<F>>> for Signal<F> {
    fn from(samples: Vec<Complex<F>>) -> Self {
        Self::from_vec(samples)
    }
}

impl<F: Copy> From<&[Complex<F>]> for Signal<F> {
    fn from(samples: &[Complex<F>]) -> Self {
        Self {
            samples: samples.into(),
        }
    }
}

impl<F, const N: usize> From<[Complex<F>; N]> for Signal<F> {
    fn from(samples: [Complex<F>; N]) -> Self {
        Self::from_vec(Vec::from(samples))
    }
}

impl<F> FromIterator<Complex<F>> for Signal<F> {
    fn from_iter<I: IntoIterator<Item = Complex<F>>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<F> IntoIterator for Signal<F> {
    type Item = Complex<F>;
    type IntoIter = std::vec::IntoIter<Complex<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Signal<F> {
    type Item = &'a Complex<F>;
    type IntoIter = core::slice::Iter<'a, Complex<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
