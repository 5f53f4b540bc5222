use super::ConfigError;
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use sig_rs_core::{Complex, Signal};

/// Adapter trait for reading contiguous 1D input.
pub trait Read1D<T> {
    /// Borrow the underlying input as a contiguous slice.
    fn read_slice(&self) -> Result<&[T], ConfigError>;
}

/// Adapter trait for writing contiguous 1D output.
pub trait Write1D<T> {
    /// Borrow the underlying output as a mutable contiguous slice.
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError>;
}

impl<T> Read1D<T> for [T] {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T> Write1D<T> for [T] {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> Read1D<T> for [T; N] {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> Write1D<T> for [T; N] {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

impl<T> Read1D<T> for Vec<T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self.as_slice())
    }
}

impl<T> Write1D<T> for Vec<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self.as_mut_slice())
    }
}

impl<F> Read1D<Complex<F>> for Signal<F> {
    fn read_slice(&self) -> Result<&[Complex<F>], ConfigError> {
        Ok(self.as_slice())
    }
}

impl<F> Write1D<Complex<F>> for Signal<F> {
    fn write_slice_mut(&mut self) -> Result<&mut [Complex<F>], ConfigError> {
        Ok(self.as_mut_slice())
    }
}

impl<T> Read1D<T> for Array1<T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

impl<T> Write1D<T> for Array1<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

impl<'a, T> Read1D<T> for ArrayView1<'a, T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array_view" })
    }
}

impl<'a, T> Write1D<T> for ArrayViewMut1<'a, T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut().ok_or(ConfigError::NonContiguous {
            arg: "array_view_mut",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Read1D, Write1D};
    use crate::kernel::ConfigError;
    use ndarray::{s, Array1};
    use sig_rs_core::{Complex, Signal};

    #[test]
    fn signal_adapters() {
        let mut signal = Signal::from_real([1.0, 2.0, 3.0]);
        assert_eq!(signal.read_slice().expect("signal read").len(), 3);

        signal.write_slice_mut().expect("signal write")[0] = Complex::new(0.0, 1.0);
        assert_eq!(signal[0], Complex::new(0.0, 1.0));
    }

    #[test]
    fn vec_write_adapter() {
        let mut out = vec![Complex::new(0.0f32, 0.0); 2];
        out.write_slice_mut()
            .expect("vec write adapter")
            .copy_from_slice(&[Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)]);
        assert_eq!(out[1], Complex::new(3.0, 4.0));
    }

    #[test]
    fn strided_views_are_rejected() {
        let arr = Array1::from(vec![1.0f64, 2.0, 3.0, 4.0]);
        assert_eq!(arr.read_slice().expect("array1 read")[2], 3.0);

        let strided = arr.slice(s![..;2]);
        assert_eq!(
            strided.read_slice(),
            Err(ConfigError::NonContiguous { arg: "array_view" })
        );
    }
}
