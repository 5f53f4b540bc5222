//! Lag-windowed correlation, radix-2 Fourier transforms and descriptive
//! statistics over complex signals.
//!
//! The free functions in [`signal`] and [`stats`] are the quickest way in.
//! Each one is also available as a validated kernel (see [`kernel`]), and
//! [`engine::DspEngine`] bundles the whole set behind the
//! [`engine::SignalProcessor`] trait.
//!
//! ```
//! use approx::assert_abs_diff_eq;
//! use sig_rs::signal::{correlate, fft, ifft};
//! use sig_rs::stats::mean;
//! use sig_rs::{Complex, Signal};
//!
//! let x = Signal::from_real([1.0, 2.0, 3.0, 4.0]);
//!
//! let spectrum = fft(&x);
//! assert_abs_diff_eq!(spectrum[0], Complex::new(10.0, 0.0), epsilon = 1e-12);
//! let back = ifft(&spectrum);
//! for (a, b) in x.iter().zip(back.iter()) {
//!     assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
//! }
//!
//! let c = correlate(&x, &x, 0, 1).unwrap();
//! assert_abs_diff_eq!(c[1], Complex::new(30.0, 0.0), epsilon = 1e-12);
//!
//! let (avg, n) = mean(x.iter());
//! assert_eq!(n, 4);
//! assert_abs_diff_eq!(avg, Complex::new(2.5, 0.0), epsilon = 1e-12);
//! ```

pub mod engine;
pub mod kernel;
pub mod signal;
pub mod stats;

mod error;

pub use error::{Error, Result};
pub use sig_rs_core::{Complex, Form, Matrix, Signal};
