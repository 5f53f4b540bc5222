//! Value types shared by the `sig-rs` kernels.
//!
//! [`Complex`] is the sample type, [`Signal`] the fixed-length 1D buffer and
//! [`Matrix`] the 2D buffer.

mod complex;
mod matrix;
mod signal;

pub use complex::{Complex, Form};
pub use matrix::Matrix;
pub use signal::Signal;
