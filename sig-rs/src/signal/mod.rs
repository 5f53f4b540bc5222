//! Signal processing kernels over complex signals.

pub mod correlate;
pub mod fft;
pub mod kalman;
pub mod planar;
pub mod traits;

pub use correlate::correlate;
pub use fft::{fft, ifft, padded_len};
pub use kalman::kalman;
pub use planar::{correlate_2d, fft_2d, ifft_2d};
