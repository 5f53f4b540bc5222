//! Shared trait-first kernel substrate.
//!
//! Every engine operation is also exposed as a kernel struct that is
//! validated once at construction ([`KernelLifecycle`]) and then reads its
//! inputs through [`Read1D`] and writes caller-provided outputs through
//! [`Write1D`].

mod errors;
mod io;
mod lifecycle;

pub(crate) use errors::check_len;
pub use errors::{ConfigError, ExecInvariantViolation};
pub use io::*;
pub use lifecycle::*;

/// Convert a sample count into the kernel's float type.
pub(crate) fn cast_len<F: num_traits::Float>(n: usize) -> F {
    F::from(n).unwrap_or_else(F::infinity)
}
