use crate::kernel::{ConfigError, ExecInvariantViolation};
use core::{error, fmt};

/// Errors raised whilst running sig-rs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation is declared but has no implementation.
    NotImplemented {
        /// Name of the operation that was called.
        operation: &'static str,
    },
    /// Argument parsed into function were invalid.
    InvalidArg {
        /// The invalid arg
        arg: String,
        /// Explaining why arg is invalid.
        reason: String,
    },
    /// Execution was attempted with a violated kernel invariant.
    ExecInvariantViolation {
        /// Why execution could not proceed.
        reason: String,
    },
}

/// Result alias defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn not_implemented(operation: &'static str) -> Self {
        tracing::debug!(operation, "called an operation without an implementation");
        Error::NotImplemented { operation }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotImplemented { operation } => {
                write!(f, "`{operation}` is not implemented yet")
            }
            Error::InvalidArg { arg, reason } => {
                write!(f, "Invalid argument `{arg}`: {reason}")
            }
            Error::ExecInvariantViolation { reason } => {
                write!(f, "Execution invariant violation: {reason}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        match value {
            ConfigError::InvalidArgument { arg, reason } => Error::InvalidArg {
                arg: arg.to_string(),
                reason: reason.to_string(),
            },
            other => Error::InvalidArg {
                arg: other.arg().to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl From<ExecInvariantViolation> for Error {
    fn from(value: ExecInvariantViolation) -> Self {
        match value {
            ExecInvariantViolation::Config(err) => err.into(),
            other => Error::ExecInvariantViolation {
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_names_the_operation() {
        let err = Error::not_implemented("fft_2d");
        assert_eq!(err, Error::NotImplemented { operation: "fft_2d" });
        assert_eq!(err.to_string(), "`fft_2d` is not implemented yet");
    }

    #[test]
    fn config_errors_become_invalid_args() {
        let err: Error = ConfigError::InvalidArgument {
            arg: "min_lag",
            reason: "min_lag must not exceed max_lag",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid argument `min_lag`: min_lag must not exceed max_lag"
        );

        let err: Error = ExecInvariantViolation::Config(ConfigError::NonContiguous { arg: "array" })
            .into();
        assert!(matches!(err, Error::InvalidArg { ref arg, .. } if arg == "array"));
    }

    #[test]
    fn length_mismatch_becomes_exec_violation() {
        let err: Error = ExecInvariantViolation::LengthMismatch {
            arg: "out",
            expected: 8,
            got: 5,
        }
        .into();
        assert_eq!(
            err,
            Error::ExecInvariantViolation {
                reason: "Execution length mismatch on `out`. Expected 8, got 5.".into()
            }
        );
    }
}
