//! Error handling for the TurboSHAKE primitives

use core::fmt;

/// The error type for TurboSHAKE operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Forbidden state transition on a context
    State {
        /// Operation that was attempted
        operation: &'static str,
        /// Why the operation is not allowed in the current state
        details: &'static str,
    },

    /// Broken internal invariant; unreachable in correct code
    Internal {
        /// Location where the invariant was found violated
        location: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for TurboSHAKE operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::State { operation, details } => {
                write!(f, "Invalid state for {}: {}", operation, details)
            }
            Error::Internal { location } => {
                write!(f, "Internal invariant violated in {}", location)
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
