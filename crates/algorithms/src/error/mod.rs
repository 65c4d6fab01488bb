//! Error handling for curve arithmetic and hashing

use std::borrow::Cow;
use std::fmt;

use bls381_api::Error as CoreError;

/// The error type for BLS12-381 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
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

    /// Coordinates that do not satisfy the curve equation
    InvalidPoint {
        /// Operation that received the point
        context: &'static str,
    },

    /// Malformed point or field element encoding
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        reason: &'static str,
    },

    /// Processing error during a cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding(context: &'static str, reason: &'static str) -> Self {
        Error::Encoding { context, reason }
    }
}

/// Result type for BLS12-381 primitive operations
pub type Result<T> = core::result::Result<T, Error>;

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
            Error::InvalidPoint { context } => {
                write!(f, "Point is not on the curve in {}", context)
            }
            Error::Encoding { context, reason } => {
                write!(f, "Invalid encoding of {}: {}", context, reason)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "bls12-381",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidPoint { context } => CoreError::InvalidParameter {
                context,
                message: "point is not on the curve".to_string(),
            },
            Error::Encoding { context, reason } => CoreError::SerializationError {
                context,
                message: reason.to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use bls381_api::error::ResultExt;

pub mod validate;

#[cfg(test)]
mod tests;
