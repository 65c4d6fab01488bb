//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during BLS signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Secret key is zero or malformed
    InvalidKey(String),

    /// Invalid parameter
    InvalidParameter(String),

    /// Point or key bytes failed to decode
    Encoding(String),

    /// An aggregation or batch received no inputs
    EmptyInput(&'static str),

    /// Verification failed
    Verification {
        algorithm: &'static str,
        details: String,
    },

    /// Internal error
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Error::EmptyInput(what) => write!(f, "Empty input: no {} given", what),
            Error::Verification { algorithm, details } => {
                write!(f, "{} verification failed: {}", algorithm, details)
            }
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Convert from algorithms::error::Error
impl From<bls381_algorithms::Error> for Error {
    fn from(err: bls381_algorithms::Error) -> Self {
        use bls381_algorithms::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::InvalidParameter(format!("{}: {}", name, reason))
            }
            AlgoError::Length { .. } | AlgoError::Encoding { .. } => {
                Error::Encoding(err.to_string())
            }
            AlgoError::InvalidPoint { context } => {
                Error::Encoding(format!("point is not on the curve ({})", context))
            }
            AlgoError::Processing { .. } => Error::Internal(err.to_string()),
        }
    }
}

// Convert to api::Error
impl From<Error> for bls381_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKey(message) => bls381_api::Error::InvalidKey {
                context: "bls",
                message,
            },
            Error::InvalidParameter(message) => bls381_api::Error::InvalidParameter {
                context: "bls",
                message,
            },
            Error::Encoding(message) => bls381_api::Error::SerializationError {
                context: "bls",
                message,
            },
            Error::EmptyInput(what) => bls381_api::Error::InvalidParameter {
                context: what,
                message: "empty input".to_string(),
            },
            Error::Verification { algorithm, details } => bls381_api::Error::InvalidSignature {
                context: algorithm,
                message: details,
            },
            Error::Internal(message) => bls381_api::Error::Other {
                context: "bls",
                message,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_algorithm_error() {
        let err: Error = bls381_algorithms::Error::param("scalar", "must be positive").into();
        assert_eq!(
            err,
            Error::InvalidParameter("scalar: must be positive".to_string())
        );

        let err: Error = bls381_algorithms::Error::encoding("G1 point", "bad flag").into();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_into_api_error() {
        let api: bls381_api::Error = Error::Verification {
            algorithm: "BLS12-381",
            details: "pairing check failed".to_string(),
        }
        .into();
        assert!(matches!(api, bls381_api::Error::InvalidSignature { .. }));

        let api: bls381_api::Error = Error::EmptyInput("signatures").into();
        assert!(matches!(api, bls381_api::Error::InvalidParameter { .. }));
    }
}
