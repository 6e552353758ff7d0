//! Error handling for cryptographic primitives

use core::fmt;

use djbaead_api::Error as CoreError;

/// The error type for cryptographic primitives
///
/// Every variant is terminal for the call that produced it; nothing in this
/// crate retries internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error (API misuse)
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Key of the wrong size handed to a constructor
    Key {
        /// Algorithm that rejected the key
        algorithm: &'static str,
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected (minimum or maximum) length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Authentication failure (AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// The entropy source could not produce a nonce
    RandomGeneration {
        /// Operation that needed randomness
        operation: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Key {
                algorithm,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid key for {}: expected {} bytes, got {}",
                    algorithm, expected, actual
                )
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
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::RandomGeneration { operation } => {
                write!(f, "Random generation failed during {}", operation)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidParameter {
                    context: name,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            }
            Error::Key {
                algorithm,
                expected,
                actual,
            } => {
                #[cfg(not(feature = "std"))]
                let _ = (expected, actual);
                CoreError::InvalidKey {
                    context: algorithm,
                    #[cfg(feature = "std")]
                    message: format!("key must be {} bytes, got {}", expected, actual),
                }
            }
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
                #[cfg(feature = "std")]
                message: "authentication failed".to_string(),
            },
            Error::RandomGeneration { operation } => CoreError::RandomGenerationError {
                context: operation,
                #[cfg(feature = "std")]
                message: "entropy source failed".to_string(),
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use djbaead_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
