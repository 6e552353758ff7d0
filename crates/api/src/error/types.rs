//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cryptographic operations
///
/// `AuthenticationFailed` deliberately carries no detail about where a tag
/// mismatch occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Authentication failed error
    AuthenticationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::AuthenticationFailed {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::AuthenticationFailed {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::RandomGenerationError {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::AuthenticationFailed { context, .. }
            | Self::RandomGenerationError { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::AuthenticationFailed { context, message } => {
                write!(f, "Authentication failed: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
