//! Error types for delta list operations.

use std::fmt;

use store::{ErrorKind, Position, StoreError};

/// Result type for delta list operations.
pub type DeltaResult<T> = Result<T, DeltaError>;

/// Errors that can occur while maintaining a delta-encoded list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaError {
    /// Error reported by the underlying sequence store.
    Store(StoreError),

    /// Magnitudes must be at least 1 to be representable as positive gaps.
    NonPositiveMagnitude {
        /// The rejected magnitude.
        value: i64,
    },

    /// Elapsed time passed to `advance` was negative.
    NegativeElapsed {
        /// The rejected elapsed amount.
        elapsed: i64,
    },

    /// A gap computation left the element type's range.
    ArithmeticOverflow {
        /// Position of the entry being rewritten.
        position: Position,
    },

    /// The store handed to the list does not hold a valid delta encoding.
    MalformedEncoding {
        /// First position that violates the encoding.
        position: Position,
    },
}

impl DeltaError {
    /// Returns the broad classification of this error.
    ///
    /// Store errors keep their own classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(err) => err.kind(),
            Self::NonPositiveMagnitude { .. }
            | Self::NegativeElapsed { .. }
            | Self::ArithmeticOverflow { .. } => ErrorKind::Domain,
            Self::MalformedEncoding { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.kind().code()`.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.kind().code()
    }
}

impl From<StoreError> for DeltaError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl fmt::Display for DeltaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "store error: {e}"),
            Self::NonPositiveMagnitude { value } => {
                write!(f, "magnitude {value} is not positive")
            }
            Self::NegativeElapsed { elapsed } => {
                write!(f, "elapsed amount {elapsed} is negative")
            }
            Self::ArithmeticOverflow { position } => {
                write!(f, "gap arithmetic overflowed at position {position}")
            }
            Self::MalformedEncoding { position } => {
                write!(f, "store is not delta encoded at position {position}")
            }
        }
    }
}

impl std::error::Error for DeltaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}
