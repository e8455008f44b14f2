//! Error types for sequence store operations.

use std::fmt;

use crate::limits::Position;

/// Result type for sequence store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Broad classification shared by every error in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required reference is missing or malformed. Caller bug.
    InvalidArgument,
    /// A value or position lies outside the logically valid domain.
    Domain,
    /// The request is well-formed but does not fit the available capacity.
    Range,
}

impl ErrorKind {
    /// Negative errno-style status code (`-EINVAL`, `-EDOM`, `-ERANGE`).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidArgument => -22,
            Self::Domain => -33,
            Self::Range => -34,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "invalid argument",
            Self::Domain => "domain error",
            Self::Range => "range error",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while building, mutating, or rendering a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing buffer has no slots at all.
    EmptyBuffer,

    /// The backing buffer cannot hold the requested capacity.
    BufferTooShort {
        /// Requested capacity, already checked against the supported range.
        capacity: Position,
        /// Slots actually available in the buffer.
        available: usize,
    },

    /// Capacity is zero or above the supported maximum.
    InvalidCapacity {
        /// Requested capacity. Wider than [`Position`] because
        /// [`SequenceStore::with_full_buffer`](crate::SequenceStore::with_full_buffer)
        /// reports buffer lengths that do not fit a position.
        capacity: usize,
        /// Largest supported capacity.
        max: Position,
    },

    /// Position lies outside the valid range for the operation.
    PositionOutOfBounds {
        /// The offending position.
        position: Position,
        /// Current number of elements.
        len: Position,
    },

    /// Attempted to delete from a store with no elements.
    EmptyStore,

    /// The store already holds `capacity` elements.
    CapacityExhausted {
        /// Fixed capacity of the store.
        capacity: Position,
    },

    /// Output buffer fails the up-front size check for rendering.
    OutputTooSmall {
        /// Minimum number of bytes the rendering needs.
        needed: usize,
        /// Bytes offered by the caller.
        available: usize,
    },

    /// Output buffer ran out while rendering an element.
    OutputOverflow {
        /// Index of the element that did not fit.
        position: Position,
        /// Bytes already written when the overflow was detected.
        written: usize,
        /// Total size of the output buffer.
        available: usize,
    },
}

impl StoreError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyBuffer | Self::BufferTooShort { .. } => ErrorKind::InvalidArgument,
            Self::InvalidCapacity { .. }
            | Self::PositionOutOfBounds { .. }
            | Self::EmptyStore
            | Self::OutputTooSmall { .. } => ErrorKind::Domain,
            Self::CapacityExhausted { .. } | Self::OutputOverflow { .. } => ErrorKind::Range,
        }
    }

    /// Shorthand for `self.kind().code()`.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.kind().code()
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBuffer => write!(f, "backing buffer is empty"),
            Self::BufferTooShort {
                capacity,
                available,
            } => {
                write!(
                    f,
                    "backing buffer holds {available} slots but capacity {capacity} was requested"
                )
            }
            Self::InvalidCapacity { capacity, max } => {
                write!(f, "capacity {capacity} outside supported range 1..={max}")
            }
            Self::PositionOutOfBounds { position, len } => {
                write!(f, "position {position} out of bounds for length {len}")
            }
            Self::EmptyStore => write!(f, "store is empty"),
            Self::CapacityExhausted { capacity } => {
                write!(f, "store is full at capacity {capacity}")
            }
            Self::OutputTooSmall { needed, available } => {
                write!(f, "output too small: need {needed}, have {available}")
            }
            Self::OutputOverflow {
                position,
                written,
                available,
            } => {
                write!(
                    f,
                    "output overflow at element {position}: {written} of {available} bytes used"
                )
            }
        }
    }
}

impl std::error::Error for StoreError {}
