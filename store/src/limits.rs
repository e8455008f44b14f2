//! Capacity limits shared by every store.

/// Index and length type for store positions.
///
/// Unsigned so that a negative position cannot be expressed at all.
pub type Position = u16;

/// Largest capacity any store may be initialized with.
///
/// Must fit inside [`Position`].
pub const SUPPORTED_MAXIMUM: Position = 1024;

/// Text rendered for a store with no elements.
pub const EMPTY_MESSAGE: &str = "empty";

/// Bytes needed to render [`EMPTY_MESSAGE`] including the terminator.
pub const EMPTY_MESSAGE_SIZE: usize = EMPTY_MESSAGE.len() + 1;

/// Separator written between consecutive elements.
pub const SEPARATOR: &str = ", ";

/// Coarse lower bound on the output bytes needed to render `len` elements.
///
/// Assumes every element prints as a single digit: `3 * len - 2` for a
/// non-empty store, [`EMPTY_MESSAGE_SIZE`] otherwise. Values with more
/// digits, or a sign, need more; this is only a fast reject.
#[must_use]
pub const fn min_render_bytes(len: Position) -> usize {
    if len == 0 {
        EMPTY_MESSAGE_SIZE
    } else {
        3 * (len as usize) - 2
    }
}
