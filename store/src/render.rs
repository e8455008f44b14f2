//! Bounded text rendering into caller-supplied byte buffers.

use std::fmt::{self, Write};

use crate::element::Element;
use crate::error::{StoreError, StoreResult};
use crate::limits::{min_render_bytes, Position, EMPTY_MESSAGE, EMPTY_MESSAGE_SIZE, SEPARATOR};

/// Bytes held back while rendering every element but the last: one for the
/// last element's first character and one for the terminator.
const TAIL_RESERVE: usize = 2;

/// A `fmt::Write` sink over a borrowed byte slice that refuses to write past
/// a movable limit instead of truncating.
#[derive(Debug)]
struct SliceCursor<'a> {
    buf: &'a mut [u8],
    written: usize,
    limit: usize,
}

impl<'a> SliceCursor<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        let limit = buf.len();
        Self {
            buf,
            written: 0,
            limit,
        }
    }

    /// Caps the writable region at `len - reserve` bytes.
    fn reserve_tail(&mut self, reserve: usize) {
        self.limit = self.buf.len().saturating_sub(reserve);
    }

    /// Writes the terminator after the text and returns the text length.
    fn terminate(self) -> Option<usize> {
        let slot = self.buf.get_mut(self.written)?;
        *slot = 0;
        Some(self.written)
    }
}

impl Write for SliceCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.written.checked_add(s.len()).ok_or(fmt::Error)?;
        if end > self.limit {
            return Err(fmt::Error);
        }
        let dst = self.buf.get_mut(self.written..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.written = end;
        Ok(())
    }
}

/// Renders `elements` as `"a, b, c"` (or [`EMPTY_MESSAGE`]) into `out`,
/// followed by a NUL terminator. Returns the text length.
///
/// The up-front size check only rejects buffers that cannot possibly fit;
/// the per-element checks are what guarantee nothing is truncated.
pub(crate) fn render_into<T: Element>(elements: &[T], out: &mut [u8]) -> StoreResult<usize> {
    let available = out.len();

    let Some((last, init)) = elements.split_last() else {
        if available < EMPTY_MESSAGE_SIZE {
            return Err(StoreError::OutputTooSmall {
                needed: EMPTY_MESSAGE_SIZE,
                available,
            });
        }
        let mut cursor = SliceCursor::new(out);
        cursor
            .write_str(EMPTY_MESSAGE)
            .map_err(|_| StoreError::OutputTooSmall {
                needed: EMPTY_MESSAGE_SIZE,
                available,
            })?;
        return cursor.terminate().ok_or(StoreError::OutputTooSmall {
            needed: EMPTY_MESSAGE_SIZE,
            available,
        });
    };

    // Store lengths never exceed SUPPORTED_MAXIMUM, so this saturates only for foreign slices.
    let last_position = Position::try_from(init.len()).unwrap_or(Position::MAX);
    let needed = min_render_bytes(last_position.saturating_add(1));
    if available < needed {
        return Err(StoreError::OutputTooSmall { needed, available });
    }

    let mut cursor = SliceCursor::new(out);
    cursor.reserve_tail(TAIL_RESERVE);
    for (position, value) in (0..).zip(init) {
        if write!(cursor, "{value}{SEPARATOR}").is_err() {
            return Err(StoreError::OutputOverflow {
                position,
                written: cursor.written,
                available,
            });
        }
    }

    cursor.reserve_tail(1);
    if write!(cursor, "{last}").is_err() {
        return Err(StoreError::OutputOverflow {
            position: last_position,
            written: cursor.written,
            available,
        });
    }
    let written = cursor.written;
    cursor.terminate().ok_or(StoreError::OutputOverflow {
        position: last_position,
        written,
        available,
    })
}

/// Writes the unbounded listing used by `Display`.
pub(crate) fn fmt_listing<T: Element>(elements: &[T], f: &mut impl Write) -> fmt::Result {
    let Some((first, rest)) = elements.split_first() else {
        return f.write_str(EMPTY_MESSAGE);
    };
    write!(f, "{first}")?;
    for value in rest {
        write!(f, "{SEPARATOR}{value}")?;
    }
    Ok(())
}
