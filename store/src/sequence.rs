//! The fixed-capacity sequence store.

use std::fmt;

use crate::element::Element;
use crate::error::{StoreError, StoreResult};
use crate::limits::{Position, SUPPORTED_MAXIMUM};
use crate::render::{fmt_listing, render_into};

/// An ordered, fixed-capacity sequence stored in a caller-owned buffer.
///
/// The store borrows its backing slots for `'a` and never allocates, grows,
/// or frees them. Slots at or beyond [`len`](Self::len) are never read, so
/// the buffer does not need to be cleared before use.
///
/// Insert and delete are O(n): every element after the touched position is
/// shifted by one slot.
#[derive(Debug)]
pub struct SequenceStore<'a, T: Element = i16> {
    /// Borrowed backing storage. Only `slots[..len]` is meaningful.
    slots: &'a mut [T],
    /// Number of valid elements.
    len: Position,
    /// Fixed capacity, `1..=SUPPORTED_MAXIMUM` and `<= slots.len()`.
    capacity: Position,
}

impl<'a, T: Element> SequenceStore<'a, T> {
    /// Binds `buffer` as backing storage for a store of `capacity` elements.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyBuffer`] if `buffer` has no slots.
    /// - [`StoreError::InvalidCapacity`] if `capacity` is zero or above
    ///   [`SUPPORTED_MAXIMUM`].
    /// - [`StoreError::BufferTooShort`] if `buffer` cannot hold `capacity`
    ///   elements.
    pub fn new(buffer: &'a mut [T], capacity: Position) -> StoreResult<Self> {
        if buffer.is_empty() {
            return Err(StoreError::EmptyBuffer);
        }
        if capacity == 0 || capacity > SUPPORTED_MAXIMUM {
            return Err(StoreError::InvalidCapacity {
                capacity: usize::from(capacity),
                max: SUPPORTED_MAXIMUM,
            });
        }
        if buffer.len() < usize::from(capacity) {
            return Err(StoreError::BufferTooShort {
                capacity,
                available: buffer.len(),
            });
        }
        Ok(Self {
            slots: buffer,
            len: 0,
            capacity,
        })
    }

    /// Binds `buffer` using its whole length as the capacity.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new); buffers longer than [`SUPPORTED_MAXIMUM`]
    /// are rejected with [`StoreError::InvalidCapacity`].
    pub fn with_full_buffer(buffer: &'a mut [T]) -> StoreResult<Self> {
        if buffer.is_empty() {
            return Err(StoreError::EmptyBuffer);
        }
        let capacity = Position::try_from(buffer.len())
            .ok()
            .filter(|capacity| *capacity <= SUPPORTED_MAXIMUM)
            .ok_or(StoreError::InvalidCapacity {
                capacity: buffer.len(),
                max: SUPPORTED_MAXIMUM,
            })?;
        Self::new(buffer, capacity)
    }

    /// Number of valid elements.
    #[must_use]
    pub const fn len(&self) -> Position {
        self.len
    }

    /// Returns `true` if the store holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further element can be inserted.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Fixed capacity set at initialization.
    #[must_use]
    pub const fn capacity(&self) -> Position {
        self.capacity
    }

    /// Number of free slots left.
    #[must_use]
    pub const fn remaining(&self) -> Position {
        self.capacity - self.len
    }

    /// The valid elements, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..usize::from(self.len)]
    }

    /// Returns the element at `position`, if it is valid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<T> {
        self.as_slice().get(usize::from(position)).copied()
    }

    /// Iterates over the valid elements in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, T>> {
        self.as_slice().iter().copied()
    }

    /// Inserts `value` before the element currently at `position`.
    ///
    /// `position == len()` appends.
    ///
    /// # Errors
    ///
    /// - [`StoreError::PositionOutOfBounds`] if `position > len()`.
    /// - [`StoreError::CapacityExhausted`] if the store is full.
    pub fn insert(&mut self, position: Position, value: T) -> StoreResult<()> {
        if position > self.len {
            return Err(StoreError::PositionOutOfBounds {
                position,
                len: self.len,
            });
        }
        if self.is_full() {
            return Err(StoreError::CapacityExhausted {
                capacity: self.capacity,
            });
        }

        let at = usize::from(position);
        let end = usize::from(self.len);
        // Shift [at, end) one slot right, last to first.
        self.slots.copy_within(at..end, at + 1);
        self.slots[at] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends `value` after the last element.
    ///
    /// # Errors
    ///
    /// [`StoreError::CapacityExhausted`] if the store is full.
    pub fn push(&mut self, value: T) -> StoreResult<()> {
        self.insert(self.len, value)
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyStore`] if there is nothing to delete.
    /// - [`StoreError::PositionOutOfBounds`] if `position >= len()`.
    pub fn delete(&mut self, position: Position) -> StoreResult<T> {
        if self.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        if position >= self.len {
            return Err(StoreError::PositionOutOfBounds {
                position,
                len: self.len,
            });
        }

        let at = usize::from(position);
        let end = usize::from(self.len);
        let removed = self.slots[at];
        // Shift (at, end) one slot left, first to last.
        self.slots.copy_within(at + 1..end, at);
        self.len -= 1;
        Ok(removed)
    }

    /// Drops every element. Capacity and buffer binding are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Renders the store as NUL-terminated text into `out`.
    ///
    /// Elements are written in order separated by `", "`, or `"empty"` for
    /// an empty store. Returns the number of text bytes, excluding the
    /// terminator.
    ///
    /// # Errors
    ///
    /// - [`StoreError::OutputTooSmall`] if `out` cannot hold `"empty"` plus
    ///   terminator (empty store), or is shorter than `3 * len() - 2`.
    /// - [`StoreError::OutputOverflow`] if an element would not fit while
    ///   formatting. The contents of `out` are unspecified after any error.
    pub fn render(&self, out: &mut [u8]) -> StoreResult<usize> {
        render_into(self.as_slice(), out)
    }
}

impl<T: Element> fmt::Display for SequenceStore<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_listing(self.as_slice(), f)
    }
}

impl<'s, T: Element> IntoIterator for &'s SequenceStore<'_, T> {
    type Item = T;
    type IntoIter = std::iter::Copied<std::slice::Iter<'s, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_rejects_empty_buffer() {
        let mut buf: [i16; 0] = [];
        let err = SequenceStore::new(&mut buf, 4).unwrap_err();
        assert_eq!(err, StoreError::EmptyBuffer);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn new_rejects_zero_capacity() {
        let mut buf = [0i16; 4];
        let err = SequenceStore::new(&mut buf, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn new_rejects_capacity_above_maximum() {
        let mut buf = vec![0i16; 2048];
        let err = SequenceStore::new(&mut buf, SUPPORTED_MAXIMUM + 1).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidCapacity {
                capacity: 1025,
                max: SUPPORTED_MAXIMUM
            }
        );
    }

    #[test]
    fn new_rejects_short_buffer() {
        let mut buf = [0i16; 2];
        let err = SequenceStore::new(&mut buf, 3).unwrap_err();
        assert_eq!(
            err,
            StoreError::BufferTooShort {
                capacity: 3,
                available: 2
            }
        );
    }

    #[test]
    fn new_does_not_clear_buffer() {
        let mut buf = [7i16; 3];
        {
            let store = SequenceStore::new(&mut buf, 3).unwrap();
            assert!(store.is_empty());
            assert_eq!(store.capacity(), 3);
            assert!(store.as_slice().is_empty());
        }
        assert_eq!(buf, [7, 7, 7]);
    }

    #[test]
    fn with_full_buffer_uses_slice_length() {
        let mut buf = [0i32; 8];
        let store = SequenceStore::with_full_buffer(&mut buf).unwrap();
        assert_eq!(store.capacity(), 8);

        let mut big = vec![0i32; usize::from(SUPPORTED_MAXIMUM) + 1];
        assert!(matches!(
            SequenceStore::with_full_buffer(&mut big),
            Err(StoreError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn with_full_buffer_reports_lengths_beyond_position() {
        let mut huge = vec![0i8; usize::from(Position::MAX) + 10];
        assert_eq!(
            SequenceStore::with_full_buffer(&mut huge).unwrap_err(),
            StoreError::InvalidCapacity {
                capacity: 65_545,
                max: SUPPORTED_MAXIMUM
            }
        );
    }

    #[test]
    fn insert_front_middle_end() {
        let mut buf = [0i16; 8];
        let mut store = SequenceStore::new(&mut buf, 8).unwrap();
        store.insert(0, 12).unwrap();
        store.insert(0, 10).unwrap();
        store.insert(1, 11).unwrap();
        store.insert(3, 13).unwrap();
        assert_eq!(store.as_slice(), &[10, 11, 12, 13]);
        assert_eq!(store.len(), 4);
        assert_eq!(store.remaining(), 4);
    }

    #[test]
    fn insert_past_end_is_domain_error() {
        let mut buf = [0i16; 4];
        let mut store = SequenceStore::new(&mut buf, 4).unwrap();
        let err = store.insert(3, 10).unwrap_err();
        assert_eq!(err, StoreError::PositionOutOfBounds { position: 3, len: 0 });
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn insert_into_full_store_is_range_error() {
        let mut buf = [0i16; 2];
        let mut store = SequenceStore::new(&mut buf, 2).unwrap();
        store.push(1).unwrap();
        store.push(2).unwrap();
        assert!(store.is_full());
        let err = store.insert(0, 3).unwrap_err();
        assert_eq!(err, StoreError::CapacityExhausted { capacity: 2 });
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(store.as_slice(), &[1, 2]);
    }

    #[test]
    fn delete_shifts_left_and_returns_value() {
        let mut buf = [0i16; 4];
        let mut store = SequenceStore::new(&mut buf, 4).unwrap();
        for v in [10, 11, 12, 13] {
            store.push(v).unwrap();
        }
        assert_eq!(store.delete(3).unwrap(), 13);
        assert_eq!(store.delete(0).unwrap(), 10);
        assert_eq!(store.as_slice(), &[11, 12]);
    }

    #[test]
    fn delete_from_empty_store() {
        let mut buf = [0i16; 4];
        let mut store = SequenceStore::new(&mut buf, 4).unwrap();
        assert_eq!(store.delete(0).unwrap_err(), StoreError::EmptyStore);
        assert_eq!(store.delete(3).unwrap_err(), StoreError::EmptyStore);
    }

    #[test]
    fn delete_out_of_range() {
        let mut buf = [0i16; 4];
        let mut store = SequenceStore::new(&mut buf, 4).unwrap();
        store.push(1).unwrap();
        let err = store.delete(20).unwrap_err();
        assert_eq!(err, StoreError::PositionOutOfBounds { position: 20, len: 1 });
    }

    #[test]
    fn get_and_iter() {
        let mut buf = [0i16; 4];
        let mut store = SequenceStore::new(&mut buf, 4).unwrap();
        store.push(4).unwrap();
        store.push(-2).unwrap();
        assert_eq!(store.get(1), Some(-2));
        assert_eq!(store.get(2), None);
        assert_eq!(store.iter().collect::<Vec<_>>(), vec![4, -2]);
        assert_eq!((&store).into_iter().sum::<i16>(), 2);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = [0i16; 2];
        let mut store = SequenceStore::new(&mut buf, 2).unwrap();
        store.push(1).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 2);
    }

    #[test]
    fn display_matches_render() {
        let mut buf = [0i16; 4];
        let mut store = SequenceStore::new(&mut buf, 4).unwrap();
        assert_eq!(store.to_string(), "empty");
        store.push(10).unwrap();
        store.push(-3).unwrap();
        let mut out = [0u8; 32];
        let len = store.render(&mut out).unwrap();
        assert_eq!(std::str::from_utf8(&out[..len]).unwrap(), store.to_string());
    }
}
