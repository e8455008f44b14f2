//! Delta-encoded list over a sequence store.

use std::fmt;

use store::{Element, Position, SequenceStore, StoreError};

use crate::error::{DeltaError, DeltaResult};

/// A sorted list of magnitudes stored as successive gaps.
///
/// Entry `i` holds `magnitude(i) - magnitude(i - 1)`, so the absolute
/// magnitude of any entry is the prefix sum up to and including it. Only
/// the head has to be watched to know what expires next.
///
/// The list owns its [`SequenceStore`] and does not expose positional
/// insert, so the encoding cannot be broken from outside. Use
/// [`into_inner`](Self::into_inner) to get the raw store back.
///
/// Invariants for lists built through this type:
/// - the head gap is at least 1 and no gap is negative;
/// - a zero gap only follows an entry with the same magnitude;
/// - every prefix sum fits in `T`.
#[derive(Debug)]
pub struct DeltaList<'a, T: Element = i16> {
    store: SequenceStore<'a, T>,
}

impl<'a, T: Element> DeltaList<'a, T> {
    /// Wraps `store`, checking that its contents are a valid delta encoding.
    ///
    /// An empty store is always accepted.
    ///
    /// # Errors
    ///
    /// [`DeltaError::MalformedEncoding`] at the first offending position if
    /// the head gap is below 1, a gap is negative, or a prefix sum overflows.
    pub fn new(store: SequenceStore<'a, T>) -> DeltaResult<Self> {
        let mut total = T::ZERO;
        for (position, gap) in (0..).zip(store.iter()) {
            let floor = if position == 0 { T::ONE } else { T::ZERO };
            total = total
                .checked_add(gap)
                .filter(|_| gap >= floor)
                .ok_or(DeltaError::MalformedEncoding { position })?;
        }
        Ok(Self { store })
    }

    /// Binds `buffer` as a store of `capacity` entries and wraps it.
    ///
    /// # Errors
    ///
    /// Any error from [`SequenceStore::new`].
    pub fn from_buffer(buffer: &'a mut [T], capacity: Position) -> DeltaResult<Self> {
        let store = SequenceStore::new(buffer, capacity)?;
        Ok(Self { store })
    }

    /// Inserts an entry with absolute magnitude `value`.
    ///
    /// Walks from the head consuming every gap smaller than what is left of
    /// `value`. The remainder is inserted where the walk stops and the
    /// entry it displaces gives up that much of its own gap, so every other
    /// magnitude is preserved. An entry equal to an existing magnitude goes
    /// in front of it, leaving the existing one with a zero gap.
    ///
    /// Returns the position of the new entry.
    ///
    /// # Errors
    ///
    /// - [`DeltaError::NonPositiveMagnitude`] if `value < 1`.
    /// - [`DeltaError::Store`] with [`StoreError::CapacityExhausted`] if the
    ///   list is full.
    /// - [`DeltaError::ArithmeticOverflow`] if a gap computation fails.
    ///
    /// The list is unchanged whenever an error is returned.
    pub fn insert(&mut self, value: T) -> DeltaResult<Position> {
        if value < T::ONE {
            return Err(DeltaError::NonPositiveMagnitude {
                value: value.into(),
            });
        }
        if self.store.is_full() {
            return Err(StoreError::CapacityExhausted {
                capacity: self.store.capacity(),
            }
            .into());
        }

        let mut remaining = value;
        let mut position: Position = 0;
        while let Some(gap) = self.store.get(position) {
            if gap >= remaining {
                break;
            }
            remaining = remaining
                .checked_sub(gap)
                .ok_or(DeltaError::ArithmeticOverflow { position })?;
            position += 1;
        }

        let Some(occupant) = self.store.get(position) else {
            self.store.push(remaining)?;
            return Ok(position);
        };

        let shortened = occupant
            .checked_sub(remaining)
            .ok_or(DeltaError::ArithmeticOverflow { position })?;
        // One slot is free and `position < len`, so neither step can fail.
        self.replace(position, shortened)?;
        self.store.insert(position, remaining)?;
        Ok(position)
    }

    /// Removes the entry at `position` and returns its absolute magnitude.
    ///
    /// The removed gap is folded into the following entry so that every
    /// other magnitude stays the same.
    ///
    /// # Errors
    ///
    /// - [`DeltaError::Store`] with [`StoreError::EmptyStore`] or
    ///   [`StoreError::PositionOutOfBounds`] for an invalid position.
    /// - [`DeltaError::ArithmeticOverflow`] if folding the gap fails; the
    ///   list is unchanged.
    pub fn remove(&mut self, position: Position) -> DeltaResult<T> {
        if self.store.is_empty() {
            return Err(StoreError::EmptyStore.into());
        }
        let magnitude = self
            .magnitude_at(position)
            .ok_or(StoreError::PositionOutOfBounds {
                position,
                len: self.store.len(),
            })?;

        let next = position + 1;
        let merged = match (self.store.get(position), self.store.get(next)) {
            (Some(gap), Some(following)) => Some(
                following
                    .checked_add(gap)
                    .ok_or(DeltaError::ArithmeticOverflow { position: next })?,
            ),
            _ => None,
        };
        self.store.delete(position)?;
        if let Some(merged) = merged {
            self.replace(position, merged)?;
        }
        Ok(magnitude)
    }

    /// Removes the head entry, the one that expires first.
    ///
    /// # Errors
    ///
    /// [`DeltaError::Store`] with [`StoreError::EmptyStore`] if the list is
    /// empty.
    pub fn pop_front(&mut self) -> DeltaResult<T> {
        self.remove(0)
    }

    /// Moves time forward by `elapsed`.
    ///
    /// Every entry whose magnitude is at most `elapsed` expires and is
    /// removed; the first surviving entry's magnitude drops by `elapsed`.
    /// Returns the number of expired entries.
    ///
    /// # Errors
    ///
    /// [`DeltaError::NegativeElapsed`] if `elapsed < 0`.
    pub fn advance(&mut self, elapsed: T) -> DeltaResult<Position> {
        if elapsed < T::ZERO {
            return Err(DeltaError::NegativeElapsed {
                elapsed: elapsed.into(),
            });
        }

        let mut left = elapsed;
        let mut expired: Position = 0;
        while let Some(head) = self.store.get(0) {
            if head > left {
                let rest = head
                    .checked_sub(left)
                    .ok_or(DeltaError::ArithmeticOverflow { position: 0 })?;
                self.replace(0, rest)?;
                break;
            }
            left = left
                .checked_sub(head)
                .ok_or(DeltaError::ArithmeticOverflow { position: 0 })?;
            self.store.delete(0)?;
            expired += 1;
        }
        Ok(expired)
    }

    /// Rewrites the gap at `position` through the store's delete and insert.
    fn replace(&mut self, position: Position, gap: T) -> DeltaResult<()> {
        self.store.delete(position)?;
        self.store.insert(position, gap)?;
        Ok(())
    }

    /// Absolute magnitude of the entry at `position`.
    #[must_use]
    pub fn magnitude_at(&self, position: Position) -> Option<T> {
        let end = usize::from(position).checked_add(1)?;
        self.deltas()
            .get(..end)?
            .iter()
            .try_fold(T::ZERO, |total, gap| total.checked_add(*gap))
    }

    /// Absolute magnitudes of all entries, in order.
    pub fn magnitudes(&self) -> impl Iterator<Item = T> + '_ {
        self.store.iter().scan(T::ZERO, |total, gap| {
            *total = total.checked_add(gap)?;
            Some(*total)
        })
    }

    /// The stored gaps, head first.
    #[must_use]
    pub fn deltas(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> Position {
        self.store.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Fixed capacity of the underlying store.
    #[must_use]
    pub const fn capacity(&self) -> Position {
        self.store.capacity()
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &SequenceStore<'a, T> {
        &self.store
    }

    /// Renders the stored gaps as NUL-terminated text into `out`.
    ///
    /// See [`SequenceStore::render`].
    ///
    /// # Errors
    ///
    /// Any render error from the store.
    pub fn render(&self, out: &mut [u8]) -> DeltaResult<usize> {
        Ok(self.store.render(out)?)
    }

    /// Gives the store back, ending delta semantics.
    #[must_use]
    pub fn into_inner(self) -> SequenceStore<'a, T> {
        self.store
    }
}

impl<T: Element> fmt::Display for DeltaList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.store, f)
    }
}
