//! Delta-encoded insertion on top of the dlist sequence store.
//!
//! A [`DeltaList`] keeps a sorted set of magnitudes (typically expiry times)
//! as successive gaps inside a [`store::SequenceStore`]. The absolute
//! magnitude of any entry is the prefix sum of the gaps up to it, so a timer
//! only ever needs to count down the head entry.
//!
//! # Example
//!
//! ```
//! use delta::DeltaList;
//!
//! let mut slots = [0i16; 5];
//! let mut list = DeltaList::from_buffer(&mut slots, 5).unwrap();
//! list.insert(10).unwrap();
//! list.insert(15).unwrap();
//! list.insert(12).unwrap();
//!
//! assert_eq!(list.deltas(), &[10, 2, 3]);
//! assert_eq!(list.to_string(), "10, 2, 3");
//! ```
//!
//! # Design Principles
//!
//! - **One interpretation per store** - Wrapping a store hides its
//!   positional insert, so plain and delta semantics cannot be mixed.
//! - **Fail closed** - Gap arithmetic is checked, and a failed insert leaves
//!   the list exactly as it was.

mod error;
mod list;

pub use error::{DeltaError, DeltaResult};
pub use list::DeltaList;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctest_example() {
        let mut slots = [0i16; 5];
        let mut list = DeltaList::from_buffer(&mut slots, 5).unwrap();
        list.insert(10).unwrap();
        list.insert(15).unwrap();
        list.insert(12).unwrap();

        assert_eq!(list.deltas(), &[10, 2, 3]);
        assert_eq!(list.to_string(), "10, 2, 3");
    }

    #[test]
    fn public_api_exports() {
        let _: DeltaResult<()> = Ok(());
        let err = DeltaError::NonPositiveMagnitude { value: 0 };
        assert_eq!(err.kind(), store::ErrorKind::Domain);
    }
}
