//! Fixed-capacity sequence store for constrained environments.
//!
//! This crate provides [`SequenceStore`], an ordered container of signed
//! integers that lives entirely inside a caller-supplied buffer. It supports
//! positional insert and delete, and renders itself as text into a
//! caller-supplied byte buffer without ever truncating.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **No allocation** - The store borrows its slots; the borrow's lifetime
//!   bounds the store's lifetime.
//! - **Bounded operations** - Capacity is fixed at initialization and every
//!   access is bounds-checked.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use store::SequenceStore;
//!
//! let mut slots = [0i16; 8];
//! let mut store = SequenceStore::new(&mut slots, 8).unwrap();
//! store.insert(0, 12).unwrap();
//! store.insert(0, 10).unwrap();
//! store.insert(1, 11).unwrap();
//!
//! let mut out = [0u8; 32];
//! let len = store.render(&mut out).unwrap();
//! assert_eq!(&out[..len], b"10, 11, 12");
//! ```

mod element;
mod error;
mod limits;
mod render;
mod sequence;

pub use element::Element;
pub use error::{ErrorKind, StoreError, StoreResult};
pub use limits::{
    min_render_bytes, Position, EMPTY_MESSAGE, EMPTY_MESSAGE_SIZE, SEPARATOR, SUPPORTED_MAXIMUM,
};
pub use sequence::SequenceStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let mut slots = [0i16; 1];
        let _ = SequenceStore::new(&mut slots, 1).unwrap();
        let _: StoreResult<()> = Ok(());
        let _ = ErrorKind::Range.code();
        assert_eq!(EMPTY_MESSAGE, "empty");
    }

    #[test]
    fn doctest_example() {
        let mut slots = [0i16; 8];
        let mut store = SequenceStore::new(&mut slots, 8).unwrap();
        store.insert(0, 12).unwrap();
        store.insert(0, 10).unwrap();
        store.insert(1, 11).unwrap();

        let mut out = [0u8; 32];
        let len = store.render(&mut out).unwrap();
        assert_eq!(&out[..len], b"10, 11, 12");
        assert_eq!(out[len], 0);
    }

    #[test]
    fn default_element_is_i16() {
        let mut slots = [0i16; 2];
        let store: SequenceStore<'_> = SequenceStore::new(&mut slots, 2).unwrap();
        assert_eq!(store.capacity(), 2);
    }
}
