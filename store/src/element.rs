//! Element types a store can hold.

use std::fmt;

/// A signed integer type usable as a store element.
///
/// Implemented for `i8`, `i16`, `i32` and `i64`. Arithmetic is always
/// checked; nothing in the workspace wraps. Every element widens losslessly
/// to `i64`, which is what error values carry.
pub trait Element: Copy + Ord + Into<i64> + fmt::Debug + fmt::Display {
    /// Additive identity.
    const ZERO: Self;
    /// Smallest positive value.
    const ONE: Self;

    /// `self + rhs`, or `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` on overflow.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64);
