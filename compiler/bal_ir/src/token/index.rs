//! Typed token index.

use std::fmt;

/// Typed index into a `TokenStream`.
///
/// Provides type safety over raw `u32` indices when referring to tokens.
/// Uses `u32::MAX` as a sentinel for "no token", which is what a producer
/// leaves in a node boundary it failed to set.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TokenIdx(u32);

impl TokenIdx {
    /// Sentinel value indicating no token.
    pub const NONE: TokenIdx = TokenIdx(u32::MAX);

    /// Create a `TokenIdx` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TokenIdx(raw)
    }

    /// Get the raw `u32` index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as a `usize` for slice access.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a valid index (not the `NONE` sentinel).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Display for TokenIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}

crate::static_assert_size!(TokenIdx, 4);
