//! # Generational Handles
//!
//! A handle is a lightweight identifier consisting of:
//! - A 16-bit index into an owning table
//! - A 16-bit generation counter for detecting stale references
//!
//! Handles are never dereferenced directly. They are resolved through the
//! table that issued them on every access.

use std::fmt;

/// Packed `{index, generation}` reference into a pool, tree, or registry.
///
/// Layout of the packed `u32`:
/// - Lower 16 bits: slot index
/// - Upper 16 bits: generation
///
/// The all-ones value is reserved as [`Handle::INVALID`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Handle(u32);

impl Handle {
    /// The reserved "no object" handle.
    pub const INVALID: Self = Self(u32::MAX);

    /// Packs an index and generation into a handle.
    ///
    /// # Arguments
    ///
    /// * `index` - Slot index (0 to 65535)
    /// * `generation` - Generation of the slot when the handle was issued
    #[inline]
    #[must_use]
    pub const fn new(index: u16, generation: u16) -> Self {
        Self(((generation as u32) << 16) | (index as u32))
    }

    /// Returns the invalid sentinel.
    #[inline]
    #[must_use]
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    /// Returns false only for the sentinel.
    ///
    /// A valid-looking handle may still be stale; only the owning table can
    /// tell.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// Returns the index portion of the handle.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0 as u16
    }

    /// Returns the generation portion of the handle.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Returns the packed representation.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Rebuilds a handle from its packed representation.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Handle(index={}, gen={})", self.index(), self.generation())
        } else {
            f.write_str("Handle(INVALID)")
        }
    }
}
