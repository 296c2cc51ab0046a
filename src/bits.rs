//! Bond bitset for a bandaged 3x3x3.
//!
//! A configuration records which of the 54 possible internal bonds are glued.
//! Bit positions follow Andreas Nortman's numbering, which every table in this
//! crate shares: edge-to-edge and edge-to-corner bonds on each layer, plus one
//! center-to-core bond per face (bits 16, 24, 26, 27, 29 and 37).

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::error::Error;

/// Number of meaningful bits in a configuration.
pub const BOND_COUNT: usize = 54;

/// Bitmask with every bond present (lowest 54 bits set).
pub const ALL_BONDS: u64 = (1 << BOND_COUNT) - 1;

/// Takes a list of bit positions and encodes them into a bitmask.
///
/// Panics (at compile time, when used in a `const`) on a position outside
/// `0..BOND_COUNT`.
pub const fn make_bitset(indices: &[u8]) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < indices.len() {
        assert!((indices[i] as usize) < BOND_COUNT, "bond index out of range");
        mask |= 1 << indices[i];
        i += 1;
    }
    mask
}

/// An immutable set of bonds.
///
/// Every operation returns a new value; the 54-bit bound is enforced when the
/// value is built, so no bit above [`BOND_COUNT`] is ever set.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cube(u64);

impl Cube {
    /// No bonds at all: the plain 3x3x3.
    pub const EMPTY: Self = Self(0);
    /// Every bond glued; no face can turn.
    pub const FULL: Self = Self(ALL_BONDS);

    /// Builds a configuration, or `None` if a bit at or above 54 is set.
    pub const fn new(bits: u64) -> Option<Self> {
        if bits & !ALL_BONDS == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Builds a configuration from a list of bond positions.
    pub const fn from_bonds(indices: &[u8]) -> Self {
        Self(make_bitset(indices))
    }

    /// The raw bit pattern.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns whether bond `idx` is present.
    #[inline(always)]
    pub const fn get(self, idx: u8) -> bool {
        self.0 & (1 << idx) != 0
    }

    /// Returns a copy with bond `idx` set to `present`.
    #[inline(always)]
    pub const fn set(self, idx: u8, present: bool) -> Self {
        let mask = 1 << idx;
        if present {
            Self(self.0 | mask)
        } else {
            Self(self.0 & !mask)
        }
    }

    /// Returns whether any bond in `mask` is present.
    #[inline(always)]
    pub const fn intersects(self, mask: u64) -> bool {
        self.0 & mask != 0
    }

    /// Number of bonds present.
    pub const fn bond_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates over the positions of the present bonds, lowest first.
    pub fn bonds(self) -> impl Iterator<Item = u8> {
        (0..BOND_COUNT as u8).filter(move |&idx| self.get(idx))
    }
}

impl TryFrom<u64> for Cube {
    type Error = Error;

    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        Self::new(bits).ok_or_else(|| Error::OutOfRange {
            input: format!("{bits:#x}"),
        })
    }
}

impl BitAnd for Cube {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Cube {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl Not for Cube {
    type Output = Self;

    /// Complements within the 54 meaningful bits.
    fn not(self) -> Self {
        Self(!self.0 & ALL_BONDS)
    }
}

impl fmt::LowerHex for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({:#x})", self.0)
    }
}
