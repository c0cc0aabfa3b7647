use std::iter::FusedIterator;

use crate::bitset::bitset_traits;
use crate::{ShapeKind, NUM_SHAPES};

/// A compact set of [`ShapeKind`]s.
///
/// Iteration yields shapes in catalog order. The pass sentinel can never be
/// a member; inserting it has no effect.
///
/// ```
/// use blokus::{ShapeKind, ShapeSet};
/// let mut set = ShapeSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `ShapeSet`.
/// set = set.insert(ShapeKind::X5);
/// set = set.insert(ShapeKind::Monomino);
/// set = set.insert(ShapeKind::Pass);
/// assert_eq!(Vec::from_iter(set), vec![ShapeKind::Monomino, ShapeKind::X5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeSet {
    // Only the low 21 bits are used.
    bits: u32,
}

impl ShapeSet {
    const VALID_BITS: u32 = (1 << NUM_SHAPES) - 1;

    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// The full set of shapes every player starts with.
    pub fn all() -> Self {
        Self {
            bits: Self::VALID_BITS,
        }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, kind: ShapeKind) -> bool {
        (self.bits & Self::bit(kind)) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, kind: ShapeKind) -> Self {
        Self {
            bits: self.bits | Self::bit(kind),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, kind: ShapeKind) -> Self {
        Self {
            bits: self.bits & !Self::bit(kind),
        }
    }

    fn bit(kind: ShapeKind) -> u32 {
        (1u32 << kind.to_index()) & Self::VALID_BITS
    }
}

bitset_traits!(ShapeSet);

impl FromIterator<ShapeKind> for ShapeSet {
    fn from_iter<T: IntoIterator<Item = ShapeKind>>(iter: T) -> Self {
        let mut bits = 0;
        for kind in iter {
            bits |= Self::bit(kind);
        }
        Self { bits }
    }
}

impl IntoIterator for ShapeSet {
    type Item = ShapeKind;

    type IntoIter = ShapeSetIter;

    fn into_iter(self) -> Self::IntoIter {
        ShapeSetIter { bits: self.bits }
    }
}

/// Iterator for a [`ShapeSet`] that returns shapes in catalog order.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSetIter {
    bits: u32,
}

impl Iterator for ShapeSetIter {
    type Item = ShapeKind;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the shape index
            let idx = self.bits.trailing_zeros() as u8;
            self.bits ^= 1u32 << idx;
            Some(ShapeKind::from_index(idx))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl DoubleEndedIterator for ShapeSetIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let idx = 31 - self.bits.leading_zeros() as u8;
            self.bits ^= 1u32 << idx;
            Some(ShapeKind::from_index(idx))
        }
    }
}

impl ExactSizeIterator for ShapeSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for ShapeSetIter {}
