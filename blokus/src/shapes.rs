use std::str::FromStr;

use crate::Orientation;

/// One of the 21 polyominoes each player owns, or the pass sentinel.
///
/// The declaration order is the catalog order. It determines the order in
/// which shapes are enumerated during search and is therefore observable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    Monomino,
    Domino,
    I3,
    V3,
    I4,
    L4,
    T4,
    O4,
    S4,
    I5,
    L5,
    Y5,
    N5,
    P5,
    U5,
    V5,
    T5,
    W5,
    Z5,
    F5,
    X5,
    /// Not a real shape, stands for "no move this turn".
    Pass,
}

/// Number of real shapes, i.e. without [`ShapeKind::Pass`].
pub const NUM_SHAPES: usize = 21;

// Cells of every shape at orientation 0, in row-major order (y grows downwards).
static PATTERNS: [&[(i8, i8)]; NUM_SHAPES] = [
    &[(0, 0)],
    &[(0, 0), (1, 0)],
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
    &[(0, 0), (1, 0), (2, 0), (1, 1)],
    &[(0, 0), (1, 0), (0, 1), (1, 1)],
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
    &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)],
    &[(1, 0), (0, 1), (1, 1), (1, 2), (1, 3)],
    &[(1, 0), (1, 1), (0, 2), (1, 2), (0, 3)],
    &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
    &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)],
    &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
    &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
    &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
];

const LETTERS: &[u8; NUM_SHAPES + 1] = b"ABCDEFGHIJKLMNOPQRSTUX";

impl ShapeKind {
    /// All real shapes in catalog order.
    pub const ALL: [ShapeKind; NUM_SHAPES] = [
        ShapeKind::Monomino,
        ShapeKind::Domino,
        ShapeKind::I3,
        ShapeKind::V3,
        ShapeKind::I4,
        ShapeKind::L4,
        ShapeKind::T4,
        ShapeKind::O4,
        ShapeKind::S4,
        ShapeKind::I5,
        ShapeKind::L5,
        ShapeKind::Y5,
        ShapeKind::N5,
        ShapeKind::P5,
        ShapeKind::U5,
        ShapeKind::V5,
        ShapeKind::T5,
        ShapeKind::W5,
        ShapeKind::Z5,
        ShapeKind::F5,
        ShapeKind::X5,
    ];

    /// The cells of this shape at orientation 0, as `(dx, dy)` offsets in row-major order.
    ///
    /// The pattern is normalized so that its smallest x and smallest y are both 0.
    /// The pass sentinel has an empty pattern.
    pub fn canonical_pattern(self) -> &'static [(i8, i8)] {
        match self {
            ShapeKind::Pass => &[],
            _ => PATTERNS[self as usize],
        }
    }

    /// The eight orientations of this shape.
    ///
    /// Symmetric shapes produce duplicate footprints for some of them.
    pub fn orientations(self) -> [Orientation; 8] {
        Orientation::ALL
    }

    /// Number of cells, which is also the score value of the shape.
    pub fn area(self) -> u32 {
        self.canonical_pattern().len() as u32
    }

    /// The letter used for this shape in move tokens.
    pub fn letter(self) -> char {
        LETTERS[self as usize] as char
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        if letter == 'X' {
            return Some(ShapeKind::Pass);
        }
        LETTERS[..NUM_SHAPES]
            .iter()
            .position(|&l| l as char == letter)
            .map(|idx| ShapeKind::ALL[idx])
    }

    pub(crate) fn to_index(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_index(idx: u8) -> Self {
        ShapeKind::ALL[idx as usize]
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The error type for the [`FromStr`] instance of [`ShapeKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKindFromStrErr {
    NotOneChar,
    UnknownLetter,
}

/// Parses a single shape letter.
///
/// ```
/// # use blokus::ShapeKind;
/// assert_eq!("U".parse::<ShapeKind>(), Ok(ShapeKind::X5));
/// assert_eq!("X".parse::<ShapeKind>(), Ok(ShapeKind::Pass));
/// assert!("Y".parse::<ShapeKind>().is_err());
/// ```
impl FromStr for ShapeKind {
    type Err = ShapeKindFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ShapeKindFromStrErr::NotOneChar)?;
        if chars.next().is_some() {
            return Err(ShapeKindFromStrErr::NotOneChar);
        }
        ShapeKind::from_letter(letter).ok_or(ShapeKindFromStrErr::UnknownLetter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_the_duo_piece_set() {
        let areas: Vec<u32> = ShapeKind::ALL.iter().map(|kind| kind.area()).collect();
        assert_eq!(areas.iter().sum::<u32>(), 89);
        assert_eq!(areas.iter().filter(|&&a| a == 5).count(), 12);
        assert_eq!(areas.iter().filter(|&&a| a == 4).count(), 5);
        assert_eq!(ShapeKind::Pass.area(), 0);
    }

    #[test]
    fn patterns_are_normalized_and_row_major() {
        for kind in ShapeKind::ALL {
            let pattern = kind.canonical_pattern();
            assert_eq!(pattern.iter().map(|c| c.0).min(), Some(0), "{:?}", kind);
            assert_eq!(pattern.iter().map(|c| c.1).min(), Some(0), "{:?}", kind);
            let mut sorted = pattern.to_vec();
            sorted.sort_by_key(|&(x, y)| (y, x));
            sorted.dedup();
            assert_eq!(sorted, pattern, "{:?}", kind);
        }
    }

    #[test]
    fn letters_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_letter(kind.letter()), Some(kind));
        }
        assert_eq!(ShapeKind::Pass.letter(), 'X');
        assert_eq!(ShapeKind::from_letter('V'), None);
        assert_eq!(ShapeKind::from_letter('a'), None);
    }
}
