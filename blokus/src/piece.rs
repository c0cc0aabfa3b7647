use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::sync::OnceLock;

use crate::{GeometryError, ShapeKind, ShapeSet, NUM_SHAPES};

/// Footprints are stored in a 5x5 window, which fits every shape in every orientation.
const STRIDE: i8 = 5;

/// One of the 8 rotation/reflection variants of a shape.
///
/// Index `o` means: rotate clockwise by 90° `o % 4` times, then mirror
/// horizontally if `o >= 4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Orientation(u8);

impl Orientation {
    pub const ALL: [Orientation; 8] = [
        Orientation(0),
        Orientation(1),
        Orientation(2),
        Orientation(3),
        Orientation(4),
        Orientation(5),
        Orientation(6),
        Orientation(7),
    ];

    pub fn new(index: u8) -> Result<Self, GeometryError> {
        if index < 8 {
            Ok(Orientation(index))
        } else {
            Err(GeometryError::InvalidOrientation { index })
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn quarter_turns(self) -> u8 {
        self.0 % 4
    }

    pub fn is_mirrored(self) -> bool {
        self.0 >= 4
    }
}

/// The occupied cells of a piece within its bounding box.
///
/// Cells are normalized so that the smallest x and the smallest y are both 0.
/// It can be converted into a list of `(dx, dy)` offsets, in row-major
/// order, by means of its [`IntoIterator`] instance.
///
/// Note that its "transforming" methods return a new object instead of really mutating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    /// Bit `dy * 5 + dx` is set if the cell `(dx, dy)` is occupied.
    bits: u32,
    width: i8,
    height: i8,
}

impl Footprint {
    /// Builds a normalized footprint out of arbitrary cell coordinates.
    ///
    /// Returns `None` if there are no cells or they don't fit into a 5x5 box.
    pub fn from_cells(cells: impl IntoIterator<Item = (i8, i8)>) -> Option<Self> {
        let cells: Vec<(i8, i8)> = cells.into_iter().collect();
        let x_min = cells.iter().map(|c| c.0).min()?;
        let y_min = cells.iter().map(|c| c.1).min()?;
        let x_max = cells.iter().map(|c| c.0).max()?;
        let y_max = cells.iter().map(|c| c.1).max()?;
        let width = x_max.checked_sub(x_min)?.checked_add(1)?;
        let height = y_max.checked_sub(y_min)?.checked_add(1)?;
        if width > STRIDE || height > STRIDE {
            return None;
        }
        let mut bits = 0;
        for (x, y) in cells {
            bits |= 1u32 << ((y - y_min) * STRIDE + (x - x_min));
        }
        Some(Self {
            bits,
            width,
            height,
        })
    }

    fn from_pattern(pattern: &[(i8, i8)]) -> Self {
        Self::from_cells(pattern.iter().copied())
            .expect("shape catalog patterns are non-empty and fit into 5x5")
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    /// Number of occupied cells.
    pub fn area(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn contains(&self, dx: i8, dy: i8) -> bool {
        (0..self.width).contains(&dx)
            && (0..self.height).contains(&dy)
            && self.bits & (1u32 << (dy * STRIDE + dx)) != 0
    }

    /// Apply the transform of `orientation`.
    #[must_use]
    pub fn transformed(self, orientation: Orientation) -> Self {
        let mut cells: Vec<(i8, i8)> = self.into_iter().collect();
        for _ in 0..orientation.quarter_turns() {
            // Clockwise, with y growing downwards
            cells.iter_mut().for_each(|c| *c = (-c.1, c.0));
        }
        if orientation.is_mirrored() {
            cells.iter_mut().for_each(|c| c.0 = -c.0);
        }
        Self::from_cells(cells).unwrap_or(self)
    }

    /// Undo the transform of `orientation`, i.e. the inverse of [`Self::transformed()`].
    #[must_use]
    pub fn untransformed(self, orientation: Orientation) -> Self {
        let mut cells: Vec<(i8, i8)> = self.into_iter().collect();
        if orientation.is_mirrored() {
            cells.iter_mut().for_each(|c| c.0 = -c.0);
        }
        for _ in 0..orientation.quarter_turns() {
            cells.iter_mut().for_each(|c| *c = (c.1, -c.0));
        }
        Self::from_cells(cells).unwrap_or(self)
    }
}

impl IntoIterator for Footprint {
    type Item = (i8, i8);

    type IntoIter = FootprintIter;

    fn into_iter(self) -> Self::IntoIter {
        FootprintIter { bits: self.bits }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FootprintIter {
    bits: u32,
}

impl Iterator for FootprintIter {
    type Item = (i8, i8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let idx = self.bits.trailing_zeros() as i8;
            self.bits ^= 1u32 << idx;
            Some((idx % STRIDE, idx / STRIDE))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for FootprintIter {}

impl FusedIterator for FootprintIter {}

impl Debug for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Footprint {}x{}", self.width, self.height)?;
        for dy in 0..self.height {
            for dx in 0..self.width {
                write!(f, "{}", if self.contains(dx, dy) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A shape in a specific orientation.
///
/// Never the pass sentinel, so there is always a footprint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    orientation: Orientation,
}

impl Piece {
    pub fn new(kind: ShapeKind, orientation: Orientation) -> Result<Self, GeometryError> {
        match kind {
            ShapeKind::Pass => Err(GeometryError::InvalidShapeOrOrientation { kind }),
            _ => Ok(Self { kind, orientation }),
        }
    }

    /// Like [`Self::new()`], but with a raw orientation index.
    pub fn from_index(kind: ShapeKind, orientation: u8) -> Result<Self, GeometryError> {
        Self::new(kind, Orientation::new(orientation)?)
    }

    // Only for shapes that are known not to be the pass sentinel.
    pub(crate) fn new_unchecked(kind: ShapeKind, orientation: Orientation) -> Self {
        debug_assert_ne!(kind, ShapeKind::Pass);
        Self { kind, orientation }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn footprint(&self) -> Footprint {
        footprint_table()[self.kind as usize][self.orientation.index() as usize]
    }

    /// Number of cells. Doesn't depend on the orientation.
    pub fn area(&self) -> u32 {
        self.kind.area()
    }

    /// Finds a piece among `candidates` whose footprint is `footprint`.
    ///
    /// Shapes are tried in catalog order and orientations in index order.
    pub fn identify(footprint: Footprint, candidates: ShapeSet) -> Option<Self> {
        candidates
            .into_iter()
            .filter(|kind| kind.area() == footprint.area())
            .flat_map(|kind| {
                kind.orientations()
                    .into_iter()
                    .map(move |orientation| Piece::new_unchecked(kind, orientation))
            })
            .find(|piece| piece.footprint() == footprint)
    }
}

// Footprints are looked up for every candidate during search, so they are computed once.
fn footprint_table() -> &'static [[Footprint; 8]; NUM_SHAPES] {
    static TABLE: OnceLock<[[Footprint; 8]; NUM_SHAPES]> = OnceLock::new();
    TABLE.get_or_init(|| {
        std::array::from_fn(|k| {
            let canonical = Footprint::from_pattern(ShapeKind::ALL[k].canonical_pattern());
            Orientation::ALL.map(|orientation| canonical.transformed(orientation))
        })
    })
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn inverse_transform_restores_pattern(piece: Piece) -> bool {
            let canonical = Footprint::from_pattern(piece.kind().canonical_pattern());
            piece.footprint().untransformed(piece.orientation()) == canonical
        }

        fn footprint_keeps_area(piece: Piece) -> bool {
            let fp = piece.footprint();
            fp.area() == piece.area() && fp.into_iter().count() as u32 == piece.area()
        }
    }

    #[test]
    fn every_footprint_has_a_positive_bounding_box() {
        for kind in ShapeKind::ALL {
            for orientation in kind.orientations() {
                let fp = Piece::new(kind, orientation).unwrap().footprint();
                assert!(fp.width() > 0 && fp.height() > 0);
                assert_eq!(fp.into_iter().map(|c| c.0).min(), Some(0));
                assert_eq!(fp.into_iter().map(|c| c.1).min(), Some(0));
            }
        }
    }

    #[test]
    fn rotation_is_clockwise_and_mirror_is_horizontal() {
        // L4 at orientation 0:
        // #.
        // #.
        // ##
        let l4 = |o| Piece::from_index(ShapeKind::L4, o).unwrap().footprint();
        assert_eq!(Vec::from_iter(l4(1)), vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
        assert_eq!(Vec::from_iter(l4(4)), vec![(1, 0), (1, 1), (0, 2), (1, 2)]);
        assert_eq!((l4(1).width(), l4(1).height()), (3, 2));
    }

    #[test]
    fn symmetric_shapes_have_duplicate_orientations() {
        let o4 = Piece::from_index(ShapeKind::O4, 0).unwrap().footprint();
        let x5 = Piece::from_index(ShapeKind::X5, 0).unwrap().footprint();
        for orientation in Orientation::ALL {
            assert_eq!(o4.transformed(orientation), o4);
            assert_eq!(x5.transformed(orientation), x5);
        }
    }

    #[test]
    fn pass_and_bad_indices_are_rejected() {
        assert_eq!(
            Piece::from_index(ShapeKind::Pass, 0),
            Err(GeometryError::InvalidShapeOrOrientation {
                kind: ShapeKind::Pass
            })
        );
        assert_eq!(
            Piece::from_index(ShapeKind::I5, 8),
            Err(GeometryError::InvalidOrientation { index: 8 })
        );
    }

    #[test]
    fn identify_finds_rotated_shapes() {
        let cells = [(7, 3), (7, 4), (8, 4), (9, 4), (10, 4)];
        let fp = Footprint::from_cells(cells).unwrap();
        let piece = Piece::identify(fp, ShapeSet::all()).unwrap();
        assert_eq!(piece.kind(), ShapeKind::L5);
        assert_eq!(piece.footprint(), fp);

        let without_l5 = ShapeSet::all().remove(ShapeKind::L5);
        assert_eq!(Piece::identify(fp, without_l5), None);
    }

    #[test]
    fn oversized_cells_have_no_footprint() {
        assert_eq!(Footprint::from_cells([(0, 0), (5, 0)]), None);
        assert_eq!(Footprint::from_cells(Vec::new()), None);
    }
}
