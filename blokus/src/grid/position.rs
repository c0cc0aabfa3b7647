use crate::Piece;

/// A cell coordinate on the padded grid.
///
/// The playable area starts at `(1, 1)`; row and column 0 belong to the
/// forbidden border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cells sharing a side with this one.
    pub fn edge_neighbors(self) -> [Position; 4] {
        [
            self.offset(0, -1),
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, 1),
        ]
    }

    /// The four cells touching this one only at a corner.
    pub fn corner_neighbors(self) -> [Position; 4] {
        [
            self.offset(-1, -1),
            self.offset(1, -1),
            self.offset(-1, 1),
            self.offset(1, 1),
        ]
    }
}

/// A piece placed with its bounding box's top-left corner at `anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub piece: Piece,
    pub anchor: Position,
}

impl Placement {
    pub fn new(piece: Piece, anchor: Position) -> Self {
        Self { piece, anchor }
    }

    /// The absolute grid cells covered by this placement, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let anchor = self.anchor;
        self.piece
            .footprint()
            .into_iter()
            .map(move |(dx, dy)| anchor.offset(dx, dy))
    }
}
