use crate::ShapeKind;

/// The error type for constructing [orientations](crate::Orientation) and
/// [pieces](crate::Piece).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Orientation indices must be in `0..8`.
    InvalidOrientation { index: u8 },
    /// The pass sentinel has no footprint, so it can't be turned into a piece.
    InvalidShapeOrOrientation { kind: ShapeKind },
}

impl std::error::Error for GeometryError {}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::InvalidOrientation { index } => {
                write!(f, "Orientation index {} is outside of 0..8", index)
            }
            GeometryError::InvalidShapeOrOrientation { kind } => {
                write!(f, "Shape '{}' has no footprint and can't form a piece", kind.letter())
            }
        }
    }
}

/// The error type for [`Grid::parse()`](crate::Grid::parse).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedBoard {
    WrongRowCount { expected: usize, found: usize },
    WrongRowLength { row: usize, expected: usize, found: usize },
    UnrecognizedSymbol { row: usize, col: usize, symbol: char },
}

impl std::error::Error for MalformedBoard {}

impl std::fmt::Display for MalformedBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedBoard::WrongRowCount { expected, found } => {
                write!(f, "Board has {} rows, expected {}", found, expected)
            }
            MalformedBoard::WrongRowLength { row, expected, found } => write!(
                f,
                "Row {} of the board has {} cells, expected {}",
                row, found, expected
            ),
            MalformedBoard::UnrecognizedSymbol { row, col, symbol } => write!(
                f,
                "Unrecognized cell symbol {:?} in row {}, column {}",
                symbol, row, col
            ),
        }
    }
}

/// The error type for [`Inventory`](crate::Inventory) bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryError {
    ShapeNotAvailable(ShapeKind),
    ShapeNotUsed(ShapeKind),
}

impl std::error::Error for InventoryError {}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::ShapeNotAvailable(kind) => {
                write!(f, "Shape '{}' is not among the remaining shapes", kind.letter())
            }
            InventoryError::ShapeNotUsed(kind) => {
                write!(f, "Shape '{}' was never used, so it can't be given back", kind.letter())
            }
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Move`](crate::Move).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedMoveToken {
    WrongLength { token: String },
    UnknownShape { letter: char },
    InvalidOrientation { digit: char },
    InvalidCoordinate { digit: char },
    /// Starts with the pass letter, but isn't exactly the pass token.
    InvalidPass { token: String },
}

impl std::error::Error for MalformedMoveToken {}

impl std::fmt::Display for MalformedMoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedMoveToken::WrongLength { token } => {
                write!(f, "Move token {:?} is not exactly four characters long", token)
            }
            MalformedMoveToken::UnknownShape { letter } => {
                write!(f, "Unknown shape letter {:?}", letter)
            }
            MalformedMoveToken::InvalidOrientation { digit } => {
                write!(f, "Invalid orientation digit {:?}, expected 0 to 7", digit)
            }
            MalformedMoveToken::InvalidCoordinate { digit } => {
                write!(f, "Invalid coordinate digit {:?}, expected 0-9 or A-Z", digit)
            }
            MalformedMoveToken::InvalidPass { token } => {
                write!(f, "Move token {:?} uses the pass letter but is not the pass token", token)
            }
        }
    }
}

/// The error type for move selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// No orientation/anchor combination around the starting cell was legal.
    ///
    /// `kind` is `None` if the inventory was already empty.
    NoOpeningMoveFound { kind: Option<ShapeKind> },
}

impl std::error::Error for SearchError {}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NoOpeningMoveFound { kind: Some(kind) } => write!(
                f,
                "Shape '{}' can't cover the starting cell in any orientation",
                kind.letter()
            ),
            SearchError::NoOpeningMoveFound { kind: None } => {
                write!(f, "No shape is left to play the opening move with")
            }
        }
    }
}

/// The reason why a placement is not legal on a grid.
///
/// Returned by [`Grid::check_placement()`](crate::Grid::check_placement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { x: i8, y: i8 },
    Occupied { x: i8, y: i8 },
    /// A cell would share a side with a cell the player already owns.
    EdgeContact { x: i8, y: i8 },
    /// No cell touches a cell of the player diagonally.
    NoCornerContact,
    /// An opening placement must cover the player's starting cell.
    MissesStartCell,
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { x, y } => {
                write!(f, "Cell ({}, {}) is outside of the playable area", x, y)
            }
            IllegalPlacement::Occupied { x, y } => write!(f, "Cell ({}, {}) is already taken", x, y),
            IllegalPlacement::EdgeContact { x, y } => write!(
                f,
                "Cell ({}, {}) shares a side with a cell of the same player",
                x, y
            ),
            IllegalPlacement::NoCornerContact => {
                write!(f, "Piece doesn't touch a cell of the same player at a corner")
            }
            IllegalPlacement::MissesStartCell => {
                write!(f, "Opening piece doesn't cover the starting cell")
            }
        }
    }
}

/// The error type for converting a number into a [`PlayerId`](crate::PlayerId).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPlayerNumber(pub u8);

impl std::error::Error for InvalidPlayerNumber {}

impl std::fmt::Display for InvalidPlayerNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player number must be 1 or 2, got {}", self.0)
    }
}
