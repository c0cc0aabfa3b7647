mod position;
mod wire;

pub use position::*;

use crate::{IllegalPlacement, PlayerId};

/// Width and height of the playable area in a standard game.
pub const BOARD_SIZE: i8 = 14;

/// Coordinates are written as single base-36 digits, so this is the largest
/// playable width/height.
pub const MAX_BOARD_SIZE: i8 = 35;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owned(PlayerId),
    /// Part of the border around the playable area.
    Forbidden,
}

/// Which legality rule a placement is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementRule {
    /// The player's first piece: it must cover the player's starting cell.
    Opening,
    /// Every later piece: it must touch one of the player's cells at a corner.
    General,
}

/// The board: a `width` x `height` playable area surrounded by a 1-cell
/// forbidden border.
///
/// The border makes neighbor lookups of playable cells always valid, so
/// legality checks only look at the cells of the placement and their neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i8,
    height: i8,
    /// Row-major, `(width + 2) * (height + 2)` cells including the border.
    cells: Vec<Cell>,
    /// Indexed by [`PlayerId::index()`].
    start_cells: [Position; 2],
}

impl Grid {
    /// Creates an empty grid with the default starting cells.
    ///
    /// On the standard 14x14 board these are (5, 5) for player 1 and
    /// (10, 10) for player 2.
    pub fn new(width: i8, height: i8) -> Self {
        let start_cells = [
            Position::new(width.min(5), height.min(5)),
            Position::new((width - 4).max(1), (height - 4).max(1)),
        ];
        Self::with_start_cells(width, height, start_cells)
    }

    /// Creates an empty grid with explicit starting cells.
    ///
    /// Panics if the size is out of range or a starting cell is not playable.
    pub fn with_start_cells(width: i8, height: i8, start_cells: [Position; 2]) -> Self {
        assert!((1..=MAX_BOARD_SIZE).contains(&width));
        assert!((1..=MAX_BOARD_SIZE).contains(&height));
        let padded_width = width as usize + 2;
        let padded_height = height as usize + 2;
        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Forbidden; padded_width * padded_height],
            start_cells,
        };
        for y in 1..=height {
            for x in 1..=width {
                grid.set(Position::new(x, y), Cell::Empty);
            }
        }
        assert!(start_cells.iter().all(|&pos| grid.is_playable(pos)));
        grid
    }

    pub fn width(&self) -> i8 {
        self.width
    }

    pub fn height(&self) -> i8 {
        self.height
    }

    /// The cell an opening placement of `player` must cover.
    pub fn start_cell(&self, player: PlayerId) -> Position {
        self.start_cells[player.index()]
    }

    pub fn is_playable(&self, pos: Position) -> bool {
        (1..=self.width).contains(&pos.x) && (1..=self.height).contains(&pos.y)
    }

    /// Anything outside of the padded area also counts as forbidden.
    pub fn get(&self, pos: Position) -> Cell {
        if (0..=self.width + 1).contains(&pos.x) && (0..=self.height + 1).contains(&pos.y) {
            self.cells[self.idx(pos)]
        } else {
            Cell::Forbidden
        }
    }

    pub fn owns(&self, player: PlayerId, pos: Position) -> bool {
        self.get(pos) == Cell::Owned(player)
    }

    /// All cells owned by `player`, in row-major order.
    pub fn cells_owned_by(&self, player: PlayerId) -> impl Iterator<Item = Position> + '_ {
        let padded_width = self.width + 2;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == Cell::Owned(player))
            .map(move |(idx, _)| {
                let idx = idx as i16;
                Position::new((idx % padded_width as i16) as i8, (idx / padded_width as i16) as i8)
            })
    }

    pub fn has_cells(&self, player: PlayerId) -> bool {
        self.cells.contains(&Cell::Owned(player))
    }

    /// Checks whether `player` may put down `placement` under `rule`, and why not.
    ///
    /// Every cell must be playable and empty, and no cell may share a side
    /// with a cell of the same player. Additionally, the [general
    /// rule](PlacementRule::General) needs at least one cell touching a cell
    /// of the same player diagonally, while the [opening
    /// rule](PlacementRule::Opening) needs the player's starting cell to be covered.
    ///
    /// This only looks at the placement's cells and their neighbors.
    pub fn check_placement(
        &self,
        player: PlayerId,
        placement: &Placement,
        rule: PlacementRule,
    ) -> Result<(), IllegalPlacement> {
        let owned = Cell::Owned(player);
        let start = self.start_cell(player);
        let mut corner_contact = false;
        let mut covers_start = false;

        for pos in placement.cells() {
            let Position { x, y } = pos;
            if !self.is_playable(pos) {
                return Err(IllegalPlacement::OutOfBounds { x, y });
            }
            if self.cells[self.idx(pos)] != Cell::Empty {
                return Err(IllegalPlacement::Occupied { x, y });
            }
            // Neighbors of playable cells are at worst border cells, so no bounds checks.
            if pos
                .edge_neighbors()
                .iter()
                .any(|&n| self.cells[self.idx(n)] == owned)
            {
                return Err(IllegalPlacement::EdgeContact { x, y });
            }
            corner_contact |= pos
                .corner_neighbors()
                .iter()
                .any(|&n| self.cells[self.idx(n)] == owned);
            covers_start |= pos == start;
        }

        match rule {
            PlacementRule::General if !corner_contact => Err(IllegalPlacement::NoCornerContact),
            PlacementRule::Opening if !covers_start => Err(IllegalPlacement::MissesStartCell),
            _ => Ok(()),
        }
    }

    pub fn can_place(&self, player: PlayerId, placement: &Placement) -> bool {
        self.check_placement(player, placement, PlacementRule::General)
            .is_ok()
    }

    pub fn can_place_first_move(&self, player: PlayerId, placement: &Placement) -> bool {
        self.check_placement(player, placement, PlacementRule::Opening)
            .is_ok()
    }

    /// Marks the cells of `placement` as owned by `player`.
    ///
    /// The placement must have been checked with [`Self::check_placement()`] before.
    pub fn place(&mut self, player: PlayerId, placement: &Placement) {
        for pos in placement.cells() {
            let idx = self.idx(pos);
            debug_assert!(self.is_playable(pos) && self.cells[idx] == Cell::Empty);
            self.cells[idx] = Cell::Owned(player);
        }
    }

    /// Undoes [`Self::place()`].
    ///
    /// Must be called with the most recently placed placement, since
    /// placements are rolled back in LIFO order.
    pub fn remove(&mut self, player: PlayerId, placement: &Placement) {
        for pos in placement.cells() {
            let idx = self.idx(pos);
            debug_assert_eq!(self.cells[idx], Cell::Owned(player));
            self.cells[idx] = Cell::Empty;
        }
    }

    /// Number of empty cells where `player` could still start a piece.
    ///
    /// These are the cells touching a cell of `player` at a corner but not
    /// at a side. Before the first piece, this is the starting cell if it's empty.
    pub fn mobility(&self, player: PlayerId) -> u32 {
        if !self.has_cells(player) {
            return u32::from(self.get(self.start_cell(player)) == Cell::Empty);
        }
        let owned = Cell::Owned(player);
        let mut count = 0;
        for y in 1..=self.height {
            for x in 1..=self.width {
                let pos = Position::new(x, y);
                if self.cells[self.idx(pos)] != Cell::Empty {
                    continue;
                }
                let touches = |neighbors: [Position; 4]| {
                    neighbors.iter().any(|&n| self.cells[self.idx(n)] == owned)
                };
                if touches(pos.corner_neighbors()) && !touches(pos.edge_neighbors()) {
                    count += 1;
                }
            }
        }
        count
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.idx(pos);
        self.cells[idx] = cell;
    }

    fn idx(&self, pos: Position) -> usize {
        pos.y as usize * (self.width as usize + 2) + pos.x as usize
    }
}

/// An empty standard board.
impl Default for Grid {
    fn default() -> Self {
        Grid::new(BOARD_SIZE, BOARD_SIZE)
    }
}
