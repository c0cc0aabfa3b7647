use blokus::{
    Footprint, Grid, Inventories, Move, Piece, PlayerId, Position, SearchError, Strategy,
};
use tracing::{debug, warn};

/// The state of one player across the turns of a game.
///
/// Besides the turn counter, this keeps both inventories up to date. Our own
/// shapes are marked as used when we play them. The opponent's shapes are
/// derived by comparing each new board with the previous one.
#[derive(Clone, Debug)]
pub struct Session {
    me: PlayerId,
    turn: u32,
    inventories: Inventories,
    /// The board as it was after our last move.
    last_seen: Grid,
}

impl Session {
    pub fn new(me: PlayerId) -> Self {
        Self {
            me,
            turn: 0,
            inventories: Inventories::new(),
            last_seen: Grid::default(),
        }
    }

    pub fn me(&self) -> PlayerId {
        self.me
    }

    /// The number of moves we made so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn inventories(&self) -> &Inventories {
        &self.inventories
    }

    /// Records the piece the opponent put down since our last move, if any.
    pub fn observe(&mut self, grid: &Grid) {
        let opponent = self.me.opponent();
        if grid.width() != self.last_seen.width() || grid.height() != self.last_seen.height() {
            self.last_seen = Grid::new(grid.width(), grid.height());
        }
        let new_cells: Vec<Position> = grid
            .cells_owned_by(opponent)
            .filter(|&pos| !self.last_seen.owns(opponent, pos))
            .collect();
        if new_cells.is_empty() {
            debug!("The opponent has not placed anything new");
            return;
        }

        let remaining = self.inventories.remaining(opponent);
        let piece = Footprint::from_cells(new_cells.iter().map(|pos| (pos.x, pos.y)))
            .and_then(|footprint| Piece::identify(footprint, remaining));
        match piece {
            Some(piece) => {
                debug!("The opponent played {:?}", piece.kind());
                if let Err(err) = self.inventories.use_shape(opponent, piece.kind()) {
                    warn!("Could not record the opponent's piece: {}", err);
                }
            }
            None => warn!(
                "Could not identify the {} new cells of the opponent as one of their shapes",
                new_cells.len()
            ),
        }
    }

    /// Decides on our move for `grid` and records it.
    pub fn play_turn<S: Strategy + ?Sized>(
        &mut self,
        mut grid: Grid,
        strategy: &mut S,
    ) -> Result<Move, SearchError> {
        self.observe(&grid);
        let mv = strategy.select_move(&mut grid, &mut self.inventories, self.me, self.turn)?;
        if let Move::Place(placement) = mv {
            if let Err(err) = self.inventories.use_shape(self.me, placement.piece.kind()) {
                warn!("Could not record our own piece: {}", err);
            }
            grid.place(self.me, &placement);
        }
        self.turn += 1;
        self.last_seen = grid;
        Ok(mv)
    }
}
