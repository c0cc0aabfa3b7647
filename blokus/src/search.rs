use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    Grid, Inventories, InventoryError, Move, Piece, PlacementRule, Placement, PlayerId, Position,
    SearchError, ShapeSet,
};

/// How many root candidates a search may probe before settling for the best one so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    #[default]
    Unbounded,
    /// Stop after probing this many candidates, legal or not, once there is
    /// at least one legal candidate.
    Candidates(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of plies searched below the root move.
    pub depth: u32,
    pub budget: Budget,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            budget: Budget::Unbounded,
        }
    }
}

/// All placements of the `remaining` shapes whose bounding box lies inside
/// a `width` x `height` playable area, legal or not.
///
/// The order is: shapes in catalog order, then orientations, then anchor y,
/// then anchor x. Search results depend on this order, since ties are
/// broken in favor of the first candidate.
pub fn candidates(remaining: ShapeSet, width: i8, height: i8) -> impl Iterator<Item = Placement> {
    remaining.into_iter().flat_map(move |kind| {
        kind.orientations().into_iter().flat_map(move |orientation| {
            let piece = Piece::new_unchecked(kind, orientation);
            let footprint = piece.footprint();
            let max_x = width - footprint.width() + 1;
            let max_y = height - footprint.height() + 1;
            (1..=max_y).flat_map(move |y| {
                (1..=max_x).map(move |x| Placement::new(piece, Position::new(x, y)))
            })
        })
    })
}

/// The candidates of `remaining` that `player` may place under `rule`, in candidate order.
pub fn legal_placements(
    grid: &Grid,
    remaining: ShapeSet,
    player: PlayerId,
    rule: PlacementRule,
) -> Vec<Placement> {
    candidates(remaining, grid.width(), grid.height())
        .filter(|placement| grid.check_placement(player, placement, rule).is_ok())
        .collect()
}

/// Static evaluation from the point of view of `me`.
///
/// A player's score is their [mobility](Grid::mobility) plus the area of
/// their used shapes.
pub fn evaluate(grid: &Grid, inventories: &Inventories, me: PlayerId) -> i32 {
    let score = |player| grid.mobility(player) as i32 + inventories.used_area(player) as i32;
    score(me) - score(me.opponent())
}

/// Finds the opening placement for `me`.
///
/// Uses the largest remaining shape (the last one in catalog order among
/// equally large ones), and tries every orientation and every anchor that
/// could make it cover the starting cell. The first one that is legal wins.
pub fn opening_move(grid: &Grid, remaining: ShapeSet, me: PlayerId) -> Result<Placement, SearchError> {
    let kind = remaining
        .into_iter()
        .max_by_key(|kind| kind.area())
        .ok_or(SearchError::NoOpeningMoveFound { kind: None })?;
    let start = grid.start_cell(me);
    for orientation in kind.orientations() {
        let piece = Piece::new_unchecked(kind, orientation);
        let footprint = piece.footprint();
        for y in (start.y - footprint.height() + 1)..=start.y {
            for x in (start.x - footprint.width() + 1)..=start.x {
                let placement = Placement::new(piece, Position::new(x, y));
                if grid.can_place_first_move(me, &placement) {
                    debug!("Opening with {:?} at ({}, {})", kind, x, y);
                    return Ok(placement);
                }
            }
        }
    }
    Err(SearchError::NoOpeningMoveFound { kind: Some(kind) })
}

/// Minimax search with alpha-beta pruning, on a grid that is mutated in
/// place and restored after every explored placement.
///
/// The searcher borrows the grid and the inventories exclusively for one
/// decision. When it returns, both are in the state they were in before.
pub struct Searcher<'a> {
    grid: &'a mut Grid,
    inventories: &'a mut Inventories,
    me: PlayerId,
    pruning: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(grid: &'a mut Grid, inventories: &'a mut Inventories, me: PlayerId) -> Self {
        Self {
            grid,
            inventories,
            me,
            pruning: true,
        }
    }

    /// Plain minimax that explores every node. It returns the same scores
    /// and moves as the pruning search, only slower.
    pub fn without_pruning(grid: &'a mut Grid, inventories: &'a mut Inventories, me: PlayerId) -> Self {
        Self {
            pruning: false,
            ..Self::new(grid, inventories, me)
        }
    }

    pub fn evaluate(&self) -> i32 {
        evaluate(self.grid, self.inventories, self.me)
    }

    /// Returns the minimax score of the current position.
    ///
    /// `maximizing` is true when it's the turn of the searching player. A side
    /// without legal placements passes implicitly, and the node gets the static
    /// evaluation.
    pub fn search(&mut self, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        if depth == 0 {
            return self.evaluate();
        }
        let player = if maximizing { self.me } else { self.me.opponent() };
        let placements = legal_placements(
            self.grid,
            self.inventories.remaining(player),
            player,
            PlacementRule::General,
        );
        if placements.is_empty() {
            return self.evaluate();
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for placement in placements {
            let score = match self.with_placement(player, &placement, |searcher| {
                searcher.search(depth - 1, alpha, beta, !maximizing)
            }) {
                Ok(score) => score,
                Err(err) => {
                    warn!("Skipping candidate {:?}: {}", placement, err);
                    continue;
                }
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.pruning && beta <= alpha {
                break;
            }
        }
        best
    }

    /// Finds the best legal placement of the searching player, with its score.
    ///
    /// Returns `None` if there is no legal placement.
    pub fn best_placement(&mut self, config: &SearchConfig) -> Option<(Placement, i32)> {
        let remaining = self.inventories.remaining(self.me);
        let mut best: Option<(Placement, i32)> = None;
        let mut probed: u64 = 0;

        for placement in candidates(remaining, self.grid.width(), self.grid.height()) {
            if let Budget::Candidates(limit) = config.budget {
                if probed >= limit && best.is_some() {
                    debug!("Budget exhausted after {} candidates", probed);
                    break;
                }
            }
            probed += 1;
            if !self.grid.can_place(self.me, &placement) {
                continue;
            }
            let alpha = match best {
                Some((_, score)) if self.pruning => score,
                _ => i32::MIN,
            };
            let me = self.me;
            let score = match self.with_placement(me, &placement, |searcher| {
                searcher.search(config.depth, alpha, i32::MAX, false)
            }) {
                Ok(score) => score,
                Err(err) => {
                    warn!("Skipping candidate {:?}: {}", placement, err);
                    continue;
                }
            };
            trace!("Candidate {} scored {}", Move::Place(placement), score);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                debug!("New best candidate {} with score {}", Move::Place(placement), score);
                best = Some((placement, score));
            }
        }
        best
    }

    /// Like [`Self::best_placement()`], but passes when there is nothing to place.
    pub fn best_move(&mut self, config: &SearchConfig) -> Move {
        match self.best_placement(config) {
            Some((placement, _)) => Move::Place(placement),
            None => Move::Pass,
        }
    }

    /// Puts down `placement` for `player`, runs `f` and rolls the placement back.
    ///
    /// Nothing is changed if the shape isn't available to `player`.
    pub fn with_placement<R>(
        &mut self,
        player: PlayerId,
        placement: &Placement,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, InventoryError> {
        let kind = placement.piece.kind();
        self.inventories.use_shape(player, kind)?;
        self.grid.place(player, placement);
        let result = f(self);
        self.grid.remove(player, placement);
        self.inventories.unuse_shape(player, kind)?;
        Ok(result)
    }
}
