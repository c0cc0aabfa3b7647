use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::{
    legal_placements, opening_move, visualize_grid, Grid, Inventories, Move, PlacementRule, PlayerId,
    SearchConfig, SearchError, Searcher,
};

/// Picks the move for one turn.
///
/// `turn` counts the decisions of `me` in this session, starting at 0.
/// Implementations may mutate the grid and the inventories while deciding,
/// but must leave them as they found them.
pub trait Strategy {
    fn select_move(
        &mut self,
        grid: &mut Grid,
        inventories: &mut Inventories,
        me: PlayerId,
        turn: u32,
    ) -> Result<Move, SearchError>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn select_move(
        &mut self,
        grid: &mut Grid,
        inventories: &mut Inventories,
        me: PlayerId,
        turn: u32,
    ) -> Result<Move, SearchError> {
        (**self).select_move(grid, inventories, me, turn)
    }
}

/// The opening heuristic on turn 0, then alpha-beta search.
#[derive(Clone, Debug, Default)]
pub struct MinimaxStrategy {
    pub config: SearchConfig,
}

impl MinimaxStrategy {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(
        &mut self,
        grid: &mut Grid,
        inventories: &mut Inventories,
        me: PlayerId,
        turn: u32,
    ) -> Result<Move, SearchError> {
        trace!("Deciding on\n{}", visualize_grid(grid));
        if turn == 0 {
            return opening_move(grid, inventories.remaining(me), me).map(Move::Place);
        }
        let mv = Searcher::new(grid, inventories, me).best_move(&self.config);
        info!("Turn {}: playing {}", turn, mv);
        Ok(mv)
    }
}

/// Plays a uniformly random legal placement.
#[derive(Clone, Debug)]
pub struct RandomStrategy<R> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn select_move(
        &mut self,
        grid: &mut Grid,
        inventories: &mut Inventories,
        me: PlayerId,
        turn: u32,
    ) -> Result<Move, SearchError> {
        let rule = if turn == 0 {
            PlacementRule::Opening
        } else {
            PlacementRule::General
        };
        let placements = legal_placements(grid, inventories.remaining(me), me, rule);
        debug!("Choosing among {} legal placements", placements.len());
        match placements.choose(&mut self.rng) {
            Some(&placement) => Ok(Move::Place(placement)),
            None if turn == 0 => Err(SearchError::NoOpeningMoveFound { kind: None }),
            None => Ok(Move::Pass),
        }
    }
}

/// Plays a fixed list of moves, one per turn, and defers to another
/// strategy when the list runs out or its move isn't legal.
#[derive(Clone, Debug)]
pub struct ScriptedStrategy<S> {
    script: Vec<Move>,
    fallback: S,
}

impl<S: Strategy> ScriptedStrategy<S> {
    pub fn new(script: Vec<Move>, fallback: S) -> Self {
        Self { script, fallback }
    }
}

impl<S: Strategy> Strategy for ScriptedStrategy<S> {
    fn select_move(
        &mut self,
        grid: &mut Grid,
        inventories: &mut Inventories,
        me: PlayerId,
        turn: u32,
    ) -> Result<Move, SearchError> {
        if let Some(Move::Place(placement)) = self.script.get(turn as usize) {
            let rule = if turn == 0 {
                PlacementRule::Opening
            } else {
                PlacementRule::General
            };
            let available = inventories.remaining(me).contains(placement.piece.kind());
            match grid.check_placement(me, placement, rule) {
                Ok(()) if available => return Ok(Move::Place(*placement)),
                Ok(()) => debug!("Scripted move {} uses a shape that is gone", Move::Place(*placement)),
                Err(err) => debug!("Scripted move {} is illegal: {}", Move::Place(*placement), err),
            }
        }
        self.fallback.select_move(grid, inventories, me, turn)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{mv, Budget, Inventory, ShapeKind, ShapeSet};

    #[test]
    fn first_move_on_the_standard_board_is_a_legal_opening() {
        let mut grid = Grid::default();
        let mut inventories = Inventories::new();
        let mv = MinimaxStrategy::default()
            .select_move(&mut grid, &mut inventories, PlayerId::One, 0)
            .unwrap();
        let token = mv.encode();
        assert_eq!(token.len(), 4);
        let decoded: Move = token.parse().unwrap();
        let placement = decoded.placement().unwrap();
        assert!(grid.can_place_first_move(PlayerId::One, placement));
    }

    #[test]
    fn minimax_answers_after_the_opening() {
        let mut grid = Grid::default();
        let mut inventories = Inventories::new();
        let opening = *mv!("U043").placement().unwrap();
        grid.place(PlayerId::One, &opening);
        inventories.use_shape(PlayerId::One, ShapeKind::X5).unwrap();
        let before = (grid.clone(), inventories.clone());

        let mut strategy = MinimaxStrategy::new(SearchConfig {
            depth: 1,
            budget: Budget::Candidates(200),
        });
        let mv = strategy
            .select_move(&mut grid, &mut inventories, PlayerId::One, 1)
            .unwrap();
        let placement = mv.placement().unwrap();
        assert!(grid.can_place(PlayerId::One, placement));
        assert_eq!((grid, inventories), before);
    }

    #[test]
    fn random_strategy_is_reproducible_and_legal() {
        let grid = Grid::default();
        let inventories = Inventories::new();
        let mut moves = Vec::new();
        for _ in 0..2 {
            let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(7));
            let mv = strategy
                .select_move(&mut grid.clone(), &mut inventories.clone(), PlayerId::Two, 0)
                .unwrap();
            assert!(grid.can_place_first_move(PlayerId::Two, mv.placement().unwrap()));
            moves.push(mv);
        }
        assert_eq!(moves[0], moves[1]);
    }

    #[test]
    fn random_strategy_passes_without_shapes() {
        let mut grid = Grid::default();
        let mut inventories = Inventories::from_inventories(
            Inventory::with_shapes(ShapeSet::new()),
            Inventory::new(),
        );
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(0));
        assert_eq!(
            strategy.select_move(&mut grid, &mut inventories, PlayerId::One, 3),
            Ok(Move::Pass)
        );
        assert_eq!(
            strategy.select_move(&mut grid, &mut inventories, PlayerId::One, 0),
            Err(SearchError::NoOpeningMoveFound { kind: None })
        );
    }

    #[test]
    fn scripted_moves_are_played_while_legal() {
        let mut grid = Grid::default();
        let mut inventories = Inventories::new();
        let mut strategy = ScriptedStrategy::new(
            vec![mv!("H044"), mv!("H044")],
            MinimaxStrategy::new(SearchConfig {
                depth: 0,
                budget: Budget::Candidates(1),
            }),
        );
        let first = strategy
            .select_move(&mut grid, &mut inventories, PlayerId::One, 0)
            .unwrap();
        assert_eq!(first, mv!("H044"));
        grid.place(PlayerId::One, first.placement().unwrap());
        inventories.use_shape(PlayerId::One, ShapeKind::O4).unwrap();

        // The O4 is gone, so the fallback decides
        let second = strategy
            .select_move(&mut grid, &mut inventories, PlayerId::One, 1)
            .unwrap();
        assert_ne!(second, mv!("H044"));
        assert!(grid.can_place(PlayerId::One, second.placement().unwrap()));
    }
}
