use quickcheck::{Arbitrary, Gen};

use crate::{Cell, Grid, Orientation, Piece, Placement, PlayerId, Position, ShapeKind};

/// A small grid of random size where every cell is randomly empty or owned.
#[derive(Clone, Debug)]
pub struct GridInput {
    pub grid: Grid,
}

impl Arbitrary for GridInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = (u8::arbitrary(g) % 8 + 1) as i8;
        let height = (u8::arbitrary(g) % 8 + 1) as i8;
        GridInput {
            grid: random_grid(g, width, height, 3),
        }
    }
}

/// A placement that may or may not be legal, on a sparsely filled grid.
#[derive(Clone, Debug)]
pub struct PlacementInput {
    pub grid: Grid,
    pub player: PlayerId,
    pub placement: Placement,
}

impl Arbitrary for PlacementInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = (u8::arbitrary(g) % 6 + 5) as i8;
        let height = (u8::arbitrary(g) % 6 + 5) as i8;
        // Mostly empty cells, so that some placements are legal
        let grid = random_grid(g, width, height, 8);
        // Anchors may stick out of the playable area
        let x = (u8::arbitrary(g) % (width as u8 + 1)) as i8;
        let y = (u8::arbitrary(g) % (height as u8 + 1)) as i8;
        PlacementInput {
            grid,
            player: PlayerId::arbitrary(g),
            placement: Placement::new(Piece::arbitrary(g), Position::new(x, y)),
        }
    }
}

// One in `sparsity` cells is owned by player 1, and as many by player 2.
fn random_grid(g: &mut Gen, width: i8, height: i8, sparsity: u8) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 1..=height {
        for x in 1..=width {
            let cell = match u8::arbitrary(g) % sparsity {
                0 => Cell::Owned(PlayerId::One),
                1 => Cell::Owned(PlayerId::Two),
                _ => Cell::Empty,
            };
            grid.set(Position::new(x, y), cell);
        }
    }
    grid
}

impl Arbitrary for PlayerId {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&PlayerId::BOTH).unwrap()
    }
}

/// Never the pass sentinel.
impl Arbitrary for ShapeKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ShapeKind::ALL).unwrap()
    }
}

impl Arbitrary for Orientation {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Orientation::ALL).unwrap()
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        Piece::new_unchecked(ShapeKind::arbitrary(g), Orientation::arbitrary(g))
    }
}
