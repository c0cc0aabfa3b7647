use std::ops::{Index, IndexMut};

use crate::{InventoryError, PlayerId, ShapeKind, ShapeSet};

/// The shapes of a single player during one game.
///
/// Shapes move from `remaining` to `used` when played, and back when a
/// search rolls a placement back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    remaining: ShapeSet,
    /// In the order the shapes were used.
    used: Vec<ShapeKind>,
}

impl Inventory {
    /// A full inventory, as every player has at the start of a game.
    pub fn new() -> Self {
        Self::with_shapes(ShapeSet::all())
    }

    /// An inventory with only some of the shapes left and nothing recorded as used.
    pub fn with_shapes(remaining: ShapeSet) -> Self {
        Self {
            remaining,
            used: Vec::with_capacity(remaining.len() as usize),
        }
    }

    pub fn remaining(&self) -> ShapeSet {
        self.remaining
    }

    pub fn used(&self) -> &[ShapeKind] {
        &self.used
    }

    pub fn use_shape(&mut self, kind: ShapeKind) -> Result<(), InventoryError> {
        if !self.remaining.contains(kind) {
            return Err(InventoryError::ShapeNotAvailable(kind));
        }
        self.remaining = self.remaining.remove(kind);
        self.used.push(kind);
        Ok(())
    }

    pub fn unuse_shape(&mut self, kind: ShapeKind) -> Result<(), InventoryError> {
        // Searching from the back, because rollbacks almost always hit the last one
        let pos = self
            .used
            .iter()
            .rposition(|&used| used == kind)
            .ok_or(InventoryError::ShapeNotUsed(kind))?;
        self.used.remove(pos);
        self.remaining = self.remaining.insert(kind);
        Ok(())
    }

    /// Total number of cells of all used shapes.
    pub fn used_area(&self) -> u32 {
        self.used.iter().map(|kind| kind.area()).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// The inventories of both players, indexable by [`PlayerId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventories {
    players: [Inventory; 2],
}

impl Inventories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_inventories(one: Inventory, two: Inventory) -> Self {
        Self { players: [one, two] }
    }

    pub fn remaining(&self, player: PlayerId) -> ShapeSet {
        self[player].remaining()
    }

    pub fn use_shape(&mut self, player: PlayerId, kind: ShapeKind) -> Result<(), InventoryError> {
        self[player].use_shape(kind)
    }

    pub fn unuse_shape(&mut self, player: PlayerId, kind: ShapeKind) -> Result<(), InventoryError> {
        self[player].unuse_shape(kind)
    }

    pub fn used_area(&self, player: PlayerId) -> u32 {
        self[player].used_area()
    }
}

impl Index<PlayerId> for Inventories {
    type Output = Inventory;

    fn index(&self, player: PlayerId) -> &Inventory {
        &self.players[player.index()]
    }
}

impl IndexMut<PlayerId> for Inventories {
    fn index_mut(&mut self, player: PlayerId) -> &mut Inventory {
        &mut self.players[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn use_then_unuse_restores_inventory(played: Vec<ShapeKind>, kind: ShapeKind) -> bool {
            let mut inventory = Inventory::new();
            for k in played {
                // Duplicates are rejected, which is fine here
                let _ = inventory.use_shape(k);
            }
            let before = inventory.clone();
            match inventory.use_shape(kind) {
                Ok(()) => {
                    inventory.unuse_shape(kind).is_ok()
                        && inventory.remaining() == before.remaining()
                        && inventory.used() == before.used()
                }
                Err(err) => {
                    err == InventoryError::ShapeNotAvailable(kind) && inventory == before
                }
            }
        }
    }

    #[test]
    fn shapes_can_only_be_used_once() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.use_shape(ShapeKind::T5), Ok(()));
        assert_eq!(
            inventory.use_shape(ShapeKind::T5),
            Err(InventoryError::ShapeNotAvailable(ShapeKind::T5))
        );
        assert_eq!(
            inventory.unuse_shape(ShapeKind::Domino),
            Err(InventoryError::ShapeNotUsed(ShapeKind::Domino))
        );
        assert_eq!(inventory.remaining().len(), 20);
        assert!(!inventory.remaining().contains(ShapeKind::T5));
    }

    #[test]
    fn used_area_sums_cell_counts() {
        let mut inventories = Inventories::new();
        inventories.use_shape(PlayerId::Two, ShapeKind::Monomino).unwrap();
        inventories.use_shape(PlayerId::Two, ShapeKind::L4).unwrap();
        inventories.use_shape(PlayerId::Two, ShapeKind::Z5).unwrap();
        assert_eq!(inventories.used_area(PlayerId::Two), 10);
        assert_eq!(inventories.used_area(PlayerId::One), 0);
        assert_eq!(inventories[PlayerId::Two].used(), &[ShapeKind::Monomino, ShapeKind::L4, ShapeKind::Z5]);
    }

    #[test]
    fn pass_is_never_available() {
        let mut inventory = Inventory::new();
        assert_eq!(
            inventory.use_shape(ShapeKind::Pass),
            Err(InventoryError::ShapeNotAvailable(ShapeKind::Pass))
        );
        let mut single = Inventory::with_shapes(ShapeSet::from_iter([ShapeKind::I5]));
        single.use_shape(ShapeKind::I5).unwrap();
        assert!(single.is_exhausted());
    }
}
