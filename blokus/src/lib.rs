pub use codec::*;
pub use errors::*;
pub use grid::*;
pub use inventory::*;
pub use piece::*;
pub use protocol::*;
pub use search::*;
pub use shape_set::*;
pub use shapes::*;
pub use strategy::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod bitset;
mod codec;
mod errors;
mod grid;
mod inventory;
mod piece;
mod protocol;
mod search;
mod shape_set;
mod shapes;
mod strategy;
mod visualization;
