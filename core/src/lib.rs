#![no_std]

extern crate alloc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use controller::*;
pub use error::*;
pub use generator::*;
pub use level::*;
pub use manual::*;
pub use round::*;
pub use schedule::*;
pub use tile::*;
pub use types::*;

mod controller;
mod error;
mod generator;
mod level;
mod manual;
mod round;
mod schedule;
mod tile;
mod types;

/// Board contents and target shape of one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundLayout {
    board: Array2<Shape>,
    target: Shape,
    target_count: TileCount,
}

impl RoundLayout {
    /// Builds a layout from row-major tiles, rejecting boards of the wrong size or with uneven shape counts.
    pub fn from_tiles(tiles: &[Shape], target: Shape) -> Result<Self> {
        let rows = usize::from(GRID_SIZE.0);
        let cols = usize::from(GRID_SIZE.1);
        if tiles.len() != rows * cols {
            return Err(GameError::InvalidBoardShape);
        }

        for shape in Shape::ALL {
            let count = tiles.iter().filter(|&&tile| tile == shape).count();
            if count != usize::from(COPIES_PER_SHAPE) {
                return Err(GameError::UnbalancedBoard);
            }
        }

        let board = Array2::from_shape_vec((rows, cols), tiles.to_vec())
            .map_err(|_| GameError::InvalidBoardShape)?;
        let target_count = board
            .iter()
            .filter(|&&tile| tile == target)
            .count()
            .try_into()
            .unwrap();

        Ok(Self {
            board,
            target,
            target_count,
        })
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if usize::from(index) < self.board.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidTileIndex)
        }
    }

    pub fn size(&self) -> (usize, usize) {
        self.board.dim()
    }

    pub fn tiles(&self) -> &[Shape] {
        self.board.as_slice().expect("layout should be standard")
    }

    pub fn shape_at(&self, index: TileIndex) -> Shape {
        self.board[index.to_nd_index()]
    }

    pub fn target(&self) -> Shape {
        self.target
    }

    pub fn target_count(&self) -> TileCount {
        self.target_count
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Target found, the tile stays open.
    Solved,
    /// Wrong shape, the tile is shown briefly.
    Mistake,
    /// Last target found.
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Solved => true,
            Mistake => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn striped() -> Vec<Shape> {
        Shape::ALL
            .iter()
            .flat_map(|&shape| core::iter::repeat_n(shape, 5))
            .collect()
    }

    #[test]
    fn layout_counts_target_tiles() {
        let layout = RoundLayout::from_tiles(&striped(), Shape::Star).unwrap();

        assert_eq!(layout.target_count(), 5);
        assert_eq!(layout.shape_at(0), Shape::Circle);
        assert_eq!(layout.shape_at(24), Shape::Star);
        assert_eq!(layout.size(), (5, 5));
    }

    #[test]
    fn layout_rejects_wrong_size() {
        let mut tiles = striped();
        tiles.pop();

        assert_eq!(
            RoundLayout::from_tiles(&tiles, Shape::Star),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn layout_rejects_unbalanced_board() {
        let mut tiles = striped();
        tiles[0] = Shape::Star;

        assert_eq!(
            RoundLayout::from_tiles(&tiles, Shape::Star),
            Err(GameError::UnbalancedBoard)
        );
    }

    #[test]
    fn validate_index_bounds() {
        let layout = RoundLayout::from_tiles(&striped(), Shape::Circle).unwrap();

        assert_eq!(layout.validate_index(24), Ok(24));
        assert_eq!(layout.validate_index(25), Err(GameError::InvalidTileIndex));
    }
}
