use core::fmt;
use serde::{Deserialize, Serialize};

/// Linear, row-major position of a tile on the board.
pub type TileIndex = u8;

/// Count type used for tile counts, score and target count.
pub type TileCount = u8;

/// Board dimensions as `(rows, cols)`.
pub const GRID_SIZE: (u8, u8) = (5, 5);

/// Total number of tiles on a board.
pub const TILE_COUNT: TileCount = GRID_SIZE.0 * GRID_SIZE.1;

/// How many tiles of each shape a board carries.
pub const COPIES_PER_SHAPE: TileCount = 5;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for TileIndex {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        let cols = GRID_SIZE.1;
        [(self / cols).into(), (self % cols).into()]
    }
}

/// One symbol of the hidden-shape alphabet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Triangle,
    Square,
    Diamond,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Triangle,
        Shape::Square,
        Shape::Diamond,
        Shape::Star,
    ];

    pub const fn glyph(self) -> &'static str {
        use Shape::*;
        match self {
            Circle => "⬤",
            Triangle => "▲",
            Square => "■",
            Diamond => "◆",
            Star => "★",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!(0u8.to_nd_index(), [0, 0]);
        assert_eq!(4u8.to_nd_index(), [0, 4]);
        assert_eq!(5u8.to_nd_index(), [1, 0]);
        assert_eq!(24u8.to_nd_index(), [4, 4]);
    }

    #[test]
    fn alphabet_fills_the_board_exactly() {
        assert_eq!(
            Shape::ALL.len() * usize::from(COPIES_PER_SHAPE),
            usize::from(TILE_COUNT)
        );
    }
}
