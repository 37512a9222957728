use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-tile visibility state stored by the round.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TileFlags: u8 {
        const REVEALED = 1;
        const SOLVED   = 1 << 1;
    }
}

impl TileFlags {
    pub const fn is_revealed(self) -> bool {
        self.contains(Self::REVEALED)
    }

    pub const fn is_solved(self) -> bool {
        self.contains(Self::SOLVED)
    }
}

/// How a tile should be presented to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Hidden,
    Revealed,
    /// Revealed non-target tile outside of the preview.
    Wrong,
    /// Solved target tile, stays open for the rest of the round.
    Correct,
}

impl TileView {
    pub const fn shows_shape(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
