use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid tile index")]
    InvalidTileIndex,
    #[error("Board shape does not match the grid size")]
    InvalidBoardShape,
    #[error("Board does not hold the same number of tiles for every shape")]
    UnbalancedBoard,
    #[error("Unknown level name")]
    UnknownLevel,
}

pub type Result<T> = core::result::Result<T, GameError>;
