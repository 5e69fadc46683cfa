use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: Coord, width: Coord },
    #[error("Too many mines, requested {requested} but only {capacity} cells fit")]
    TooManyMines { requested: CellCount, capacity: CellCount },
    #[error("Coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: Coord, col: Coord },
}

impl GameError {
    /// Whether this error was raised while building a board, as opposed to while playing on one.
    pub const fn is_configuration(self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::TooManyMines { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
