use serde::{Deserialize, Serialize};

/// Ground truth for a single cell, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell with the number of mines among its 4-directional neighbors.
    Clear(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Clear(0))
    }

    /// Records one more adjacent mine, mines themselves carry no count.
    pub(crate) fn notify_mine(&mut self) {
        if let Self::Clear(count) = self {
            *count += 1;
        }
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Clear(0)
    }
}

/// Canonical player-visible state stored by the board engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Revealed(CellKind),
}

impl Visibility {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed_mine(self) -> bool {
        matches!(self, Self::Revealed(CellKind::Mine))
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}
