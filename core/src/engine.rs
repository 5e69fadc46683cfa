use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game: the mine layout plus what the player has uncovered so far.
///
/// The engine never refuses a reveal because the game is over, callers are expected to check [`Board::status`] after
/// every [`Board::reveal`] and stop once it is finished.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    mine_layout: MineLayout,
    visibility: Array2<Visibility>,
    revealed_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Generates a `height` by `width` board with `mines` randomly placed mines.
    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(height, width, mines)?;
        Ok(Self::from_config(config, RandomMineGenerator::with_random_seed()))
    }

    /// Builds a board from an already validated `config`.
    pub fn from_config(config: GameConfig, generator: impl MineGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            visibility: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            triggered_mine: None,
        }
    }

    /// Derived from the current grids: any revealed mine loses, otherwise uncovering every safe cell wins.
    pub fn status(&self) -> GameStatus {
        if self.triggered_mine.is_some() {
            GameStatus::Lost
        } else if self.revealed_count == self.mine_layout.safe_cell_count() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// Number of safe cells uncovered so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The first mine the player uncovered, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    pub fn layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn visibility(&self) -> &Array2<Visibility> {
        &self.visibility
    }

    pub fn cell_at(&self, coords: Coord2) -> Visibility {
        self.visibility[coords.to_nd_index()]
    }

    /// Uncovers the cell at `coords`, flooding outwards when it has no adjacent mines.
    ///
    /// Out of bounds coordinates leave the board untouched. Revealing a cell that is already revealed is a no-op.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if !self.cell_at(coords).is_hidden() {
            log::trace!("{:?} already revealed", coords);
            return Ok(RevealOutcome::NoChange);
        }

        let kind = self.mine_layout[coords];
        self.visibility[coords.to_nd_index()] = Visibility::Revealed(kind);

        let outcome = match kind {
            CellKind::Mine => {
                log::debug!("{:?} was a mine", coords);
                if self.triggered_mine.is_none() {
                    self.triggered_mine = Some(coords);
                }
                RevealOutcome::HitMine
            }
            CellKind::Clear(count) => {
                self.revealed_count += 1;
                if count == 0 {
                    self.flood_fill(coords);
                }
                if self.status() == GameStatus::Won {
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
        };
        log::trace!("revealed {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }

    /// Breadth-first expansion from a revealed zero cell. Neighbors are queued in up, down, left, right order and each
    /// coordinate is queued at most once.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit = VecDeque::new();
        let mut opened: CellCount = 0;

        self.enqueue_neighbors(origin, &mut visited, &mut to_visit);

        while let Some(visit_coords) = to_visit.pop_front() {
            let CellKind::Clear(count) = self.mine_layout[visit_coords] else {
                continue;
            };
            if !self.cell_at(visit_coords).is_hidden() {
                continue;
            }

            self.visibility[visit_coords.to_nd_index()] =
                Visibility::Revealed(CellKind::Clear(count));
            self.revealed_count += 1;
            opened += 1;

            if count == 0 {
                self.enqueue_neighbors(visit_coords, &mut visited, &mut to_visit);
            }
        }

        log::debug!("flood fill from {:?} opened {} cells", origin, opened);
    }

    fn enqueue_neighbors(
        &self,
        coords: Coord2,
        visited: &mut BTreeSet<Coord2>,
        to_visit: &mut VecDeque<Coord2>,
    ) {
        for pos in self.mine_layout.iter_neighbors(coords) {
            let eligible =
                self.cell_at(pos).is_hidden() && !self.mine_layout.contains_mine(pos);
            if eligible && visited.insert(pos) {
                to_visit.push_back(pos);
            }
        }
    }
}
