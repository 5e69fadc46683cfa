use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Places mines on distinct cells chosen uniformly at random, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn with_random_seed() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let total_cells = config.total_cells();

        let mines = if config.mines > total_cells {
            log::warn!(
                "Board already full, generated anyway, requested {} but only fits {}",
                config.mines,
                total_cells
            );
            total_cells
        } else {
            config.mines
        };

        let width = usize::from(config.width());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        // sampling without replacement, so no cell is picked twice
        let picks = index::sample(&mut rng, total_cells as usize, mines as usize);
        let coords = picks.iter().filter_map(|i| {
            let row = Coord::try_from(i / width).ok()?;
            let col = Coord::try_from(i % width).ok()?;
            Some((row, col))
        });

        let layout = MineLayout::with_mines(config.size, coords);

        // double check mine count
        if layout.mine_count() != mines {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                mines
            );
        }
        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.height(),
            config.width(),
            layout.mine_count(),
            self.seed
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(height: Coord, width: Coord, mines: CellCount, seed: u64) -> MineLayout {
        let config = GameConfig::new(height, width, mines).unwrap();
        RandomMineGenerator::new(seed).generate(config)
    }

    /// Recounts mines around a safe cell straight from the grid.
    fn expected_count(layout: &MineLayout, (row, col): Coord2) -> u8 {
        let (height, width) = layout.size();
        let mut count = 0;
        if row > 0 && layout.contains_mine((row - 1, col)) {
            count += 1;
        }
        if row + 1 < height && layout.contains_mine((row + 1, col)) {
            count += 1;
        }
        if col > 0 && layout.contains_mine((row, col - 1)) {
            count += 1;
        }
        if col + 1 < width && layout.contains_mine((row, col + 1)) {
            count += 1;
        }
        count
    }

    #[test]
    fn places_exactly_the_requested_mines_with_exact_counts() {
        let shapes: [(Coord, Coord, CellCount); 7] = [
            (1, 1, 0),
            (1, 1, 1),
            (3, 3, 1),
            (4, 7, 9),
            (10, 10, 10),
            (5, 2, 10),
            (16, 30, 99),
        ];

        for (height, width, mines) in shapes {
            for seed in 0..25 {
                let layout = generate(height, width, mines, seed);

                assert_eq!(layout.size(), (height, width));
                assert_eq!(layout.mine_count(), mines);
                let placed = layout.kinds().iter().filter(|kind| kind.is_mine()).count();
                assert_eq!(placed as CellCount, mines);

                for row in 0..height {
                    for col in 0..width {
                        if let CellKind::Clear(count) = layout[(row, col)] {
                            assert_eq!(count, expected_count(&layout, (row, col)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        assert_eq!(generate(9, 9, 10, 42), generate(9, 9, 10, 42));
    }

    #[test]
    fn different_seeds_move_the_mines() {
        let first = generate(16, 16, 40, 1);
        let differs = (2..10).any(|seed| generate(16, 16, 40, seed) != first);

        assert!(differs);
    }

    #[test]
    fn full_board_is_all_mines() {
        let layout = generate(3, 4, 12, 7);

        assert!(layout.kinds().iter().all(|kind| kind.is_mine()));
        assert_eq!(layout.safe_cell_count(), 0);
    }

    #[test]
    fn overfull_unchecked_config_is_clamped() {
        let config = GameConfig::new_unchecked((2, 2), 9);
        let layout = RandomMineGenerator::new(3).generate(config);

        assert_eq!(layout.mine_count(), 4);
    }
}
