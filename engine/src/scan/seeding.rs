use serde::{Deserialize, Serialize};

use crate::grid::{Direction, Position};
use super::registry::ScannerRegistry;

/// Which start cells are seeded for horizontal and vertical lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedingMode {
    /// Every cell from which a full run fits inside the grid.
    #[default]
    Full,
    /// Only column 0 for horizontal lines and row 0 for vertical lines.
    /// Runs that start away from the edge are never found.
    EdgeOnly,
}

impl<M> ScannerRegistry<'_, M>
where
    M: PartialEq + Clone,
{
    /// Seeds one scanner per start cell and direction where `run_length` cells fit
    /// without leaving the grid. Returns how many scanners were created.
    pub fn seed_all(&mut self, mode: SeedingMode) -> usize {
        let run_length = self.run_length();
        if run_length == 0 {
            return 0;
        }
        let rows = self.grid().rows();
        let cols = self.grid().cols();
        let fits_horizontally = run_length <= cols;
        let fits_vertically = run_length <= rows;
        let mut seeded = 0;

        if fits_horizontally {
            for row in 0..rows {
                let last_col = match mode {
                    SeedingMode::Full => cols - run_length,
                    SeedingMode::EdgeOnly => 0,
                };
                for col in 0..=last_col {
                    seeded += self.seed(Position::new(row, col), Direction::Horizontal) as usize;
                }
            }
        }

        if fits_vertically {
            let last_row = match mode {
                SeedingMode::Full => rows - run_length,
                SeedingMode::EdgeOnly => 0,
            };
            for row in 0..=last_row {
                for col in 0..cols {
                    seeded += self.seed(Position::new(row, col), Direction::Vertical) as usize;
                }
            }
        }

        if fits_horizontally && fits_vertically {
            for row in 0..=rows - run_length {
                for col in 0..=cols - run_length {
                    seeded += self.seed(Position::new(row, col), Direction::DescendingDiagonal) as usize;
                }
            }

            for row in (run_length - 1..rows).rev() {
                for col in 0..=cols - run_length {
                    seeded += self.seed(Position::new(row, col), Direction::AscendingDiagonal) as usize;
                }
            }
        }

        seeded
    }
}
