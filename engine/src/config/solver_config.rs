use serde::{Deserialize, Serialize};

use crate::grid::{Grid, GridError};
use crate::scan::SeedingMode;
use super::Validate;

/// Board and win condition for one solver run.
///
/// Cells are strings; `null`, blank, `_` and `.` mean empty.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SolverConfig {
    pub board: Vec<Vec<Option<String>>>,
    pub run_length: usize,
    #[serde(default)]
    pub seeding: SeedingMode,
}

impl SolverConfig {
    pub fn grid(&self) -> Result<Grid<String>, GridError> {
        Grid::from_tokens(&self.board)
    }
}

impl Validate for SolverConfig {
    fn validate(&self) -> Result<(), String> {
        if self.run_length < 1 {
            return Err("run_length must be at least 1".to_string());
        }
        self.grid().map(|_| ()).map_err(|e| format!("Invalid board: {}", e))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let cell = |mark: &str| Some(mark.to_string());
        Self {
            board: vec![
                vec![cell("x"), None, cell("x")],
                vec![cell("o"), cell("x"), cell("o")],
                vec![cell("x"), cell("o"), cell("o")],
            ],
            run_length: 3,
            seeding: SeedingMode::Full,
        }
    }
}
