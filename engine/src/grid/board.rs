use super::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    NoRows,
    NoColumns,
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::NoRows => write!(f, "Grid must have at least one row"),
            GridError::NoColumns => write!(f, "Grid must have at least one column"),
            GridError::RaggedRow { row, expected, found } => write!(
                f,
                "Row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular board of optional marks, indexed by `(row, col)` from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<M> {
    cells: Vec<Vec<Option<M>>>,
    cols: usize,
}

impl<M> Grid<M> {
    pub fn from_rows(rows: Vec<Vec<Option<M>>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::NoRows);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::NoColumns);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }

        Ok(Self { cells: rows, cols })
    }

    pub fn empty(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::NoRows);
        }
        if cols == 0 {
            return Err(GridError::NoColumns);
        }
        let cells = (0..rows)
            .map(|_| (0..cols).map(|_| None).collect())
            .collect();
        Ok(Self { cells, cols })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols
    }

    /// `None` when `pos` lies outside the grid, otherwise the cell content.
    pub fn get(&self, pos: Position) -> Option<&Option<M>> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    pub fn cell(&self, pos: Position) -> Option<&M> {
        self.get(pos)?.as_ref()
    }

    pub fn set(&mut self, pos: Position, mark: Option<M>) -> Result<(), String> {
        if !self.contains(pos) {
            return Err(format!("Position ({}, {}) out of bounds", pos.row, pos.col));
        }
        self.cells[pos.row][pos.col] = mark;
        Ok(())
    }

    pub fn is_empty_board(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_none()))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<M>]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}

impl Grid<String> {
    /// Builds a grid from textual cells. Blank strings, `_` and `.` count as empty.
    pub fn from_tokens(rows: &[Vec<Option<String>>]) -> Result<Self, GridError> {
        let cells = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|token| match token.as_deref().map(str::trim) {
                        None | Some("") | Some("_") | Some(".") => None,
                        Some(mark) => Some(mark.to_string()),
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(cells)
    }
}
