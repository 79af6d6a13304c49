use crate::grid::{Direction, Position};

/// Raised when a scanner is constructed on an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStart {
    pub position: Position,
}

impl std::fmt::Display for EmptyStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scanner cannot start on empty cell ({}, {})",
            self.position.row, self.position.col
        )
    }
}

impl std::error::Error for EmptyStart {}

/// Directional cursor tracking one mark value. Never reads the grid itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner<M> {
    position: Position,
    direction: Direction,
    value: M,
}

impl<M> Scanner<M> {
    pub fn new(start: Position, start_value: Option<M>, direction: Direction) -> Result<Self, EmptyStart> {
        let value = start_value.ok_or(EmptyStart { position: start })?;
        Ok(Self {
            position: start,
            direction,
            value,
        })
    }

    /// Moves one step along the direction. Returns `false` if the step left the grid
    /// through the top or left edge, in which case the position is unchanged.
    pub fn advance(&mut self) -> bool {
        match self.position.step(self.direction) {
            Some(next) => {
                self.position = next;
                true
            }
            None => false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn value(&self) -> &M {
        &self.value
    }

    pub fn into_value(self) -> M {
        self.value
    }
}
