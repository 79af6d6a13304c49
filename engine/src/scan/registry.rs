use std::collections::BTreeMap;

use crate::grid::{Direction, Grid, Position};
use super::scanner::Scanner;

/// Identifies a scanner by where it was seeded and which way it travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScannerKey {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl ScannerKey {
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            row: start.row,
            col: start.col,
            direction,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Why a scanner was dropped during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    OutOfBounds,
    EmptyCell,
    ValueMismatch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub out_of_bounds: usize,
    pub empty_cell: usize,
    pub value_mismatch: usize,
    pub alive: usize,
}

impl RoundReport {
    pub fn removed(&self) -> usize {
        self.out_of_bounds + self.empty_cell + self.value_mismatch
    }

    fn record(&mut self, removal: Removal) {
        match removal {
            Removal::OutOfBounds => self.out_of_bounds += 1,
            Removal::EmptyCell => self.empty_cell += 1,
            Removal::ValueMismatch => self.value_mismatch += 1,
        }
    }
}

/// Owns every live scanner for a single win check over a borrowed grid.
///
/// Every scanner held here sits on a cell whose mark equals its tracked value;
/// `advance_round` re-establishes that after each step by dropping the ones that don't.
#[derive(Debug)]
pub struct ScannerRegistry<'a, M> {
    grid: &'a Grid<M>,
    run_length: usize,
    scanners: BTreeMap<ScannerKey, Scanner<M>>,
}

impl<'a, M> ScannerRegistry<'a, M>
where
    M: PartialEq + Clone,
{
    pub fn new(grid: &'a Grid<M>, run_length: usize) -> Self {
        Self {
            grid,
            run_length,
            scanners: BTreeMap::new(),
        }
    }

    pub fn grid(&self) -> &'a Grid<M> {
        self.grid
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Places a scanner at `start`. Returns `false` when the cell is empty or off the grid.
    pub fn seed(&mut self, start: Position, direction: Direction) -> bool {
        match Scanner::new(start, self.grid.cell(start).cloned(), direction) {
            Ok(scanner) => {
                self.scanners.insert(ScannerKey::new(start, direction), scanner);
                true
            }
            Err(_) => false,
        }
    }

    pub fn advance_round(&mut self) -> RoundReport {
        let grid = self.grid;
        let mut report = RoundReport::default();

        self.scanners.retain(|_, scanner| match step_scanner(grid, scanner) {
            Some(removal) => {
                report.record(removal);
                false
            }
            None => true,
        });

        report.alive = self.scanners.len();
        report
    }

    pub fn is_empty(&self) -> bool {
        self.scanners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scanners.len()
    }

    pub fn contains(&self, key: &ScannerKey) -> bool {
        self.scanners.contains_key(key)
    }

    /// Some surviving scanner. Callers must not rely on which one.
    pub fn any_survivor(&self) -> Option<(&ScannerKey, &Scanner<M>)> {
        self.scanners.iter().next()
    }

    pub fn into_survivor(self) -> Option<(ScannerKey, Scanner<M>)> {
        self.scanners.into_iter().next()
    }
}

fn step_scanner<M: PartialEq>(grid: &Grid<M>, scanner: &mut Scanner<M>) -> Option<Removal> {
    if !scanner.advance() {
        return Some(Removal::OutOfBounds);
    }
    match grid.get(scanner.position()) {
        None => Some(Removal::OutOfBounds),
        Some(None) => Some(Removal::EmptyCell),
        Some(Some(mark)) if mark != scanner.value() => Some(Removal::ValueMismatch),
        Some(Some(_)) => None,
    }
}
