use crate::grid::{Direction, Grid, Position};
use super::registry::{RoundReport, ScannerRegistry};
use super::seeding::SeedingMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine<M> {
    pub mark: M,
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
}

impl<M> WinningLine<M> {
    pub fn new(mark: M, start: Position, end: Position, direction: Direction) -> Self {
        Self {
            mark,
            start,
            end,
            direction,
        }
    }
}

pub fn setup_scanners<M>(grid: &Grid<M>, run_length: usize, mode: SeedingMode) -> ScannerRegistry<'_, M>
where
    M: PartialEq + Clone,
{
    let mut registry = ScannerRegistry::new(grid, run_length);
    registry.seed_all(mode);
    registry
}

/// Runs `run_length - 1` rounds, reporting each to `observer` as `(round, report)`.
/// Stops as soon as no scanner is left.
pub fn determine_winner_observed<M, F>(mut registry: ScannerRegistry<'_, M>, mut observer: F) -> Option<WinningLine<M>>
where
    M: PartialEq + Clone,
    F: FnMut(usize, &RoundReport),
{
    for round in 1..registry.run_length() {
        let report = registry.advance_round();
        observer(round, &report);
        if registry.is_empty() {
            return None;
        }
    }

    let (key, scanner) = registry.into_survivor()?;
    let end = scanner.position();
    let direction = scanner.direction();
    Some(WinningLine::new(scanner.into_value(), key.start(), end, direction))
}

pub fn determine_winning_line<M>(registry: ScannerRegistry<'_, M>) -> Option<WinningLine<M>>
where
    M: PartialEq + Clone,
{
    determine_winner_observed(registry, |_, _| {})
}

pub fn determine_winner<M>(registry: ScannerRegistry<'_, M>) -> Option<M>
where
    M: PartialEq + Clone,
{
    determine_winning_line(registry).map(|line| line.mark)
}

pub fn check_win<M>(grid: &Grid<M>, run_length: usize) -> Option<M>
where
    M: PartialEq + Clone,
{
    determine_winner(setup_scanners(grid, run_length, SeedingMode::Full))
}

pub fn check_win_with_line<M>(grid: &Grid<M>, run_length: usize) -> Option<WinningLine<M>>
where
    M: PartialEq + Clone,
{
    determine_winning_line(setup_scanners(grid, run_length, SeedingMode::Full))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grid(rows: &[&str]) -> Grid<char> {
        let cells: Vec<Vec<Option<char>>> = rows
            .iter()
            .map(|row| row.chars().map(|c| if c == '_' { None } else { Some(c) }).collect())
            .collect();
        Grid::from_rows(cells).unwrap()
    }

    fn cells_along(line: &WinningLine<char>, run_length: usize) -> Vec<Position> {
        let mut cells = vec![line.start];
        let mut current = line.start;
        for _ in 1..run_length {
            current = current.step(line.direction).unwrap();
            cells.push(current);
        }
        cells
    }

    /// Marks that own at least one run of `run_length`, found by direct checking from every cell.
    fn brute_force_winners(board: &Grid<char>, run_length: usize) -> Vec<char> {
        let mut winners = Vec::new();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let Some(&mark) = board.cell(Position::new(row, col)) else {
                    continue;
                };
                for direction in Direction::ALL {
                    let mut current = Position::new(row, col);
                    let mut matched = 1;
                    while matched < run_length {
                        match current.step(direction) {
                            Some(next) if board.cell(next) == Some(&mark) => {
                                current = next;
                                matched += 1;
                            }
                            _ => break,
                        }
                    }
                    if matched >= run_length && !winners.contains(&mark) {
                        winners.push(mark);
                    }
                }
            }
        }
        winners
    }

    #[test]
    fn test_tictactoe_diagonal_win() {
        let board = grid(&["x_x", "oxo", "xoo"]);
        let line = check_win_with_line(&board, 3).unwrap();

        assert_eq!(line.mark, 'x');
        assert_eq!(line.direction, Direction::AscendingDiagonal);
        assert_eq!(line.start, Position::new(2, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Grid::<char>::empty(3, 3).unwrap();
        assert_eq!(check_win(&board, 3), None);
    }

    #[test]
    fn test_connect_four_vertical_win() {
        let board = grid(&[
            "_______",
            "_______",
            "___o___",
            "__xo___",
            "__xox__",
            "_xxoxo_",
        ]);

        let line = check_win_with_line(&board, 4).unwrap();
        assert_eq!(line.mark, 'o');
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.start, Position::new(2, 3));
        assert_eq!(line.end, Position::new(5, 3));
    }

    #[test]
    fn test_connect_four_without_run_is_draw() {
        let board = grid(&[
            "_______",
            "_______",
            "___x___",
            "__xo___",
            "__xox__",
            "_xxoxo_",
        ]);

        assert_eq!(check_win(&board, 4), None);
    }

    #[test]
    fn test_single_row_run_not_at_edge() {
        let board = grid(&["aaaba"]);
        let line = check_win_with_line(&board, 3).unwrap();

        assert_eq!(line.mark, 'a');
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_run_length_one_reports_any_mark() {
        let board = grid(&["___", "_z_", "___"]);
        assert_eq!(check_win(&board, 1), Some('z'));

        let board = grid(&["xo", "ox"]);
        let winner = check_win(&board, 1).unwrap();
        assert!(winner == 'x' || winner == 'o');
    }

    #[test]
    fn test_run_length_zero_has_no_winner() {
        let board = grid(&["xx"]);
        assert_eq!(check_win(&board, 0), None);
    }

    #[test]
    fn test_run_longer_than_board_has_no_winner() {
        let board = grid(&["xxx", "xxx"]);
        assert_eq!(check_win(&board, 3), Some('x'));
        assert_eq!(check_win(&board, 4), None);
    }

    #[test]
    fn test_edge_only_seeding_misses_inner_runs() {
        let board = grid(&["oxxx", "____"]);

        assert_eq!(check_win(&board, 3), Some('x'));
        let registry = setup_scanners(&board, 3, SeedingMode::EdgeOnly);
        assert_eq!(determine_winner(registry), None);

        let board = grid(&["xxxo", "____"]);
        let registry = setup_scanners(&board, 3, SeedingMode::EdgeOnly);
        assert_eq!(determine_winner(registry), Some('x'));
    }

    #[test]
    fn test_stops_early_once_registry_is_empty() {
        let board = grid(&["xo_____"]);
        let registry = setup_scanners(&board, 5, SeedingMode::Full);
        let mut rounds = Vec::new();

        let result = determine_winner_observed(registry, |round, _| rounds.push(round));

        assert_eq!(result, None);
        assert_eq!(rounds, vec![1]);
    }

    #[test]
    fn test_alive_count_never_grows() {
        let board = grid(&[
            "xxoxxo",
            "oxxxoo",
            "xoxxxo",
            "ooxoxx",
            "xxoxox",
        ]);
        let registry = setup_scanners(&board, 4, SeedingMode::Full);
        let mut alive = vec![registry.len()];

        determine_winner_observed(registry, |_, report| alive.push(report.alive));

        assert!(alive.windows(2).all(|pair| pair[1] <= pair[0]));
    }

    #[test]
    fn test_random_boards_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..2000 {
            let rows: usize = rng.random_range(1..=7);
            let cols: usize = rng.random_range(1..=7);
            let run_length: usize = rng.random_range(1..=5);
            let cells: Vec<Vec<Option<char>>> = (0..rows)
                .map(|_| {
                    (0..cols)
                        .map(|_| match rng.random_range(0..3) {
                            0 => None,
                            1 => Some('x'),
                            _ => Some('o'),
                        })
                        .collect()
                })
                .collect();
            let board = Grid::from_rows(cells).unwrap();

            let expected = brute_force_winners(&board, run_length);
            match check_win_with_line(&board, run_length) {
                Some(line) => {
                    assert!(expected.contains(&line.mark), "board:\n{}\nrun {}", board, run_length);
                    for pos in cells_along(&line, run_length) {
                        assert_eq!(board.cell(pos), Some(&line.mark));
                    }
                    assert_eq!(cells_along(&line, run_length).last(), Some(&line.end));
                }
                None => assert!(expected.is_empty(), "board:\n{}\nrun {}", board, run_length),
            }
        }
    }
}
