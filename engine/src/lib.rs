pub mod config;
pub mod grid;
pub mod logger;
pub mod scan;

pub use grid::{Direction, Grid, GridError, Position};
pub use scan::{
    SeedingMode, WinningLine, check_win, check_win_with_line, determine_winner,
    determine_winner_observed, determine_winning_line, setup_scanners,
};
