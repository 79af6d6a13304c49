mod registry;
mod scanner;
mod seeding;
mod winner;

pub use registry::{Removal, RoundReport, ScannerKey, ScannerRegistry};
pub use scanner::{EmptyStart, Scanner};
pub use seeding::SeedingMode;
pub use winner::{
    WinningLine, check_win, check_win_with_line, determine_winner, determine_winner_observed,
    determine_winning_line, setup_scanners,
};
