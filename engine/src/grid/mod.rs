mod board;
mod position;
mod render;

pub use board::{Grid, GridError};
pub use position::{Direction, Position};
