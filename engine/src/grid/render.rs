use std::fmt;

use super::board::Grid;

const EMPTY_CELL: &str = "_";

impl<M: fmt::Display> fmt::Display for Grid<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.iter_rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(mark) => mark.to_string(),
                    None => EMPTY_CELL.to_string(),
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
