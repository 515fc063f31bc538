use std::fmt;

use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimension = self.dimension();
        let header: String = (0..dimension)
            .map(|col| format!(" {}", (b'a' + col as u8) as char))
            .collect();

        writeln!(f, "   {}", header)?;
        for row in 0..dimension {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..dimension {
                write!(f, " {}", self.piece_at(row as isize, col as isize).to_char())?;
            }
            writeln!(f, "  {}", row + 1)?;
        }
        write!(f, "   {}", header)
    }
}

/// Builds a board from a grid of cell characters, one row per line, in the
/// same alphabet as the position notation. The dimension is inferred from
/// the number of cells.
#[macro_export]
macro_rules! checkers_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        let dimension = (cells.len() as f64).sqrt() as usize;
        assert_eq!(
            dimension * dimension,
            cells.len(),
            "Invalid number of squares, got {}",
            cells.len()
        );
        let position = cells
            .chunks(dimension)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("/");
        position
            .parse::<$crate::board::Board>()
            .unwrap()
    }};
}
