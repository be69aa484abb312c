use crate::error::GridError;

const FILLED: char = '*';
const EMPTY: char = '-';

/// Row-major grid of filled/empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Parses input lines. Lines are trimmed and blank lines skipped; the
    /// remaining rows must all be as wide as the first and contain only
    /// `*` and `-`.
    pub fn parse<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = 0;
        let mut cols = 0;
        let mut cells = Vec::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let width = line.chars().count();
            if rows == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::RaggedRows {
                    row: rows + 1,
                    expected: cols,
                    found: width,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    FILLED => cells.push(true),
                    EMPTY => cells.push(false),
                    found => {
                        return Err(GridError::InvalidCell {
                            row: rows + 1,
                            col: col + 1,
                            found,
                        })
                    }
                }
            }
            rows += 1;
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Zero-based lookup; out-of-range positions read as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rectangular_grid() {
        let grid = Grid::parse(["**-", "-*-"]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.is_filled(0, 0));
        assert!(!grid.is_filled(1, 0));
        assert!(grid.is_filled(1, 1));
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let grid = Grid::parse(["  *- ", "", "   ", "-*"]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn empty_input_is_empty_grid() {
        let grid = Grid::parse(Vec::<String>::new()).unwrap();
        assert!(grid.is_empty());
        assert!(Grid::parse(["", "  "]).unwrap().is_empty());
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::parse(["***", "**"]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = Grid::parse(["*-", "*x"]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCell {
                row: 2,
                col: 2,
                found: 'x'
            }
        );
    }

    #[test]
    fn out_of_range_reads_empty() {
        let grid = Grid::parse(["*"]).unwrap();
        assert!(!grid.is_filled(0, 1));
        assert!(!grid.is_filled(1, 0));
    }
}
