//! Validated square binary grid.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Square matrix of `0`/`1` cells stored row-major.
///
/// Construction validates the shape and the cell values, so every
/// `BinaryGrid` is non-empty, square and binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct BinaryGrid {
    size: usize,
    cells: Vec<u8>,
}

impl BinaryGrid {
    /// Build a grid from rows of `0`/`1` values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 1 {
                    return Err(GridError::NonBinaryCell { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Build a `size`×`size` grid from a cell predicate `(row, col) -> bool`.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(u8::from(f(row, col)));
            }
        }
        Ok(Self { size, cells })
    }

    /// Parse the text form: one line per row, cells `0`/`1`, optional
    /// whitespace between cells. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars() {
                match ch {
                    '0' => row.push(0),
                    '1' => row.push(1),
                    c if c.is_whitespace() => {}
                    c => return Err(GridError::InvalidChar { line: idx + 1, ch: c }),
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at (`row`, `col`).
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(col < self.size, "column {col} out of range");
        self.cells[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Count of `1` cells.
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }
}

impl fmt::Display for BinaryGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for BinaryGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Vec<u8>>> for BinaryGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<BinaryGrid> for Vec<Vec<u8>> {
    fn from(grid: BinaryGrid) -> Self {
        grid.rows().map(<[u8]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grid() {
        let rows: Vec<Vec<u8>> = Vec::new();
        assert_eq!(BinaryGrid::from_rows(&rows), Err(GridError::Empty));
        assert_eq!(BinaryGrid::parse("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = BinaryGrid::from_rows(&[vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn rejects_non_square_grid() {
        let err = BinaryGrid::from_rows(&[vec![0, 1, 1], vec![1, 0, 0]]).unwrap_err();
        assert!(matches!(err, GridError::NotSquare { row: 0, len: 3, .. }));
    }

    #[test]
    fn rejects_non_binary_values() {
        let err = BinaryGrid::from_rows(&[[0u8, 2], [1, 1]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NonBinaryCell {
                row: 0,
                col: 1,
                value: 2
            }
        );
    }

    #[test]
    fn parses_compact_and_spaced_text() {
        let a = BinaryGrid::parse("01\n10\n").unwrap();
        let b: BinaryGrid = "0 1\n1 0".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(0, 1), 1);
        assert_eq!(a.get(1, 1), 0);
        assert_eq!(a.count_ones(), 2);
    }

    #[test]
    fn parse_reports_bad_character_line() {
        let err = BinaryGrid::parse("01\n1x").unwrap_err();
        assert_eq!(err, GridError::InvalidChar { line: 2, ch: 'x' });
    }

    #[test]
    fn display_matches_parse() {
        let grid = BinaryGrid::from_fn(3, |r, c| (r + c) % 2 == 0).unwrap();
        let text = grid.to_string();
        assert_eq!(text, "1 0 1\n0 1 0\n1 0 1");
        assert_eq!(BinaryGrid::parse(&text).unwrap(), grid);
    }

    #[test]
    fn serde_uses_nested_rows() {
        let grid = BinaryGrid::parse("10\n01").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[1,0],[0,1]]");
        let back: BinaryGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<BinaryGrid>("[[1,0]]").is_err());
    }
}
