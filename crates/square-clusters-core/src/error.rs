/// Malformed grid input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NonBinaryCell { row: usize, col: usize, value: u8 },
    #[error("unexpected character {ch:?} on line {line}")]
    InvalidChar { line: usize, ch: char },
}

/// Errors returned by the cluster search.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("min_size must be in [2, {size}], got {min_size}")]
    InvalidMinSize { min_size: usize, size: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
}
