use thiserror::Error;
use crate::board::Cell;

/// Reasons for rejecting a board definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have positive width and height, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    #[error("board of size {width}x{height} needs {expected} cells, got {found}")]
    DimensionMismatch { width: usize, height: usize, expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("expected {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },
    #[error("invalid value {value} of cell at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: Cell },
    #[error("cell at row {row}, column {col} lies on the border and must be a wall or a goal cell")]
    MissingBorder { row: usize, col: usize },
    #[error("board has no goal brick")]
    MissingGoalBrick,
    #[error("invalid header line {0:?}, expected \"width,height,\"")]
    InvalidHeader(String),
    #[error("line {line}: {token:?} is not a cell value")]
    InvalidNumber { line: usize, token: String },
}

/// Returned when a search strategy name cannot be recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search strategy {0:?}, expected one of: bfs, dfs, ids")]
pub struct UnknownStrategy(pub String);
