// error.rs - Engine error types

use thiserror::Error;

/// Errors raised at the engine's input boundaries.
///
/// Control-surface commands never return these to the caller; they log them
/// and report a plain `false`/`None` instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration value is out of its allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Raw board rows were empty or of unequal length.
    #[error("ragged board: row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A raw board had no rows or no columns.
    #[error("board must have at least one row and one column")]
    EmptyBoard,

    /// A pattern without any live cell.
    #[error("pattern {0:?} has no cells")]
    EmptyPattern(String),

    /// A cell coordinate outside the board.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// JSON decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a file or starting the timer runtime failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
