use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("board size {size} is below the minimum of {min}")]
    InvalidSize { size: usize, min: usize },
    #[error("no free cell left to spawn a tile")]
    NoFreeCells,
    #[error("board must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) holds {value}, expected 0 or a power of two")]
    InvalidTile { row: usize, col: usize, value: u32 },
}
