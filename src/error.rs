use crate::board::Square;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Row or column outside of 1..=8
    #[error("Square ({row}, {col}) is off the board, expected row and column in 1..=8")]
    OutOfRange { row: i32, col: i32 },

    /// Moves were requested for a square that holds no piece
    #[error("No piece at {0} to generate moves for")]
    EmptySquare(Square),

    #[error("Unknown piece letter '{0}', expected one of KQBNRP or kqbnrp")]
    InvalidPieceLetter(char),

    #[error("Could not parse square '{0}', expected ROW,COL")]
    InvalidSquare(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;
