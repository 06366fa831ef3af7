//! Board storage and pseudo-legal move generation for single chess pieces.
//!
//! Moves are generated from geometry alone. Turn order, check, castling and en passant belong to the caller.

pub mod board;
pub mod error;
pub mod move_generator;
pub mod moves;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use error::{ChessError, Result};
pub use move_generator::piece_moves;
pub use moves::Move;
