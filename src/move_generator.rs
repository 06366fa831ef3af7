use std::collections::HashSet;

use log::{debug, error, log_enabled, trace};

use crate::{
    board::{Board, Color, PieceKind, Square},
    error::{ChessError, Result},
    moves::Move,
};

/// If the piece can slide through squares when moving, indexed like [OFFSET]
const SLIDES: [bool; 5] = [false, true, true, true, false];
#[rustfmt::skip]
/// (row, column) offsets for moving in each piece's valid directions. (0, 0) ends a shorter list.
const OFFSET: [[(i8, i8); 8]; 5] = [
    [ (-2, -1), (-2,  1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1) ], /* KNIGHT */
    [ (-1, -1), (-1,  1), ( 1, -1), ( 1, 1), (0,  0), (0, 0), (0,  0), (0, 0) ], /* BISHOP */
    [ (-1,  0), ( 0, -1), ( 0,  1), ( 1, 0), (0,  0), (0, 0), (0,  0), (0, 0) ], /* ROOK */
    [ (-1, -1), (-1,  0), (-1,  1), ( 0,-1), (0,  1), (1,-1), (1,  0), (1, 1) ], /* QUEEN */
    [ (-1, -1), (-1,  0), (-1,  1), ( 0,-1), (0,  1), (1,-1), (1,  0), (1, 1) ], /* KING */
];

/// Row of [OFFSET] and [SLIDES] for a kind. Pawns have their own generator.
#[inline]
fn offset_index(kind: PieceKind) -> Option<usize> {
    match kind {
        PieceKind::Knight => Some(0),
        PieceKind::Bishop => Some(1),
        PieceKind::Rook => Some(2),
        PieceKind::Queen => Some(3),
        PieceKind::King => Some(4),
        PieceKind::Pawn => None,
    }
}

/// All squares the piece on `square` could move to, ignoring whether the move leaves its own king in check.
///
/// The board is never modified and the same board and square always give the same set. Every move starts on
/// `square`. Asking for an empty square is an error rather than an empty set.
pub fn piece_moves(board: &Board, square: Square) -> Result<HashSet<Move>> {
    let Some(piece) = board.piece_at(square) else {
        error!("Requested moves for empty square {square}\n{board:?}");
        return Err(ChessError::EmptySquare(square));
    };

    let mut result = HashSet::new();
    match offset_index(piece.kind) {
        Some(table) => {
            for (d_row, d_col) in OFFSET[table] {
                if (d_row, d_col) == (0, 0) {
                    break;
                }

                cast_ray(board, square, piece.color, d_row, d_col, SLIDES[table], &mut result);
            }
        }
        None => pawn_moves(board, square, piece.color, &mut result),
    }

    debug!("{} moves for {} on {}", result.len(), piece, square);
    if log_enabled!(log::Level::Trace) {
        for m in &result {
            trace!("{}", m.pretty_print(Some(board)));
        }
    }

    Ok(result)
}

/// Steps from `start` until the edge of the board or a piece. An enemy piece ends the ray with a capture, a
/// friendly piece ends it without one. Non-sliding pieces take only the first step.
fn cast_ray(
    board: &Board,
    start: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    slides: bool,
    result: &mut HashSet<Move>,
) {
    let mut cur_pos = start;
    while let Some(target) = cur_pos.offset(d_row, d_col) {
        match board.piece_at(target) {
            None => {
                result.insert(Move::new(start, target, None));
            }
            Some(target_piece) => {
                if target_piece.color != color {
                    result.insert(Move::new(start, target, None));
                }
                break;
            }
        }

        if !slides {
            break;
        }
        cur_pos = target;
    }
}

fn pawn_moves(board: &Board, start: Square, color: Color, result: &mut HashSet<Move>) {
    let direction = color.pawn_direction();

    // Diagonals only ever capture
    for d_col in [-1, 1] {
        if let Some(target) = start.offset(direction, d_col) {
            if board.piece_at(target).is_some_and(|p| p.color != color) {
                push_pawn_move(start, target, color, result);
            }
        }
    }

    // Forward squares must be empty. A blocked first step also blocks the double step.
    let Some(one_step) = start.offset(direction, 0) else {
        return;
    };
    if board.piece_at(one_step).is_some() {
        return;
    }
    push_pawn_move(start, one_step, color, result);

    // On starting rank?
    if start.row() == color.pawn_start_row() {
        if let Some(two_step) = one_step.offset(direction, 0) {
            if board.piece_at(two_step).is_none() {
                result.insert(Move::new(start, two_step, None));
            }
        }
    }
}

/// Adds one move per promotion kind when `target` is on the far rank, otherwise a single plain move
#[inline]
fn push_pawn_move(start: Square, target: Square, color: Color, result: &mut HashSet<Move>) {
    if target.row() == color.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            result.insert(Move::new(start, target, Some(kind)));
        }
    } else {
        result.insert(Move::new(start, target, None));
    }
}

impl Board {
    /// See [piece_moves]
    pub fn piece_moves(&self, square: Square) -> Result<HashSet<Move>> {
        piece_moves(self, square)
    }

    /// Pseudo-legal moves of every piece of `color`
    pub fn team_moves(&self, color: Color) -> HashSet<Move> {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .flat_map(|(square, _)| piece_moves(self, square).unwrap_or_default())
            .collect()
    }
}
