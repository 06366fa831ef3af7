use std::fmt::Display;

use crate::board::{Board, Piece, PieceKind, Square};

/// A pseudo-legal move. `promotion` is only set when a pawn reaches the far rank.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(start: Square, end: Square, promotion: Option<PieceKind>) -> Move {
        Move { start, end, promotion }
    }

    /// Piece letter, origin, '-' or 'x' depending on whether `end` is occupied, destination, then the promotion
    /// letter. Without a board the piece is shown as '?' and every move as quiet.
    pub fn pretty_print(&self, board: Option<&Board>) -> String {
        let (piece_name, capture_char) = match board {
            Some(b) => (
                b.piece_at(self.start).map_or('?', |p| p.letter()),
                if b.piece_at(self.end).is_some() { 'x' } else { '-' },
            ),
            None => ('?', '-'),
        };

        let promoted_to = match (self.promotion, board.and_then(|b| b.piece_at(self.start))) {
            (Some(kind), Some(pawn)) => Piece::new(pawn.color, kind).letter(),
            (Some(kind), None) => kind.letter(),
            (None, _) => ' ',
        };

        format!("{}{}{}{}{}", piece_name, self.start, capture_char, self.end, promoted_to)
            .trim_end()
            .to_string()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod moves_tests {
    use crate::board::{Board, Color, Piece, PieceKind, Square};

    use super::Move;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    pub fn moves_compare_structurally() {
        let a = Move::new(sq(7, 4), sq(8, 4), Some(PieceKind::Queen));
        let b = Move::new(sq(7, 4), sq(8, 4), Some(PieceKind::Queen));
        let c = Move::new(sq(7, 4), sq(8, 4), Some(PieceKind::Knight));
        let d = Move::new(sq(7, 4), sq(8, 4), None);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    pub fn display_shows_squares_and_promotion() {
        assert_eq!(Move::new(sq(2, 4), sq(4, 4), None).to_string(), "(2,4)->(4,4)");
        assert_eq!(Move::new(sq(7, 1), sq(8, 2), Some(PieceKind::Rook)).to_string(), "(7,1)->(8,2)=R");
    }

    #[test]
    pub fn pretty_print_uses_board_for_piece_and_capture() {
        let mut board = Board::new();
        board.place(sq(7, 1), Piece::new(Color::Black, PieceKind::Pawn));
        board.place(sq(6, 2), Piece::new(Color::White, PieceKind::Knight));

        let capture = Move::new(sq(7, 1), sq(6, 2), None);
        assert_eq!(capture.pretty_print(Some(&board)), "p(7,1)x(6,2)");
        assert_eq!(capture.pretty_print(None), "?(7,1)-(6,2)");

        let promo = Move::new(sq(2, 8), sq(1, 8), Some(PieceKind::Queen));
        board.place(sq(2, 8), Piece::new(Color::Black, PieceKind::Pawn));
        assert_eq!(promo.pretty_print(Some(&board)), "p(2,8)-(1,8)q");
    }
}
