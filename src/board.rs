use std::fmt::{Debug, Display};

use log::debug;

use crate::error::{ChessError, Result};

pub const BOARD_SIZE: u8 = 8;

/// Back rank from column 1 to column 8, shared by both colors
const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// The far rank, where pawns of this color promote
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => BOARD_SIZE,
            Color::Black => 1,
        }
    }

    fn back_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => BOARD_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may become on the far rank, in the order moves are emitted
    pub const PROMOTIONS: [PieceKind; 4] = [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

    /// Upper case letter for the kind, White's rendering
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Pawn => 'P',
        }
    }
}

/// A piece has no identity beyond its color and kind, so two white rooks are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_letter(letter: char) -> Result<Piece> {
        let kind = match letter.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            'R' => PieceKind::Rook,
            'P' => PieceKind::Pawn,
            _ => return Err(ChessError::InvalidPieceLetter(letter)),
        };
        let color = if letter.is_ascii_uppercase() { Color::White } else { Color::Black };

        Ok(Piece { color, kind })
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A (row, column) coordinate, both 1-based and always within 1..=8.
///
/// Squares order by row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Square> {
        if !(1..=BOARD_SIZE as i32).contains(&row) || !(1..=BOARD_SIZE as i32).contains(&col) {
            return Err(ChessError::OutOfRange { row, col });
        }

        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// The square `d_row` rows and `d_col` columns away, or `None` when that is off the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(self.row as i32 + d_row as i32, self.col as i32 + d_col as i32).ok()
    }

    /// All 64 squares in (row, column) order
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// 0-based storage index
    #[inline]
    fn index(self) -> (usize, usize) {
        (self.row as usize - 1, self.col as usize - 1)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// 8x8 grid of optional pieces. Equal boards hash equal, so a board can key a map of positions.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// An empty board
    pub fn new() -> Board {
        Board::default()
    }

    /// A board set to the standard starting position
    pub fn starting() -> Board {
        let mut board = Board::new();
        board.reset_board();
        board
    }

    /// Stores `piece` at `square`, replacing whatever was there
    pub fn place(&mut self, square: Square, piece: Piece) {
        let (row, col) = square.index();
        self.squares[row][col] = Some(piece);
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.index();
        self.squares[row][col]
    }

    /// Empties `square` and returns its previous occupant
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = square.index();
        self.squares[row][col].take()
    }

    pub fn clear(&mut self) {
        debug!("Clearing board");
        self.squares = Default::default();
    }

    /// Overwrites every square with the standard starting position
    pub fn reset_board(&mut self) {
        debug!("Resetting board to the starting position");
        self.clear();

        for color in [Color::White, Color::Black] {
            let back_row = color.back_row();
            let pawn_row = color.pawn_start_row();

            for (col, kind) in (1..=BOARD_SIZE).zip(BACK_RANK) {
                self.squares[back_row as usize - 1][col as usize - 1] = Some(Piece::new(color, kind));
                self.squares[pawn_row as usize - 1][col as usize - 1] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    /// Occupied squares and their pieces in (row, column) order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|p| p.is_some()).count()
    }
}

impl Display for Board {
    /// One line per row from row 1 to row 8, each cell prefixed with '|'. Empty squares are a space.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.squares {
            for square in row {
                let c = match square {
                    Some(piece) => piece.letter(),
                    None => ' ',
                };
                write!(f, "|{c}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("squares", &"See end value")
            .field("piece_count", &self.piece_count())
            .finish()?;

        // Reverse so it prints with row 1 at the bottom like viewing the board as white
        let pretty_squares = self.to_string().lines().rev().collect::<Vec<_>>().join("\n");

        writeln!(f, "\nsquares: \n{}", pretty_squares)
    }
}
