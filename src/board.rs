//! The 8x8 board: square coordinates, the piece grid, the standard starting
//! position, and clone-with-one-move-applied.
//!
//! Rows run 0..=7 from Black's back rank (row 0) down to White's back rank
//! (row 7); columns run 0..=7 left to right from White's queenside. Every
//! hypothetical move in this crate goes through [`Board::apply_unchecked`],
//! which clones the grid, so no caller ever observes a mutated board.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::piece::{Color, Piece, PieceKind};

/// A board coordinate as (row, col), each in 0..=7.
pub type Square = (i8, i8);

/// Offsets a square by `(d_row, d_col)`, failing if the result leaves the
/// board.
pub fn move_square(x: &Square, d_row: i8, d_col: i8) -> Result<Square, ChessErrors> {
    let y: Square = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessErrors::OutOfBounds((*x, d_row, d_col)))
    } else {
        Ok(y)
    }
}

/// True iff both row and col are in 0..=7.
#[inline]
pub fn is_valid_position(x: &Square) -> bool {
    (x.0 >= 0) & (x.0 <= 7) & (x.1 >= 0) & (x.1 <= 7)
}

/// Structural equality on (row, col).
#[inline]
pub fn is_same_position(a: &Square, b: &Square) -> bool {
    (a.0 == b.0) & (a.1 == b.1)
}

/// Column order of the back-rank pieces for both colors.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, addressed by (row, col).
///
/// At most one piece per square; in valid play at most one king per color.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board. Useful for constructing test positions piece by
    /// piece.
    pub fn empty() -> Self {
        Board::default()
    }

    /// The standard starting position: pawns on rows 1 (Black) and 6
    /// (White), back ranks R N B Q K B N R on rows 0 and 7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for col in 0..8 {
            *board.at((1, col)) = Some(Piece::new(PieceKind::Pawn, Color::Black));
            *board.at((6, col)) = Some(Piece::new(PieceKind::Pawn, Color::White));
            *board.at((0, col)) = Some(Piece::new(BACK_RANK[col as usize], Color::Black));
            *board.at((7, col)) = Some(Piece::new(BACK_RANK[col as usize], Color::White));
        }
        board
    }

    /// Immutable view of the square at `x`.
    #[inline]
    pub fn view(&self, x: Square) -> &Option<Piece> {
        &self.squares[x.0 as usize][x.1 as usize]
    }

    /// Mutable access to the square at `x`.
    #[inline]
    pub fn at(&mut self, x: Square) -> &mut Option<Piece> {
        &mut self.squares[x.0 as usize][x.1 as usize]
    }

    /// Clones the board and relocates whatever sits on `from` to `to`,
    /// overwriting (and dropping) any occupant of `to`. The moved piece has
    /// `has_moved` set. The receiver is untouched.
    ///
    /// No legality checking happens here; this is the primitive under every
    /// hypothetical-move simulation and under real move application alike.
    pub fn apply_unchecked(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        if let Some(mut piece) = next.at(from).take() {
            piece.has_moved = true;
            *next.at(to) = Some(piece);
        }
        next
    }

    /// Locates the king of `color`, if present.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Iterates over all (square, piece) pairs of `color` in row-major
    /// order. The scan order is what makes bot tie-breaking reproducible.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                (*self.view((row, col)))
                    .filter(|piece| piece.color == color)
                    .map(|piece| ((row, col), piece))
            })
        })
    }

    /// Parses the piece-placement field of a FEN string; any later fields
    /// (side to move, castling, clocks) are ignored since this crate does
    /// not model them. Mainly a convenience for stating test and benchmark
    /// positions compactly.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| ChessErrors::InvalidFenForm(fen.to_string()))?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessErrors::InvalidFenForm(fen.to_string()));
        }
        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0i8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as i8;
                    continue;
                }
                let kind = match c.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    _ => return Err(ChessErrors::InvalidFenToken(c)),
                };
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col > 7 {
                    return Err(ChessErrors::InvalidFenForm(fen.to_string()));
                }
                *board.at((row as i8, col)) = Some(Piece::new(kind, color));
                col += 1;
            }
            if col != 8 {
                return Err(ChessErrors::InvalidFenForm(fen.to_string()));
            }
        }
        Ok(board)
    }
}

/// Unicode glyph for a piece, as rendered by the terminal front-end.
pub fn piece_symbol(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '\u{2654}',
        (Color::White, PieceKind::Queen) => '\u{2655}',
        (Color::White, PieceKind::Rook) => '\u{2656}',
        (Color::White, PieceKind::Bishop) => '\u{2657}',
        (Color::White, PieceKind::Knight) => '\u{2658}',
        (Color::White, PieceKind::Pawn) => '\u{2659}',
        (Color::Black, PieceKind::King) => '\u{265A}',
        (Color::Black, PieceKind::Queen) => '\u{265B}',
        (Color::Black, PieceKind::Rook) => '\u{265C}',
        (Color::Black, PieceKind::Bishop) => '\u{265D}',
        (Color::Black, PieceKind::Knight) => '\u{265E}',
        (Color::Black, PieceKind::Pawn) => '\u{265F}',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0 1 2 3 4 5 6 7")?;
        for row in 0..8i8 {
            write!(f, "{row}   ")?;
            for col in 0..8i8 {
                match self.view((row, col)) {
                    Some(piece) => write!(f, "{} ", piece_symbol(piece))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
