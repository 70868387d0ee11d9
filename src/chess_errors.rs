//! Errors used throughout the chess core.
//!
//! This module defines the canonical error type returned by board
//! construction and game orchestration. The enum `ChessErrors` is used as
//! the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate
//! to aid diagnostics and user-facing messages.
//!
//! Note that the rules predicates themselves (`is_in_check`,
//! `is_checkmate`, `is_stalemate`, move generation) are total and never
//! return errors: an empty move list or a `false` answer is a first-class
//! game fact, not a failure. Errors only arise when parsing a position
//! string or when a caller asks the game to apply a move it may not make.

use std::error::Error;
use std::fmt;

use crate::board::Square;
use crate::game_state::GameStatus;

/// Unified error type for the chess core.
///
/// Each variant corresponds to a specific, identifiable failure mode that
/// can occur while constructing a board or driving a game forward. Variants
/// include contextual payloads where useful (for example the offending
/// `Square` or FEN character) so that callers can log or display precise
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Attempted to offset a square by `(d_row, d_col)` which would place it
    /// off the board.
    ///
    /// Payload: (origin_square, d_row, d_col)
    OutOfBounds((Square, i8, i8)),

    /// Found an unexpected character while parsing the piece-placement
    /// field of a FEN string.
    InvalidFenToken(char),

    /// A FEN placement string had malformed structure (wrong rank count or
    /// rank width).
    ///
    /// Payload: the original offending string for diagnostics.
    InvalidFenForm(String),

    /// Asked to move from a square that holds no piece.
    NoPieceAtSquare(Square),

    /// Asked to move a piece that does not belong to the side to move.
    WrongSideToMove(Square),

    /// The requested destination is not a legal move for the piece on the
    /// origin square.
    ///
    /// Payload: (from, to)
    IllegalMove((Square, Square)),

    /// Asked to apply a move to a game that has already ended.
    ///
    /// Payload: the terminal status the game is in.
    GameAlreadyOver(GameStatus),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds((square, d_row, d_col)) => write!(
                f,
                "offset ({d_row},{d_col}) from ({},{}) leaves the board",
                square.0, square.1
            ),
            ChessErrors::InvalidFenToken(c) => write!(f, "invalid FEN character: {c:?}"),
            ChessErrors::InvalidFenForm(s) => write!(f, "malformed FEN placement: {s:?}"),
            ChessErrors::NoPieceAtSquare(square) => {
                write!(f, "no piece at ({},{})", square.0, square.1)
            }
            ChessErrors::WrongSideToMove(square) => {
                write!(f, "piece at ({},{}) is not yours to move", square.0, square.1)
            }
            ChessErrors::IllegalMove((from, to)) => write!(
                f,
                "({},{}) -> ({},{}) is not a legal move",
                from.0, from.1, to.0, to.1
            ),
            ChessErrors::GameAlreadyOver(status) => {
                write!(f, "game is already over: {status:?}")
            }
        }
    }
}

impl Error for ChessErrors {}
