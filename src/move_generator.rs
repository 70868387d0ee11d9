//! Dispatch from a piece to its pseudo-legal destination generator.
//!
//! "Pseudo-legal" means the move respects board boundaries, blocking, and
//! capture-of-opposite-color, but ignores whether it exposes the mover's
//! own king; that filtering lives in `legal_moves`.

use crate::board::{Board, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;
use crate::piece::{Piece, PieceKind};

/// All pseudo-legal destinations for `piece` standing on `square`.
///
/// Order within the list follows the fixed direction/offset arrays of each
/// generator; correctness must not depend on it, but the bot's
/// deterministic tie-breaking does.
pub fn get_possible_moves(piece: &Piece, square: Square, board: &Board) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, square, board),
        PieceKind::Rook => rook_moves(square, board, piece.color),
        PieceKind::Knight => knight_moves(square, board, piece.color),
        PieceKind::Bishop => bishop_moves(square, board, piece.color),
        PieceKind::Queen => queen_moves(square, board, piece.color),
        PieceKind::King => king_moves(square, board, piece.color),
    }
}
