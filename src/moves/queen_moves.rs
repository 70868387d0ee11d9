use crate::board::{Board, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;
use crate::piece::Color;

/// Pseudo-legal queen destinations: the union of the rook and bishop move
/// sets from the same square.
pub fn queen_moves(square: Square, board: &Board, color: Color) -> Vec<Square> {
    let mut moves = rook_moves(square, board, color);
    moves.extend(bishop_moves(square, board, color));
    moves
}
