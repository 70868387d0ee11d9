use crate::board::{move_square, Board, Square};
use crate::piece::{Color, Piece};

/// Pseudo-legal pawn destinations: one step forward onto an empty square,
/// two steps from the starting rank when both squares are empty, and
/// diagonal captures onto enemy pieces. No en passant, no promotion.
pub fn pawn_moves(piece: &Piece, square: Square, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();
    let direction: i8 = match piece.color {
        Color::White => -1,
        Color::Black => 1,
    };
    let start_row: i8 = match piece.color {
        Color::White => 6,
        Color::Black => 1,
    };

    if let Ok(one_step) = move_square(&square, direction, 0) {
        if board.view(one_step).is_none() {
            moves.push(one_step);
            // The double step requires the intermediate square empty too,
            // which the branch above already established.
            if square.0 == start_row {
                if let Ok(two_step) = move_square(&square, direction * 2, 0) {
                    if board.view(two_step).is_none() {
                        moves.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Ok(capture) = move_square(&square, direction, d_col) {
            if let Some(target) = board.view(capture) {
                if target.color != piece.color {
                    moves.push(capture);
                }
            }
        }
    }

    moves
}
