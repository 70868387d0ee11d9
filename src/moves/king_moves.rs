use crate::board::{move_square, Board, Square};
use crate::piece::Color;

const KING_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pseudo-legal king destinations: the eight adjacent squares, excluding
/// squares held by a same-color piece. No castling.
pub fn king_moves(square: Square, board: &Board, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    for (d_row, d_col) in KING_DIRECTIONS {
        if let Ok(next) = move_square(&square, d_row, d_col) {
            match board.view(next) {
                None => moves.push(next),
                Some(target) => {
                    if target.color != color {
                        moves.push(next);
                    }
                }
            }
        }
    }
    moves
}
