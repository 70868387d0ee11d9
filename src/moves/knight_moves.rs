use crate::board::{move_square, Board, Square};
use crate::piece::Color;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Pseudo-legal knight destinations: the eight L-shaped offsets, excluding
/// squares held by a same-color piece.
pub fn knight_moves(square: Square, board: &Board, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    for (d_row, d_col) in KNIGHT_OFFSETS {
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
