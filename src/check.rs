//! Check detection: whether a side's king is attacked on a given board, and
//! whether a hypothetical move would leave it attacked.
//!
//! All simulations run on an independently owned clone produced by
//! `Board::apply_unchecked`; the input board is never mutated.

use crate::board::{is_same_position, Board, Square};
use crate::move_generator::get_possible_moves;
use crate::piece::Color;

/// True iff any enemy piece's pseudo-legal moves land on the square of the
/// `color` king.
///
/// A board with no `color` king answers `false`. That is a defensive
/// default for malformed positions, not a correctness guarantee; valid play
/// never removes a king.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king_square = match board.find_king(color) {
        Some(square) => square,
        None => return false,
    };

    board.pieces(color.opposite()).any(|(square, piece)| {
        get_possible_moves(&piece, square, board)
            .iter()
            .any(|target| is_same_position(target, &king_square))
    })
}

/// True iff hypothetically relocating the piece on `from` to `to` (dropping
/// any occupant of `to`, as a capture would) leaves `color` in check.
pub fn would_be_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    is_in_check(&board.apply_unchecked(from, to), color)
}
