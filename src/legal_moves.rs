//! Legality filtering and the derived game verdicts.
//!
//! A legal move is a pseudo-legal move that does not leave the mover's own
//! king in check. Checkmate and stalemate both mean "zero legal moves"; the
//! discriminator is solely whether the side to move is currently in check,
//! so the two are mutually exclusive by construction.

use crate::board::{Board, Square};
use crate::check::{is_in_check, would_be_in_check};
use crate::move_generator::get_possible_moves;
use crate::piece::Color;

/// The legal destinations of one piece, keyed by the square it stands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub square: Square,
    pub moves: Vec<Square>,
}

/// Every legal move available to `color`, grouped per piece in row-major
/// board order. Pieces with no surviving moves are omitted.
pub fn get_all_valid_moves(board: &Board, color: Color) -> Vec<PieceMoves> {
    let mut all_moves = Vec::new();
    for (square, piece) in board.pieces(color) {
        let moves: Vec<Square> = get_possible_moves(&piece, square, board)
            .into_iter()
            .filter(|to| !would_be_in_check(board, square, *to, color))
            .collect();
        if !moves.is_empty() {
            all_moves.push(PieceMoves { square, moves });
        }
    }
    all_moves
}

/// In check with zero legal moves.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    get_all_valid_moves(board, color).is_empty()
}

/// Not in check, with zero legal moves.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    if is_in_check(board, color) {
        return false;
    }
    get_all_valid_moves(board, color).is_empty()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn legal_moves_never_leave_mover_in_check() {
        // The position before the fool's mate blow lands: both sides still
        // have moves, and Black's queen has a mating raid available.
        let board = Board::from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR").unwrap();
        for color in [Color::White, Color::Black] {
            for piece_moves in get_all_valid_moves(&board, color) {
                for to in piece_moves.moves {
                    let after = board.apply_unchecked(piece_moves.square, to);
                    assert!(!is_in_check(&after, color));
                }
            }
        }
    }

    #[test]
    fn pinned_piece_may_not_move_away() {
        // White bishop d1 is pinned against the king e1 by the rook a1.
        let board = Board::from_fen("4k3/8/8/8/8/8/8/r2BK3").unwrap();
        let all = get_all_valid_moves(&board, Color::White);
        let bishop = all.iter().find(|pm| pm.square == (7, 3));
        // The bishop has pseudo-legal diagonal moves but every one of them
        // exposes the king, so it contributes no entry at all.
        assert!(bishop.is_none());
    }

    #[test]
    fn fools_mate_is_checkmate_for_white() {
        // 1. f3 e5 2. g4 Qh4#
        let board = Board::initial();
        let board = board.apply_unchecked((6, 5), (5, 5));
        let board = board.apply_unchecked((1, 4), (3, 4));
        let board = board.apply_unchecked((6, 6), (4, 6));
        let board = board.apply_unchecked((0, 3), (4, 7));
        assert!(is_in_check(&board, Color::White));
        assert!(is_checkmate(&board, Color::White));
        assert!(!is_stalemate(&board, Color::White));
        assert!(get_all_valid_moves(&board, Color::White).is_empty());
    }

    #[test]
    fn cornered_king_is_stalemated() {
        // Black king a8, white queen c7, white king c8-adjacent support.
        let board = Board::from_fen("k7/2Q5/8/8/8/8/8/4K3").unwrap();
        assert!(is_stalemate(&board, Color::Black));
        assert!(!is_checkmate(&board, Color::Black));
    }

    #[test]
    fn verdicts_are_mutually_exclusive() {
        let positions = [
            "k7/2Q5/8/8/8/8/8/4K3",                // stalemate
            "7k/6Q1/5K2/8/8/8/8/8",                // queen mate
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", // start
        ];
        for fen in positions {
            let board = Board::from_fen(fen).unwrap();
            for color in [Color::White, Color::Black] {
                assert!(!(is_checkmate(&board, color) && is_stalemate(&board, color)));
            }
        }
    }
}
