//! Static evaluation: material values, positional bonus tables, and the
//! per-move and whole-board scoring functions the bot runs on.
//!
//! Convention: scores are always from Black's perspective, consistent with
//! Black being the maximizing side in the search. Positive favors Black.

use crate::board::{Board, Square};
use crate::piece::{Color, Piece, PieceKind};

/// Numeric representation of an evaluation score, in centipawns.
pub type Score = i32;

/// Flat bonus for landing in the central 2x2 zone (rows 3-4, cols 3-4).
const CENTER_BONUS: Score = 10;

/// Conventional material value for a piece kind.
///
/// The king's value is a large sentinel; kings are effectively priceless
/// and the number only matters in that it dominates every other term.
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Pawn positional bonuses, indexed `[row][col]` from Black's perspective.
/// Rewards advancing and holding the center files.
const PAWN_TABLE: [[Score; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

/// Knight positional bonuses, indexed `[row][col]` from Black's
/// perspective. Centralized knights are worth more, rim knights less.
const KNIGHT_TABLE: [[Score; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

/// Positional bonus for `piece` standing on `square`.
///
/// Tables exist only for pawns and knights; everything else scores zero.
/// Black reads the tables directly, White reads them mirrored across the
/// horizontal midline so both sides are rewarded for symmetric squares.
pub fn position_bonus(piece: &Piece, square: &Square) -> Score {
    let (row, col) = (square.0 as usize, square.1 as usize);
    match piece.kind {
        PieceKind::Pawn => match piece.color {
            Color::Black => PAWN_TABLE[row][col],
            Color::White => PAWN_TABLE[7 - row][col],
        },
        PieceKind::Knight => match piece.color {
            Color::Black => KNIGHT_TABLE[row][col],
            Color::White => KNIGHT_TABLE[7 - row][col],
        },
        _ => 0,
    }
}

/// Static score of one candidate move: value of any captured piece, plus
/// the mover's positional bonus at the destination, plus the center bonus.
pub fn evaluate_move(board: &Board, from: &Square, to: &Square) -> Score {
    let mut score = 0;

    if let Some(captured) = board.view(*to) {
        score += piece_value(captured.kind);
    }

    if let Some(piece) = board.view(*from) {
        score += position_bonus(piece, to);
    }

    if (to.0 >= 3) & (to.0 <= 4) & (to.1 >= 3) & (to.1 <= 4) {
        score += CENTER_BONUS;
    }

    score
}

/// Static score of a whole board: material plus positional bonus summed
/// over every piece, added for Black and subtracted for White.
pub fn evaluate_position(board: &Board) -> Score {
    let mut score = 0;
    for (square, piece) in board.pieces(Color::Black) {
        score += piece_value(piece.kind) + position_bonus(&piece, &square);
    }
    for (square, piece) in board.pieces(Color::White) {
        score -= piece_value(piece.kind) + position_bonus(&piece, &square);
    }
    score
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn initial_position_is_balanced() {
        assert_eq!(evaluate_position(&Board::initial()), 0);
    }

    #[test]
    fn position_bonus_mirrors_across_midline() {
        let black_knight = Piece::new(PieceKind::Knight, Color::Black);
        let white_knight = Piece::new(PieceKind::Knight, Color::White);
        for row in 0..8i8 {
            for col in 0..8i8 {
                assert_eq!(
                    position_bonus(&black_knight, &(row, col)),
                    position_bonus(&white_knight, &(7 - row, col)),
                );
            }
        }
    }

    #[test]
    fn capture_dominates_quiet_move() {
        // White queen on d5, black rook b5 en prise for the rook on b8.
        let board = Board::from_fen("1r2k3/8/8/1r1Q4/8/8/8/4K3").unwrap();
        let capture = evaluate_move(&board, &(3, 1), &(3, 3));
        let quiet = evaluate_move(&board, &(3, 1), &(2, 1));
        assert!(capture >= 900);
        assert!(capture > quiet);
    }

    #[test]
    fn center_zone_adds_flat_bonus() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3").unwrap();
        // Rook has no table; a quiet rook move into the center scores
        // exactly the center bonus, one outside it scores zero.
        assert_eq!(evaluate_move(&board, &(7, 0), &(3, 3)), 10);
        assert_eq!(evaluate_move(&board, &(7, 0), &(5, 0)), 0);
    }

    #[test]
    fn missing_queen_swings_the_eval() {
        // Same start position minus the white queen.
        let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR").unwrap();
        assert_eq!(evaluate_position(&board), 900);
    }
}
