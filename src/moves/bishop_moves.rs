use crate::board::{move_square, Board, Square};
use crate::piece::Color;

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Pseudo-legal bishop destinations: slides along the four diagonals until
/// blocked, including the first enemy-occupied square.
pub fn bishop_moves(square: Square, board: &Board, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        for step in 1..8 {
            let next = match move_square(&square, d_row * step, d_col * step) {
                Ok(next) => next,
                Err(_) => break,
            };
            match board.view(next) {
                None => moves.push(next),
                Some(target) => {
                    if target.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bishop_on_empty_board_reaches_thirteen_squares() {
        let board = Board::empty();
        assert_eq!(bishop_moves((3, 3), &board, Color::Black).len(), 13);
    }

    #[test]
    fn bishop_captures_but_does_not_pass_through() {
        // Black bishop d5, white pawn f3 on the same diagonal.
        let board = Board::from_fen("8/8/8/3b4/8/5P2/8/8").unwrap();
        let moves = bishop_moves((3, 3), &board, Color::Black);
        assert!(moves.contains(&(5, 5)));
        assert!(!moves.contains(&(6, 6)));
    }
}
